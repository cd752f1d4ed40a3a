use bytes::Bytes;

use crate::app::config::{DISPLAY_BLOB, DISPLAY_CONTAINER};

use super::{errors::DisplayError, util::azure_blob::blob_client::BlobClient};

/// Overwrites the display copy of the form with `html`.
pub async fn save_form(html: &str, blob_client: &BlobClient) -> Result<(), DisplayError> {
    tracing::info!("saving form to display container");

    if !blob_client.container_exists(DISPLAY_CONTAINER).await? {
        return Err(DisplayError::ContainerNotFound(DISPLAY_CONTAINER.to_string()));
    }

    let data = Bytes::copy_from_slice(html.as_bytes());
    let len = data.len();

    blob_client
        .put_block_blob(DISPLAY_CONTAINER, DISPLAY_BLOB, data, &mime::TEXT_HTML, "utf-8")
        .await?;

    tracing::info!(bytes = len, blob = DISPLAY_BLOB, "uploaded form to display container");

    Ok(())
}
