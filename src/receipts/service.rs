use crate::{
    app::{models::api_error::ApiError, util},
    display,
    receipts::{
        errors::ReceiptsApiError, models::receipt_record::ReceiptRecord,
        templates::form_template::form_template,
    },
    AppState,
};

pub async fn get_receipt_record(
    client: &reqwest::Client,
    url: &str,
) -> Result<ReceiptRecord, ApiError> {
    let bytes = match util::reqwest::get_bytes(client, url).await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::error!(%e, "failed to fetch analysis data");
            return Err(ReceiptsApiError::FetchFailed.value());
        }
    };

    match ReceiptRecord::from_slice(&bytes) {
        Ok(record) => Ok(record),
        Err(e) => {
            tracing::error!(%e, "failed to parse analysis data");
            Err(ReceiptsApiError::ParseFailed.value())
        }
    }
}

/// Builds the receipt form from the latest analysis and, when display storage
/// is configured, saves a copy of it. Saving never fails the request.
pub async fn edit_form(state: &AppState) -> Result<String, ApiError> {
    tracing::info!("starting form_edit");

    let record = get_receipt_record(&state.client, &state.envy.analysis_blob_url).await?;
    tracing::info!("got analysis data");

    let html = form_template(&record);
    tracing::info!(len = html.len(), "generated form html");

    if let Some(blob_client) = &state.blob_client {
        if let Err(e) = display::service::save_form(&html, blob_client).await {
            tracing::error!(%e, "failed to save form to display container");
        }
    }

    Ok(html)
}
