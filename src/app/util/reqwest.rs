use bytes::Bytes;

/// Downloads `url`, treating any non-2xx status as an error.
pub async fn get_bytes(client: &reqwest::Client, url: &str) -> Result<Bytes, reqwest::Error> {
    let res = client.get(url).send().await?.error_for_status()?;

    res.bytes().await
}
