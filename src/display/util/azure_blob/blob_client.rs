use bytes::Bytes;
use mime::Mime;
use reqwest::{
    header::{
        HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_ENCODING, CONTENT_LENGTH, CONTENT_TYPE,
    },
    Method, Response, StatusCode, Url,
};

use crate::display::errors::DisplayError;

use super::{connection_string::ConnectionString, shared_key};

const API_VERSION: &str = "2021-08-06";

/// Minimal Blob service client: just what the display needs.
#[derive(Clone)]
pub struct BlobClient {
    client: reqwest::Client,
    account: String,
    key: Vec<u8>,
    endpoint: String,
}

impl BlobClient {
    pub fn new(
        client: reqwest::Client,
        connection_string: ConnectionString,
    ) -> Result<BlobClient, DisplayError> {
        let key = base64::decode(&connection_string.account_key)
            .map_err(|e| DisplayError::InvalidAccountKey(e.to_string()))?;

        Ok(BlobClient {
            client,
            account: connection_string.account_name,
            key,
            endpoint: connection_string.blob_endpoint,
        })
    }

    pub fn account(&self) -> &str {
        &self.account
    }

    fn url(&self, container: &str, blob: Option<&str>) -> Result<Url, DisplayError> {
        let url = match blob {
            Some(blob) => format!("{}/{}/{}", self.endpoint, container, blob),
            None => format!("{}/{}", self.endpoint, container),
        };

        Url::parse(&url).map_err(|e| DisplayError::InvalidUrl(e.to_string()))
    }

    async fn send(
        &self,
        method: Method,
        url: Url,
        mut headers: HeaderMap,
        body: Option<Bytes>,
    ) -> Result<Response, DisplayError> {
        let date = chrono::Utc::now()
            .format("%a, %d %b %Y %H:%M:%S GMT")
            .to_string();

        headers.insert(
            "x-ms-date",
            HeaderValue::from_str(&date).map_err(|_| DisplayError::InvalidHeader("x-ms-date"))?,
        );
        headers.insert("x-ms-version", HeaderValue::from_static(API_VERSION));

        let signature = shared_key::sign(
            &self.key,
            &shared_key::string_to_sign(&method, &self.account, &url, &headers),
        )?;
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("SharedKey {}:{}", self.account, signature))
                .map_err(|_| DisplayError::InvalidHeader("authorization"))?,
        );

        let mut request = self.client.request(method, url).headers(headers);
        if let Some(body) = body {
            request = request.body(body);
        }

        Ok(request.send().await?)
    }

    pub async fn container_exists(&self, container: &str) -> Result<bool, DisplayError> {
        let mut url = self.url(container, None)?;
        url.query_pairs_mut().append_pair("restype", "container");

        let res = self.send(Method::GET, url, HeaderMap::new(), None).await?;

        match res.status() {
            StatusCode::OK => Ok(true),
            StatusCode::NOT_FOUND => Ok(false),
            _ => Err(unexpected_status(res).await),
        }
    }

    /// Uploads `data` as a block blob, replacing any existing blob of that name.
    pub async fn put_block_blob(
        &self,
        container: &str,
        blob: &str,
        data: Bytes,
        content_type: &Mime,
        content_encoding: &str,
    ) -> Result<(), DisplayError> {
        let url = self.url(container, Some(blob))?;

        let mut headers = HeaderMap::new();
        headers.insert("x-ms-blob-type", HeaderValue::from_static("BlockBlob"));
        headers.insert(CONTENT_LENGTH, HeaderValue::from(data.len()));
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_str(content_type.as_ref())
                .map_err(|_| DisplayError::InvalidHeader("content-type"))?,
        );
        headers.insert(
            CONTENT_ENCODING,
            HeaderValue::from_str(content_encoding)
                .map_err(|_| DisplayError::InvalidHeader("content-encoding"))?,
        );

        let res = self.send(Method::PUT, url, headers, Some(data)).await?;

        match res.status() {
            StatusCode::CREATED => Ok(()),
            _ => Err(unexpected_status(res).await),
        }
    }
}

async fn unexpected_status(res: Response) -> DisplayError {
    let status = res.status();
    let body = res.text().await.unwrap_or_default();

    tracing::error!(%status, %body, "unexpected blob storage response");

    DisplayError::UnexpectedStatus { status, body }
}
