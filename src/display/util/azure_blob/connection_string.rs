use std::fmt;

use crate::display::errors::DisplayError;

const DEVELOPMENT_ACCOUNT_NAME: &str = "devstoreaccount1";
const DEVELOPMENT_ACCOUNT_KEY: &str =
    "Eby8vdM02xNOcqFlqUwJPLlmEtlCDXJ1OUzFT50uSRZ6IFsuFq2UVErCz4I6tq/K1SZFPTOtr/KBHBeksoGMGw==";
const DEVELOPMENT_BLOB_ENDPOINT: &str = "http://127.0.0.1:10000/devstoreaccount1";

/// Storage account settings read from an Azure `Key=Value;...` connection string.
#[derive(Clone, PartialEq)]
pub struct ConnectionString {
    pub account_name: String,
    pub account_key: String,
    pub blob_endpoint: String,
}

impl ConnectionString {
    pub fn parse(value: &str) -> Result<ConnectionString, DisplayError> {
        let mut protocol = "https";
        let mut account_name = None;
        let mut account_key = None;
        let mut endpoint_suffix = "core.windows.net";
        let mut blob_endpoint = None;

        for segment in value.split(';').map(str::trim).filter(|s| !s.is_empty()) {
            let Some((key, val)) = segment.split_once('=') else {
                return Err(DisplayError::InvalidConnectionString(
                    "malformed segment".to_string(),
                ));
            };

            match key {
                "UseDevelopmentStorage" if val.eq_ignore_ascii_case("true") => {
                    return Ok(ConnectionString {
                        account_name: DEVELOPMENT_ACCOUNT_NAME.to_string(),
                        account_key: DEVELOPMENT_ACCOUNT_KEY.to_string(),
                        blob_endpoint: DEVELOPMENT_BLOB_ENDPOINT.to_string(),
                    });
                }
                "DefaultEndpointsProtocol" => protocol = val,
                "AccountName" => account_name = Some(val),
                "AccountKey" => account_key = Some(val),
                "EndpointSuffix" => endpoint_suffix = val,
                "BlobEndpoint" => blob_endpoint = Some(val),
                _ => {}
            }
        }

        let Some(account_name) = account_name.filter(|v| !v.is_empty()) else {
            return Err(DisplayError::InvalidConnectionString(
                "missing AccountName".to_string(),
            ));
        };
        let Some(account_key) = account_key.filter(|v| !v.is_empty()) else {
            return Err(DisplayError::InvalidConnectionString(
                "missing AccountKey".to_string(),
            ));
        };

        let blob_endpoint = match blob_endpoint {
            Some(endpoint) => endpoint.trim_end_matches('/').to_string(),
            None => format!("{}://{}.blob.{}", protocol, account_name, endpoint_suffix),
        };

        Ok(ConnectionString {
            account_name: account_name.to_string(),
            account_key: account_key.to_string(),
            blob_endpoint,
        })
    }
}

impl fmt::Debug for ConnectionString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionString")
            .field("account_name", &self.account_name)
            .field("account_key", &"***")
            .field("blob_endpoint", &self.blob_endpoint)
            .finish()
    }
}
