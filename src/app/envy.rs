use serde::Deserialize;

use super::config;

#[derive(Debug, Clone, Deserialize)]
pub struct Envy {
    #[serde(default = "default_app_env")]
    pub app_env: String,
    pub port: Option<u16>,

    #[serde(default = "default_analysis_blob_url")]
    pub analysis_blob_url: String,
    pub fetch_timeout_secs: Option<u64>,

    pub azure_storage_connection_string: Option<String>,
}

fn default_app_env() -> String {
    "development".to_string()
}

fn default_analysis_blob_url() -> String {
    config::DEFAULT_ANALYSIS_BLOB_URL.to_string()
}
