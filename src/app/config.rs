pub const DEFAULT_ANALYSIS_BLOB_URL: &str =
    "https://receiptanalysis.blob.core.windows.net/analysis/latest_analysis.json";
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;
pub const REQUEST_TIMEOUT_SECS: u64 = 120;

pub const DISPLAY_CONTAINER: &str = "display";
pub const DISPLAY_BLOB: &str = "current_form.html";
