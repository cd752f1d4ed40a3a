use axum::http::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug)]
pub enum ReceiptsApiError {
    FetchFailed,
    ParseFailed,
}

impl ReceiptsApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::FetchFailed => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Error fetching analysis data".to_string(),
            },
            Self::ParseFailed => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Error parsing analysis data".to_string(),
            },
        }
    }
}
