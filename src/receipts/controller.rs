use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};

use crate::{app::models::api_error::ApiError, AppState};

use super::service;

pub async fn form_edit(State(state): State<AppState>) -> Result<Response, ApiError> {
    let html = service::edit_form(&state).await?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/html; charset=utf-8"),
            (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
            (header::CACHE_CONTROL, "no-cache"),
        ],
        html,
    )
        .into_response())
}
