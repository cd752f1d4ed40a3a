use std::{env, net::SocketAddr, sync::Arc, time::Duration};

use axum::{
    error_handling::HandleErrorLayer,
    http::header::CONTENT_TYPE,
    http::Method,
    routing::get,
    BoxError, Router,
};
use tower::{timeout::TimeoutLayer, ServiceBuilder};
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::EnvFilter;

use crate::{
    app::{envy::Envy, errors::DefaultApiError},
    display::util::azure_blob::{blob_client::BlobClient, connection_string::ConnectionString},
};

mod app;
mod display;
mod receipts;

#[derive(Clone)]
pub struct AppState {
    pub client: reqwest::Client,
    pub blob_client: Option<Arc<BlobClient>>,
    pub envy: Arc<Envy>,
}

pub fn create_router(state: AppState) -> Router {
    create_router_with_timeout(
        state,
        Duration::from_secs(app::config::REQUEST_TIMEOUT_SECS),
    )
}

pub fn create_router_with_timeout(state: AppState, request_timeout: Duration) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_headers([CONTENT_TYPE])
        .allow_methods([Method::GET, Method::POST]);

    Router::new()
        .route("/", get(app::controller::get_root))
        // receipts
        .route(
            "/form_edit",
            get(receipts::controller::form_edit).post(receipts::controller::form_edit),
        )
        // layers
        .layer(cors)
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(|err: BoxError| async move {
                    tracing::error!(%err, "request failed");
                    DefaultApiError::InternalServerError.value()
                }))
                .layer(TimeoutLayer::new(request_timeout)),
        )
        .with_state(state)
}

#[tokio::main]
async fn main() {
    // tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // environment
    let app_env = env::var("APP_ENV").unwrap_or("development".to_string());
    let _ = dotenvy::from_filename(format!(".env.{}", app_env));
    let envy = match envy::from_env::<Envy>() {
        Ok(config) => config,
        Err(e) => panic!("{:#?}", e),
    };

    // properties
    let port = envy.port.to_owned().unwrap_or(3000);
    let timeout = envy
        .fetch_timeout_secs
        .unwrap_or(app::config::DEFAULT_FETCH_TIMEOUT_SECS);

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout))
        .build()
        .expect("failed to build http client");

    let blob_client = match &envy.azure_storage_connection_string {
        Some(connection_string) => {
            let connection_string = ConnectionString::parse(connection_string)
                .expect("failed to parse AZURE_STORAGE_CONNECTION_STRING");
            let blob_client = BlobClient::new(client.clone(), connection_string)
                .expect("failed to create blob client");

            tracing::info!(account = %blob_client.account(), "display storage configured");
            Some(Arc::new(blob_client))
        }
        None => {
            tracing::warn!("AZURE_STORAGE_CONNECTION_STRING not set, forms will not be saved");
            None
        }
    };

    tracing::info!(app_env = %envy.app_env, url = %envy.analysis_blob_url, "reading analysis data");

    let state = AppState {
        client,
        blob_client,
        envy: Arc::new(envy),
    };

    // app
    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("listening on {}", addr);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .unwrap();
}
