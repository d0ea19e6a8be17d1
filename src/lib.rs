use std::{sync::Arc, time::Duration};

use axum::{
    error_handling::HandleErrorLayer,
    extract::DefaultBodyLimit,
    http::{header::CONTENT_TYPE, Method},
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

use crate::{app::envy::Envy, stability::service::StabilityClient};

pub mod app;
pub mod client;
pub mod generate;
pub mod stability;

const BODY_LIMIT_BYTES: usize = 64 * 1024;

#[derive(Clone)]
pub struct AppState {
    pub envy: Arc<Envy>,
    pub stability: Arc<StabilityClient>,
}

impl AppState {
    pub fn new(envy: Envy, stability: StabilityClient) -> Self {
        Self {
            envy: Arc::new(envy),
            stability: Arc::new(stability),
        }
    }
}

pub fn router(state: AppState) -> Router {
    // outlives the remote timeout so upstream failures still map to 500
    let request_timeout = state.envy.request_timeout() + Duration::from_secs(5);

    router_with_timeout(state, request_timeout)
}

pub fn router_with_timeout(state: AppState, request_timeout: Duration) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_headers([CONTENT_TYPE])
        .allow_methods([Method::GET, Method::POST]);

    Router::new()
        .route("/", get(app::controller::get_root))
        .route("/status", get(app::controller::get_status))
        .route("/generate", post(generate::controller::generate_image))
        // layers
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
        .layer(cors)
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(app::errors::handle_layer_error))
                .timeout(request_timeout),
        )
        .with_state(state)
}
