use std::{env, net::SocketAddr};

use imagine::{app::envy::Envy, router, stability::service::StabilityClient, AppState};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // environment
    let app_env = env::var("APP_ENV").unwrap_or("development".to_string());
    let _ = dotenvy::from_filename(format!(".env.{}", app_env));
    let _ = dotenvy::dotenv();

    // tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "imagine=info,tower_http=info".into()),
        )
        .init();

    let envy = match envy::from_env::<Envy>() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    if envy.stability_api_key.is_empty() {
        tracing::warn!("STABILITY_API_KEY is not set; generation requests will fail");
    }

    let stability = match StabilityClient::from_envy(&envy) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("failed to initialize Stability AI client: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!(
        engine = stability.engine(),
        api_url = envy.stability_api_url(),
        "Stability AI client ready"
    );

    let addr = SocketAddr::from(([0, 0, 0, 0], envy.port()));
    let app = router(AppState::new(envy, stability));

    let server = match axum::Server::try_bind(&addr) {
        Ok(builder) => builder.serve(app.into_make_service()),
        Err(e) => {
            tracing::error!("failed to bind {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    tracing::info!("image proxy running at http://{}", server.local_addr());

    if let Err(e) = server.await {
        tracing::error!("server error: {}", e);
        std::process::exit(1);
    }
}
