use std::net::SocketAddr;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cinebook::{app, config::Config, AppState};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.app.rust_log))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting CineBook API ({})", config.app.environment);

    let host: std::net::IpAddr = config
        .app
        .host
        .parse()
        .expect("HOST must be a valid IP address");
    let addr = SocketAddr::from((host, config.app.port));

    let state = AppState::new(config).await;
    let router = app(state);

    info!("Server listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind listen address");
    axum::serve(listener, router.into_make_service())
        .await
        .expect("server error");
}
