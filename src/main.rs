mod config;
mod handlers;
mod prompt;
mod routes;
mod runner;
mod state;

use anyhow::Result;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first so the debug flag can pick the filter
    let config_path =
        std::env::var("CONFIG_PATH").unwrap_or_else(|_| "conf.yaml".to_string());

    let config = match Config::load(&config_path) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!(
                "Could not load config from {} ({}), using defaults",
                config_path, e
            );
            Config::default()
        }
    };

    let filter = if config.system_config.debug {
        "qwen_demo_backend=debug,tower_http=debug"
    } else {
        "qwen_demo_backend=info"
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!(
        "Serving model {} via `{} run`",
        config.runner_config.model, config.runner_config.command
    );
    info!("Make sure the model runner is installed and on PATH");

    let host = config.system_config.host.clone();
    let port = config.system_config.port;

    let app_state = AppState::new(config);

    let app = Router::new()
        .merge(routes::create_routes())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(app_state);

    info!("Starting server on {}:{}", host, port);

    let listener = tokio::net::TcpListener::bind((host.as_str(), port)).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
