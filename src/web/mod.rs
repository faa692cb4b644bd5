//! HTTP surface: a single `/` route serving the trip form and its results.
//!
//! **Public API**: [`router`], [`serve`], [`run`].

mod handlers;
mod templates;

pub use templates::{LineKind, RecommendationLine};

use std::sync::Arc;

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;
use tracing::info;

use crate::flash::FlashKey;
use crate::models::Config;
use crate::recommendations::Recommender;
use crate::Result;

/// Shared, read-only state handed to every request.
#[derive(Clone)]
pub struct AppState {
    pub recommender: Arc<Recommender>,
    pub flash_key: Arc<FlashKey>,
}

impl AppState {
    pub fn new(recommender: Recommender, flash_key: FlashKey) -> Self {
        Self {
            recommender: Arc::new(recommender),
            flash_key: Arc::new(flash_key),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            Recommender::from_config(config, reqwest::Client::new()),
            FlashKey::from_secret(config.secret_key.as_deref()),
        )
    }
}

pub fn router(state: AppState) -> Router {
    with_panic_guard(
        Router::new()
            .route("/", get(handlers::show_form).post(handlers::submit_form))
            .fallback(handlers::not_found)
            .with_state(state),
    )
}

/// Turn handler panics into the generic 500 response instead of a dropped connection.
fn with_panic_guard(router: Router) -> Router {
    router.layer(CatchPanicLayer::custom(handlers::panic_response))
}

/// Serve on an already-bound listener until Ctrl-C.
pub async fn serve(listener: TcpListener, state: AppState) -> Result<()> {
    let addr = listener.local_addr()?;
    info!("Listening on http://{}", addr);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Bind `config.host:config.port` and serve.
pub async fn run(config: &Config) -> Result<()> {
    let state = AppState::from_config(config);
    let listener = TcpListener::bind((config.host.as_str(), config.port)).await?;
    serve(listener, state).await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
