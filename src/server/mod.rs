//! HTTP front end: `POST /submit`, static form assets, permissive CORS.

mod handlers;

pub use handlers::{ErrorResponse, SubmitResponse};

use crate::config::Config;
use crate::core::SubmissionService;
use crate::errors::AppResult;
use crate::roster::{self, RosterHandle};
use crate::ui::messages::{info, success};
use crate::utils::DateKey;
use axum::{Router, routing::post};
use std::path::Path;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

/// Builds the router. Anything that is not `/submit` is looked up under `static_dir`.
pub fn router(service: Arc<SubmissionService>, static_dir: &Path) -> Router {
    Router::new()
        .route("/submit", post(handlers::submit))
        .fallback_service(ServeDir::new(static_dir))
        .layer(CorsLayer::permissive())
        .with_state(service)
}

/// Starts the server and blocks until it stops.
///
/// The roster is loaded in the background; submissions that arrive before it
/// is ready resolve every member to "Unknown".
pub async fn run(cfg: &Config) -> AppResult<()> {
    let roster = Arc::new(RosterHandle::empty());
    roster::spawn_load(roster.clone(), cfg.roster_path());

    let service = Arc::new(SubmissionService::new(cfg, roster));
    let app = router(service.clone(), &cfg.static_path());

    let addr = format!("{}:{}", cfg.bind, cfg.port);
    let listener = TcpListener::bind(&addr).await?;

    let today = DateKey::today();
    success(format!("Server running at http://{addr}"));
    info(format!(
        "Daily files: {} | {}",
        service.store().log_path(&today).display(),
        service.xlsx_path(&today).display()
    ));

    axum::serve(listener, app).await?;
    Ok(())
}
