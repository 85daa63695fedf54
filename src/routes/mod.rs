pub mod admin;
pub mod assets;
pub mod auth;
pub mod home;
pub mod media;
pub mod theme;

use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Files of maximum size accepted in a single upload request.
const UPLOAD_BATCH_FILES: u64 = 10;

/// Assemble every route of the site.
pub fn app(state: AppState) -> Router {
    let batch_bytes = state
        .config
        .upload
        .max_file_bytes()
        .saturating_mul(UPLOAD_BATCH_FILES);
    let upload_limit = usize::try_from(batch_bytes).unwrap_or(usize::MAX);

    Router::new()
        .route("/", get(home::index))
        .route("/assets/{*path}", get(assets::serve))
        .merge(media::router())
        .merge(auth::router())
        .merge(admin::router(upload_limit))
        .merge(theme::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
