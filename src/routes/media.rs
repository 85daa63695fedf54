use askama::Template;
use axum::extract::{Path, Query, State};
use axum::response::Redirect;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::error::{AppError, AppResult};
use crate::extractors::{PageHeader, ReturnTo};
use crate::gallery::{KindFilter, MediaItem};
use crate::navigation::Header;
use crate::routes::home::{FilterQuery, Html};
use crate::state::AppState;

/// Placeholder comments shown under every item.
const SAMPLE_COMMENTS: &[&str] = &[
    "Absolutely stunning capture! The lighting is perfect.",
    "This brings back so many memories. Beautiful work!",
];

#[derive(Template)]
#[template(path = "pages/media.html")]
pub struct MediaTemplate {
    pub header: Header,
    pub item: MediaItem,
    pub comments: &'static [&'static str],
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/media/{id}", get(detail))
        .route("/media/{id}/like", post(like))
        .route("/api/media", get(list_json))
}

async fn detail(
    State(state): State<AppState>,
    PageHeader(header): PageHeader,
    Path(id): Path<String>,
) -> AppResult<Html<MediaTemplate>> {
    let item = state
        .gallery
        .lock()
        .await
        .get(&id)
        .cloned()
        .ok_or(AppError::NotFound)?;

    Ok(Html(MediaTemplate {
        header,
        item,
        comments: SAMPLE_COMMENTS,
    }))
}

/// POST /media/{id}/like: unknown ids are ignored
async fn like(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ReturnTo(back): ReturnTo,
) -> Redirect {
    state.gallery.lock().await.toggle_like(&id);
    Redirect::to(&back)
}

async fn list_json(
    State(state): State<AppState>,
    Query(query): Query<FilterQuery>,
) -> Json<Vec<MediaItem>> {
    let filter = KindFilter::parse(query.filter.as_deref());
    let items: Vec<MediaItem> = state
        .gallery
        .lock()
        .await
        .list(filter)
        .into_iter()
        .cloned()
        .collect();
    Json(items)
}
