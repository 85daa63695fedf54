use askama::Template;
use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use crate::extractors::PageHeader;
use crate::gallery::{KindFilter, MediaItem};
use crate::navigation::Header;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct FilterQuery {
    pub filter: Option<String>,
}

pub struct FilterTab {
    pub value: &'static str,
    pub active: bool,
}

#[derive(Template)]
#[template(path = "pages/gallery.html")]
pub struct GalleryTemplate {
    pub header: Header,
    pub tabs: Vec<FilterTab>,
    pub items: Vec<MediaItem>,
}

/// Wrapper to render askama templates as axum responses
pub struct Html<T: Template>(pub T);

impl<T: Template> IntoResponse for Html<T> {
    fn into_response(self) -> Response {
        match self.0.render() {
            Ok(body) => (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
                body,
            )
                .into_response(),
            Err(e) => {
                tracing::error!("Template render error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Template error").into_response()
            }
        }
    }
}

/// GET /: the public gallery, optionally filtered by kind
pub async fn index(
    State(state): State<AppState>,
    PageHeader(header): PageHeader,
    Query(query): Query<FilterQuery>,
) -> Html<GalleryTemplate> {
    let filter = KindFilter::parse(query.filter.as_deref());

    let items: Vec<MediaItem> = state
        .gallery
        .lock()
        .await
        .list(filter)
        .into_iter()
        .cloned()
        .collect();

    let tabs = KindFilter::ALL
        .iter()
        .map(|f| FilterTab {
            value: f.query_value(),
            active: *f == filter,
        })
        .collect();

    Html(GalleryTemplate {
        header,
        tabs,
        items,
    })
}
