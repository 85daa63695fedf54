use askama::Template;
use axum::extract::{DefaultBodyLimit, Multipart, Query, State};
use axum::response::{IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::extractors::{MaybeUser, PageHeader};
use crate::gallery::{GalleryStats, KindFilter, MediaItem};
use crate::navigation::{resolve, Header, Resolution, Route};
use crate::routes::home::Html;
use crate::state::AppState;
use crate::upload::{is_media_type, UploadError, UploadState, UploadStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Upload,
    Manage,
    Stats,
}

impl Tab {
    const ALL: [Tab; 3] = [Tab::Upload, Tab::Manage, Tab::Stats];

    fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("manage") => Tab::Manage,
            Some("stats") => Tab::Stats,
            _ => Tab::Upload,
        }
    }

    fn slug(&self) -> &'static str {
        match self {
            Tab::Upload => "upload",
            Tab::Manage => "manage",
            Tab::Stats => "stats",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Tab::Upload => "Upload",
            Tab::Manage => "Manage",
            Tab::Stats => "Analytics",
        }
    }
}

pub struct TabLink {
    pub slug: &'static str,
    pub label: &'static str,
    pub active: bool,
}

#[derive(Template)]
#[template(path = "pages/admin.html")]
pub struct AdminTemplate {
    pub header: Header,
    pub tabs: Vec<TabLink>,
    pub tab: &'static str,
    pub uploading: bool,
    pub notice: Option<String>,
    pub max_file_mb: u64,
    pub items: Vec<MediaItem>,
    pub stats: GalleryStats,
}

#[derive(Deserialize)]
struct TabQuery {
    tab: Option<String>,
}

pub fn router(upload_limit_bytes: usize) -> Router<AppState> {
    Router::new()
        .route("/admin", get(dashboard))
        .route(
            "/admin/upload",
            post(upload).layer(DefaultBodyLimit::max(upload_limit_bytes)),
        )
        .route("/admin/upload/status", get(upload_status))
}

/// GET /admin: dashboard, only for a logged-in admin
async fn dashboard(
    State(state): State<AppState>,
    PageHeader(header): PageHeader,
    MaybeUser(user): MaybeUser,
    Query(query): Query<TabQuery>,
) -> Response {
    if let Resolution::Redirect(to) = resolve(Route::Admin, user.as_ref()) {
        return Redirect::to(to.path()).into_response();
    }

    let tab = Tab::parse(query.tab.as_deref());

    let (uploading, notice) = {
        let mut uploads = state.uploads.lock().await;
        match uploads.poll() {
            UploadState::Idle => (false, None),
            UploadState::Pending { .. } => (true, None),
            UploadState::Complete { files } => {
                uploads.acknowledge();
                (
                    false,
                    Some(format!("Successfully uploaded {} file(s)", files)),
                )
            }
        }
    };

    let (items, stats) = {
        let gallery = state.gallery.lock().await;
        let items: Vec<MediaItem> = gallery
            .list(KindFilter::All)
            .into_iter()
            .cloned()
            .collect();
        (items, gallery.stats())
    };

    Html(AdminTemplate {
        header,
        tabs: Tab::ALL
            .iter()
            .map(|t| TabLink {
                slug: t.slug(),
                label: t.label(),
                active: *t == tab,
            })
            .collect(),
        tab: tab.slug(),
        uploading,
        notice,
        max_file_mb: state.config.upload.max_file_mb,
        items,
        stats,
    })
    .into_response()
}

/// POST /admin/upload: accept media files and start the simulated upload.
/// File contents are read to enforce the size limit, then dropped.
async fn upload(
    State(state): State<AppState>,
    MaybeUser(user): MaybeUser,
    mut multipart: Multipart,
) -> AppResult<Response> {
    if let Resolution::Redirect(to) = resolve(Route::Admin, user.as_ref()) {
        return Ok(Redirect::to(to.path()).into_response());
    }

    let limit = state.config.upload.max_file_bytes();
    let mut files = 0usize;

    while let Some(mut field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let file_name = field
            .file_name()
            .map(str::to_string)
            .filter(|name| !name.is_empty());
        let Some(name) = file_name else {
            let key = field.name().unwrap_or_default().to_string();
            let value = field.text().await.unwrap_or_default();
            tracing::debug!("Upload setting {} = {:?}", key, value);
            continue;
        };

        let content_type = field.content_type().unwrap_or_default().to_string();
        if !is_media_type(&content_type) {
            return Err(UploadError::Unsupported(content_type).into());
        }

        let mut size = 0u64;
        while let Some(chunk) = field
            .chunk()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?
        {
            size += chunk.len() as u64;
            if size > limit {
                return Err(UploadError::TooLarge {
                    name,
                    limit_mb: state.config.upload.max_file_mb,
                }
                .into());
            }
        }

        tracing::debug!("Received {} ({} bytes)", name, size);
        files += 1;
    }

    state.uploads.lock().await.begin(files)?;
    Ok(Redirect::to(Route::Admin.path()).into_response())
}

/// GET /admin/upload/status: JSON view of the upload tracker
async fn upload_status(State(state): State<AppState>) -> AppResult<Json<UploadStatus>> {
    if !state.session.lock().await.is_authenticated() {
        return Err(AppError::Unauthorized);
    }
    Ok(Json(state.uploads.lock().await.status()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_parse_defaults_to_upload() {
        assert_eq!(Tab::parse(None), Tab::Upload);
        assert_eq!(Tab::parse(Some("nope")), Tab::Upload);
        assert_eq!(Tab::parse(Some("manage")), Tab::Manage);
        assert_eq!(Tab::parse(Some("stats")), Tab::Stats);
    }

    #[test]
    fn stats_tab_is_labelled_analytics() {
        assert_eq!(Tab::Stats.label(), "Analytics");
        assert_eq!(Tab::Stats.slug(), "stats");
    }
}
