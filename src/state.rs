use std::sync::Arc;

use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use tokio::sync::Mutex;

use crate::auth::marker::{MarkerStore, SqliteMarkerStore};
use crate::auth::session::SessionManager;
use crate::config::Config;
use crate::gallery::GalleryStore;
use crate::theme::ThemeState;
use crate::upload::{Clock, UploadTracker};

pub type DbPool = Pool<SqliteConnectionManager>;

/// Process-wide state. Each container is mutated by one request at a time.
#[derive(Clone)]
pub struct AppState {
    pub db: DbPool,
    pub config: Config,
    pub theme: Arc<Mutex<ThemeState>>,
    pub session: Arc<Mutex<SessionManager>>,
    pub gallery: Arc<Mutex<GalleryStore>>,
    pub uploads: Arc<Mutex<UploadTracker>>,
}

impl AppState {
    /// Wire up state over an already-migrated database, restoring any
    /// session recorded there.
    pub fn new(db: DbPool, config: Config, clock: Arc<dyn Clock>) -> Self {
        let marker: Arc<dyn MarkerStore> = Arc::new(SqliteMarkerStore::new(db.clone()));
        let session = SessionManager::restored(config.auth.clone(), marker);
        if let Some(user) = session.current() {
            tracing::info!("Session restored for {}", user.email);
        }

        let uploads = UploadTracker::new(clock, config.upload.delay());

        Self {
            db,
            config,
            theme: Arc::new(Mutex::new(ThemeState::default())),
            session: Arc::new(Mutex::new(session)),
            gallery: Arc::new(Mutex::new(GalleryStore::with_fixtures())),
            uploads: Arc::new(Mutex::new(uploads)),
        }
    }
}
