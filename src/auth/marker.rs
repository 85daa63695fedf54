use std::sync::Mutex;

use crate::db;
use crate::error::{AppError, AppResult};
use crate::state::DbPool;

/// Storage key of the authentication marker.
pub const AUTH_MARKER_KEY: &str = "authToken";

/// Durable home of the single "previously logged in" marker.
pub trait MarkerStore: Send + Sync {
    fn read(&self) -> AppResult<Option<String>>;
    fn write(&self, token: &str) -> AppResult<()>;
    fn clear(&self) -> AppResult<()>;
}

/// Marker kept in the `kv` table of the application database.
pub struct SqliteMarkerStore {
    pool: DbPool,
}

impl SqliteMarkerStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl MarkerStore for SqliteMarkerStore {
    fn read(&self) -> AppResult<Option<String>> {
        db::kv_get(&self.pool, AUTH_MARKER_KEY)
    }

    fn write(&self, token: &str) -> AppResult<()> {
        db::kv_set(&self.pool, AUTH_MARKER_KEY, token)
    }

    fn clear(&self) -> AppResult<()> {
        db::kv_delete(&self.pool, AUTH_MARKER_KEY)
    }
}

/// Process-local marker, used by tests and ephemeral runs.
#[derive(Default)]
pub struct MemoryMarkerStore {
    token: Mutex<Option<String>>,
}

impl MemoryMarkerStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        Self {
            token: Mutex::new(Some(token.to_string())),
        }
    }
}

impl MarkerStore for MemoryMarkerStore {
    fn read(&self) -> AppResult<Option<String>> {
        let guard = self
            .token
            .lock()
            .map_err(|e| AppError::Internal(e.to_string()))?;
        Ok(guard.clone())
    }

    fn write(&self, token: &str) -> AppResult<()> {
        let mut guard = self
            .token
            .lock()
            .map_err(|e| AppError::Internal(e.to_string()))?;
        *guard = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> AppResult<()> {
        let mut guard = self
            .token
            .lock()
            .map_err(|e| AppError::Internal(e.to_string()))?;
        *guard = None;
        Ok(())
    }
}
