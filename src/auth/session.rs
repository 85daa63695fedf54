use std::sync::Arc;

use rand::Rng;
use serde::Serialize;

use crate::auth::marker::MarkerStore;
use crate::config::AuthConfig;
use crate::error::AppError;

/// Identifier of the single administrator account.
const ADMIN_ID: &str = "1";

/// The authenticated administrator for this process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionUser {
    pub id: String,
    pub email: String,
    pub display_name: Option<String>,
}

impl SessionUser {
    /// Name shown in the header: display name, else email.
    pub fn label(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.email)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Session storage error: {0}")]
    Store(#[from] AppError),
}

/// Holds the optional session user and keeps the durable marker in step with it.
pub struct SessionManager {
    auth: AuthConfig,
    store: Arc<dyn MarkerStore>,
    user: Option<SessionUser>,
}

impl SessionManager {
    pub fn new(auth: AuthConfig, store: Arc<dyn MarkerStore>) -> Self {
        Self {
            auth,
            store,
            user: None,
        }
    }

    /// Build a manager and restore any session recorded by the marker.
    pub fn restored(auth: AuthConfig, store: Arc<dyn MarkerStore>) -> Self {
        let mut manager = Self::new(auth, store);
        manager.restore();
        manager
    }

    pub fn current(&self) -> Option<&SessionUser> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn login(&mut self, email: &str, password: &str) -> Result<&SessionUser, AuthError> {
        if email != self.auth.admin_email || password != self.auth.admin_password {
            tracing::warn!("Rejected login attempt");
            return Err(AuthError::InvalidCredentials);
        }

        self.store.write(&generate_token())?;
        tracing::info!("Admin {} logged in", self.auth.admin_email);
        let user = self.admin_identity();
        Ok(self.user.insert(user))
    }

    pub fn logout(&mut self) {
        if let Some(user) = self.user.take() {
            tracing::info!("Admin {} logged out", user.email);
        }
        if let Err(e) = self.store.clear() {
            tracing::warn!("Failed to clear auth marker: {}", e);
        }
    }

    /// Startup check. A present marker is trusted without re-validating
    /// credentials unless `trust_stored_marker` is off, in which case the
    /// marker is discarded.
    pub fn restore(&mut self) -> Option<&SessionUser> {
        let marker = match self.store.read() {
            Ok(marker) => marker,
            Err(e) => {
                tracing::warn!("Unreadable auth marker, starting logged out: {}", e);
                None
            }
        };

        self.user = match marker {
            Some(_) if self.auth.trust_stored_marker => {
                tracing::warn!("Restoring session from stored marker without validation");
                Some(self.admin_identity())
            }
            Some(_) => {
                tracing::info!("Ignoring stored auth marker");
                if let Err(e) = self.store.clear() {
                    tracing::warn!("Failed to clear auth marker: {}", e);
                }
                None
            }
            None => None,
        };

        self.user.as_ref()
    }

    fn admin_identity(&self) -> SessionUser {
        SessionUser {
            id: ADMIN_ID.to_string(),
            email: self.auth.admin_email.clone(),
            display_name: self.auth.admin_display_name.clone(),
        }
    }
}

/// Generate a random 32-byte hex token.
fn generate_token() -> String {
    let bytes: [u8; 32] = rand::thread_rng().gen();
    hex::encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::marker::MemoryMarkerStore;
    use crate::error::AppResult;

    fn manager_with(store: Arc<dyn MarkerStore>) -> SessionManager {
        SessionManager::new(AuthConfig::default(), store)
    }

    struct BrokenStore;

    impl MarkerStore for BrokenStore {
        fn read(&self) -> AppResult<Option<String>> {
            Err(AppError::Internal("disk gone".into()))
        }
        fn write(&self, _token: &str) -> AppResult<()> {
            Err(AppError::Internal("disk gone".into()))
        }
        fn clear(&self) -> AppResult<()> {
            Err(AppError::Internal("disk gone".into()))
        }
    }

    #[test]
    fn generate_token_is_64_hex_chars() {
        let token = generate_token();
        assert_eq!(token.len(), 64);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn generate_token_is_unique() {
        assert_ne!(generate_token(), generate_token());
    }

    #[test]
    fn login_with_valid_pair_sets_user_and_marker() {
        let store = Arc::new(MemoryMarkerStore::new());
        let mut manager = manager_with(store.clone());

        let user = manager.login("earl@example.com", "password").unwrap();
        assert_eq!(user.id, "1");
        assert_eq!(user.label(), "Earl");
        assert!(manager.is_authenticated());
        assert!(store.read().unwrap().is_some());
    }

    #[test]
    fn login_rejects_padded_email() {
        let store = Arc::new(MemoryMarkerStore::new());
        let mut manager = manager_with(store.clone());
        assert!(matches!(
            manager.login(" earl@example.com\t", "password"),
            Err(AuthError::InvalidCredentials)
        ));
        assert!(manager.current().is_none());
        assert_eq!(store.read().unwrap(), None);
    }

    #[test]
    fn login_rejects_everything_else_with_generic_error() {
        let cases = [
            ("earl@example.com", "wrong"),
            ("someone@example.com", "password"),
            ("", ""),
            ("EARL@example.com", "password"),
            ("earl@example.com", "password "),
        ];
        for (email, password) in cases {
            let store = Arc::new(MemoryMarkerStore::new());
            let mut manager = manager_with(store.clone());
            let err = manager.login(email, password).unwrap_err();
            assert!(matches!(err, AuthError::InvalidCredentials));
            assert_eq!(err.to_string(), "Invalid email or password");
            assert!(manager.current().is_none());
            assert_eq!(store.read().unwrap(), None);
        }
    }

    #[test]
    fn login_fails_when_marker_cannot_be_written() {
        let mut manager = manager_with(Arc::new(BrokenStore));
        let err = manager.login("earl@example.com", "password").unwrap_err();
        assert!(matches!(err, AuthError::Store(_)));
        assert!(!manager.is_authenticated());
    }

    #[test]
    fn logout_clears_user_and_marker() {
        let store = Arc::new(MemoryMarkerStore::new());
        let mut manager = manager_with(store.clone());
        manager.login("earl@example.com", "password").unwrap();

        manager.logout();
        assert!(manager.current().is_none());
        assert_eq!(store.read().unwrap(), None);
    }

    #[test]
    fn logout_without_session_still_succeeds() {
        let store = Arc::new(MemoryMarkerStore::with_token("stale"));
        let mut manager = manager_with(store.clone());
        manager.logout();
        assert!(manager.current().is_none());
        assert_eq!(store.read().unwrap(), None);
    }

    #[test]
    fn logout_survives_broken_store() {
        let mut manager = manager_with(Arc::new(BrokenStore));
        manager.logout();
        assert!(!manager.is_authenticated());
    }

    #[test]
    fn marker_present_restores_without_credentials() {
        let store = Arc::new(MemoryMarkerStore::with_token("anything"));
        let manager = SessionManager::restored(AuthConfig::default(), store);
        let user = manager.current().unwrap();
        assert_eq!(user.email, "earl@example.com");
    }

    #[test]
    fn marker_absent_restores_nothing() {
        let manager =
            SessionManager::restored(AuthConfig::default(), Arc::new(MemoryMarkerStore::new()));
        assert!(manager.current().is_none());
    }

    #[test]
    fn unreadable_marker_is_not_fatal() {
        let manager = SessionManager::restored(AuthConfig::default(), Arc::new(BrokenStore));
        assert!(manager.current().is_none());
    }

    #[test]
    fn untrusted_marker_is_discarded() {
        let store = Arc::new(MemoryMarkerStore::with_token("anything"));
        let auth = AuthConfig {
            trust_stored_marker: false,
            ..AuthConfig::default()
        };
        let manager = SessionManager::restored(auth, store.clone());
        assert!(manager.current().is_none());
        assert_eq!(store.read().unwrap(), None);
    }

    #[test]
    fn label_falls_back_to_email() {
        let user = SessionUser {
            id: "1".into(),
            email: "a@b.c".into(),
            display_name: None,
        };
        assert_eq!(user.label(), "a@b.c");
    }
}
