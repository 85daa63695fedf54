//! Simulated uploads.
//!
//! Nothing is stored: an upload is a busy period of fixed length after which
//! the tracker reports how many files were "uploaded". Time comes from an
//! injected [`Clock`] so tests can step it by hand.

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use serde::Serialize;

pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Clock that only moves when told to.
#[derive(Clone)]
pub struct ManualClock {
    now: Arc<Mutex<Instant>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: Arc::new(Mutex::new(Instant::now())),
        }
    }

    pub fn advance(&self, by: Duration) {
        if let Ok(mut now) = self.now.lock() {
            *now += by;
        }
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        match self.now.lock() {
            Ok(now) => *now,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadState {
    Idle,
    Pending { files: usize, completes_at: Instant },
    Complete { files: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadError {
    #[error("No files selected")]
    NoFiles,

    #[error("An upload is already in progress")]
    Busy,

    #[error("{name} exceeds the {limit_mb}MB limit")]
    TooLarge { name: String, limit_mb: u64 },

    #[error("Unsupported file type: {0}")]
    Unsupported(String),
}

/// JSON view of the tracker for `/admin/upload/status`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum UploadStatus {
    Idle,
    Pending { files: usize, remaining_ms: u64 },
    Complete { files: usize },
}

pub struct UploadTracker {
    clock: Arc<dyn Clock>,
    delay: Duration,
    state: UploadState,
}

impl UploadTracker {
    pub fn new(clock: Arc<dyn Clock>, delay: Duration) -> Self {
        Self {
            clock,
            delay,
            state: UploadState::Idle,
        }
    }

    pub fn begin(&mut self, files: usize) -> Result<(), UploadError> {
        if files == 0 {
            return Err(UploadError::NoFiles);
        }
        if self.is_pending() {
            return Err(UploadError::Busy);
        }

        let completes_at = self.clock.now() + self.delay;
        tracing::info!("Upload of {} file(s) started", files);
        self.state = UploadState::Pending {
            files,
            completes_at,
        };
        Ok(())
    }

    /// Advance a pending upload whose delay has elapsed and return the state.
    pub fn poll(&mut self) -> UploadState {
        if let UploadState::Pending {
            files,
            completes_at,
        } = self.state
        {
            if self.clock.now() >= completes_at {
                tracing::info!("Upload of {} file(s) complete", files);
                self.state = UploadState::Complete { files };
            }
        }
        self.state
    }

    /// Dismiss a completion notice.
    pub fn acknowledge(&mut self) {
        if matches!(self.state, UploadState::Complete { .. }) {
            self.state = UploadState::Idle;
        }
    }

    pub fn is_pending(&mut self) -> bool {
        matches!(self.poll(), UploadState::Pending { .. })
    }

    pub fn status(&mut self) -> UploadStatus {
        match self.poll() {
            UploadState::Idle => UploadStatus::Idle,
            UploadState::Pending {
                files,
                completes_at,
            } => UploadStatus::Pending {
                files,
                remaining_ms: completes_at
                    .saturating_duration_since(self.clock.now())
                    .as_millis() as u64,
            },
            UploadState::Complete { files } => UploadStatus::Complete { files },
        }
    }
}

/// Accept only image and video content types.
pub fn is_media_type(content_type: &str) -> bool {
    content_type.starts_with("image/") || content_type.starts_with("video/")
}
