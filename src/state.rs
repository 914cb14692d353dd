//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! service keeps no per-request state: the only things shared are the site
//! configuration and the contact notifier, both read-only.

use std::sync::Arc;

use crate::config::SiteConfig;
use crate::services::notify::{ContactNotifier, LogNotifier};

/// Clone is required by Axum; all inner fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub site: Arc<SiteConfig>,
    pub notifier: Arc<dyn ContactNotifier>,
}

impl AppState {
    #[must_use]
    pub fn new(site: SiteConfig, notifier: Arc<dyn ContactNotifier>) -> Self {
        Self { site: Arc::new(site), notifier }
    }

    /// State with the default log-only notifier.
    #[must_use]
    pub fn with_log_notifier(site: SiteConfig) -> Self {
        Self::new(site, Arc::new(LogNotifier))
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use std::fs;
    use std::sync::Mutex;

    use tempfile::TempDir;

    use super::*;
    use crate::config::DEFAULT_INDEX;
    use crate::services::notify::{ContactSubmission, NotifyError};

    pub const INDEX_BODY: &str = "<!doctype html><title>entry</title>";
    pub const STYLE_BODY: &str = "body { margin: 0; }";

    /// Site directory with an entry document and one stylesheet. Keep the
    /// returned `TempDir` alive for as long as the state is used.
    #[must_use]
    pub fn test_site() -> (TempDir, SiteConfig) {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join(DEFAULT_INDEX), INDEX_BODY).expect("write index");
        fs::create_dir_all(dir.path().join("css")).expect("css dir");
        fs::write(dir.path().join("css/style.css"), STYLE_BODY).expect("write css");
        let config = SiteConfig { port: 0, site_dir: dir.path().to_path_buf(), index: DEFAULT_INDEX.to_string() };
        (dir, config)
    }

    /// Notifier that remembers every submission, optionally failing.
    #[derive(Default)]
    pub struct RecordingNotifier {
        pub received: Mutex<Vec<ContactSubmission>>,
        pub fail: bool,
    }

    #[async_trait::async_trait]
    impl ContactNotifier for RecordingNotifier {
        async fn deliver(&self, submission: &ContactSubmission) -> Result<(), NotifyError> {
            self.received.lock().expect("lock").push(submission.clone());
            if self.fail {
                return Err(NotifyError::Unavailable("test".into()));
            }
            Ok(())
        }
    }
}
