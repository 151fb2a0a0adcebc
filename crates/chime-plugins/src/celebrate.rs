//! Celebration observer.
//!
//! On `session.idle`, looks up the session named by the event payload and
//! fires a celebratory URL scheme for top-level sessions. Subagent sessions
//! (those with a parent) stay quiet so delegated work does not celebrate on
//! behalf of its caller.

use async_trait::async_trait;
use chime_core::config::CelebrationConfig;
use chime_core::desktop::{SystemOpener, UrlOpener};
use chime_core::error::Result;
use chime_core::event::HostEvent;
use chime_core::observer::{EventObserver, ObserverContext};
use std::sync::Arc;
use tracing::{debug, warn};

/// Observer that celebrates when a top-level session goes idle.
pub struct CelebrationObserver {
    config: CelebrationConfig,
    opener: Arc<dyn UrlOpener>,
}

impl CelebrationObserver {
    /// Create an observer using the system URL opener.
    pub fn new(config: CelebrationConfig) -> Self {
        Self::with_opener(config, Arc::new(SystemOpener))
    }

    /// Create an observer with a custom URL opener.
    pub fn with_opener(config: CelebrationConfig, opener: Arc<dyn UrlOpener>) -> Self {
        Self { config, opener }
    }
}

#[async_trait]
impl EventObserver for CelebrationObserver {
    fn name(&self) -> &str {
        "celebration"
    }

    async fn on_event(&self, event: &HostEvent, ctx: &ObserverContext) -> Result<()> {
        if !event.is_session_idle() {
            return Ok(());
        }

        // No session id in the payload: nothing to look up, nothing to fire.
        let Some(session_id) = event.session_id() else {
            debug!("session.idle event without a session id");
            return Ok(());
        };

        let session = match ctx.client.get_session(session_id).await {
            Ok(session) => session,
            Err(err) => {
                // A failed lookup suppresses the effect; the event still
                // counts as handled.
                warn!("Failed to get session {}: {}", session_id, err);
                return Ok(());
            }
        };

        if session.is_subagent() {
            debug!("Session {} has a parent, skipping celebration", session_id);
            return Ok(());
        }

        self.opener.open(&self.config.url).await
    }
}
