//! chime-plugins - Session lifecycle observers for chime
//!
//! Two observers, each subscribed to a single lifecycle event:
//!
//! - [`InitCheckObserver`] - on `session.created`, checks the project root for
//!   the marker file and nudges the user to run `/init` when it is missing.
//! - [`CelebrationObserver`] - on `session.idle`, fires a celebratory URL
//!   scheme when a top-level session finishes.
//!
//! Observers are independent: neither holds state across events, and a
//! failure in one never affects the other.

mod celebrate;
mod init_check;

pub use celebrate::CelebrationObserver;
pub use init_check::InitCheckObserver;

use chime_core::config::NotifierConfig;
use chime_core::observer::ObserverRegistry;
use std::sync::Arc;

/// Build a registry with both observers wired from the given configuration.
pub async fn registry_from_config(config: &NotifierConfig) -> ObserverRegistry {
    let registry = ObserverRegistry::new();
    registry
        .register(Arc::new(InitCheckObserver::new(config.init_check.clone())))
        .await;
    registry
        .register(Arc::new(CelebrationObserver::new(
            config.celebration.clone(),
        )))
        .await;
    registry
}
