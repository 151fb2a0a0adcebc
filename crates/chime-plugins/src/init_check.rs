//! Init check observer.
//!
//! On `session.created`, probes the project root for the marker file that
//! signals the project has been initialized. When the probe fails, the user
//! gets a one-shot nudge to run `/init`, either as a host TUI toast or as an
//! OS-level desktop notification depending on the configured route.

use async_trait::async_trait;
use chime_core::client::Toast;
use chime_core::config::{InitCheckConfig, NotifyRoute};
use chime_core::desktop::{DesktopNotification, Notifier, SystemNotifier};
use chime_core::error::Result;
use chime_core::event::HostEvent;
use chime_core::observer::{EventObserver, ObserverContext};
use std::sync::Arc;
use tracing::debug;

/// Title used for notifications.
const NOTIFY_TITLE: &str = "chime";

/// Observer that checks for the marker file when a session is created.
pub struct InitCheckObserver {
    config: InitCheckConfig,
    notifier: Arc<dyn Notifier>,
}

impl InitCheckObserver {
    /// Create an observer using the system notifier.
    pub fn new(config: InitCheckConfig) -> Self {
        Self::with_notifier(config, Arc::new(SystemNotifier))
    }

    /// Create an observer with a custom notifier backend.
    pub fn with_notifier(config: InitCheckConfig, notifier: Arc<dyn Notifier>) -> Self {
        Self { config, notifier }
    }
}

#[async_trait]
impl EventObserver for InitCheckObserver {
    fn name(&self) -> &str {
        "init-check"
    }

    async fn on_event(&self, event: &HostEvent, ctx: &ObserverContext) -> Result<()> {
        if !event.is_session_created() {
            return Ok(());
        }

        let marker_path = ctx.directory.join(&self.config.marker_filename);
        // Missing and unreadable are treated the same: any probe failure
        // means the nudge fires.
        if tokio::fs::metadata(&marker_path).await.is_ok() {
            debug!("Found {}", marker_path.display());
            return Ok(());
        }

        let marker = &self.config.marker_filename;
        match self.config.route {
            NotifyRoute::Toast => {
                let toast =
                    Toast::warning(format!("No {} file found. Run /init to get started.", marker))
                        .with_title(NOTIFY_TITLE)
                        .with_duration(self.config.toast_duration_ms);
                ctx.client.show_toast(&toast).await
            }
            NotifyRoute::Desktop => {
                let notification = DesktopNotification::new(NOTIFY_TITLE, "Run /init to get started")
                    .with_subtitle(format!("No {} file found", marker))
                    .with_sound(self.config.sound.clone());
                self.notifier.notify(&notification).await
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chime_core::client::HostClient;
    use chime_core::error::Error;
    use chime_core::event::EventKind;
    use chime_core::session::Session;
    use std::sync::Mutex;
    use tempfile::tempdir;

    #[derive(Default)]
    struct RecordingClient {
        toasts: Mutex<Vec<Toast>>,
    }

    #[async_trait]
    impl HostClient for RecordingClient {
        async fn get_session(&self, session_id: &str) -> Result<Session> {
            Err(Error::SessionNotFound(session_id.to_string()))
        }

        async fn show_toast(&self, toast: &Toast) -> Result<()> {
            self.toasts.lock().unwrap().push(toast.clone());
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        notifications: Mutex<Vec<DesktopNotification>>,
    }

    #[async_trait]
    impl Notifier for RecordingNotifier {
        async fn notify(&self, notification: &DesktopNotification) -> Result<()> {
            self.notifications.lock().unwrap().push(notification.clone());
            Ok(())
        }
    }

    fn context(directory: &std::path::Path, client: Arc<RecordingClient>) -> ObserverContext {
        ObserverContext::new(directory, client)
    }

    #[tokio::test]
    async fn test_marker_present_stays_quiet() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("AGENTS.md"), "# Agents").unwrap();
        let client = Arc::new(RecordingClient::default());
        let observer = InitCheckObserver::new(InitCheckConfig::default());

        let event = HostEvent::new(EventKind::SessionCreated);
        observer
            .on_event(&event, &context(dir.path(), client.clone()))
            .await
            .unwrap();

        assert!(client.toasts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_marker_missing_shows_one_toast() {
        let dir = tempdir().unwrap();
        let client = Arc::new(RecordingClient::default());
        let observer = InitCheckObserver::new(InitCheckConfig::default());

        let event = HostEvent::new(EventKind::SessionCreated);
        observer
            .on_event(&event, &context(dir.path(), client.clone()))
            .await
            .unwrap();

        let toasts = client.toasts.lock().unwrap();
        assert_eq!(toasts.len(), 1);
        assert!(toasts[0].message.contains("AGENTS.md"));
        assert!(toasts[0].message.contains("Run /init"));
        assert_eq!(toasts[0].duration, Some(5000));
    }

    #[tokio::test]
    async fn test_desktop_route_sends_notification() {
        let dir = tempdir().unwrap();
        let client = Arc::new(RecordingClient::default());
        let notifier = Arc::new(RecordingNotifier::default());
        let config = InitCheckConfig {
            route: NotifyRoute::Desktop,
            ..Default::default()
        };
        let observer = InitCheckObserver::with_notifier(config, notifier.clone());

        let event = HostEvent::new(EventKind::SessionCreated);
        observer
            .on_event(&event, &context(dir.path(), client.clone()))
            .await
            .unwrap();

        let notifications = notifier.notifications.lock().unwrap();
        assert_eq!(notifications.len(), 1);
        assert_eq!(
            notifications[0].subtitle.as_deref(),
            Some("No AGENTS.md file found")
        );
        assert_eq!(notifications[0].sound.as_deref(), Some("Sosumi"));
        assert!(client.toasts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_other_events_skip_the_probe() {
        let dir = tempdir().unwrap();
        let client = Arc::new(RecordingClient::default());
        let observer = InitCheckObserver::new(InitCheckConfig::default());

        // Marker is absent, but neither of these events should probe for it.
        for kind in [EventKind::SessionIdle, EventKind::Other] {
            observer
                .on_event(&HostEvent::new(kind), &context(dir.path(), client.clone()))
                .await
                .unwrap();
        }

        assert!(client.toasts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_custom_marker_filename() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("CLAUDE.md"), "# Claude").unwrap();
        let client = Arc::new(RecordingClient::default());
        let config = InitCheckConfig {
            marker_filename: "CLAUDE.md".to_string(),
            ..Default::default()
        };
        let observer = InitCheckObserver::new(config);

        let event = HostEvent::new(EventKind::SessionCreated);
        observer
            .on_event(&event, &context(dir.path(), client.clone()))
            .await
            .unwrap();

        assert!(client.toasts.lock().unwrap().is_empty());
    }
}
