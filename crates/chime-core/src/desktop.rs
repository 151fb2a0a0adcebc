//! Desktop integration for notifications and URL schemes.
//!
//! Shells out to the platform's own tooling:
//!
//! - macOS: `osascript` for notifications, `open` for URL schemes
//! - elsewhere: `notify-send` and `xdg-open`
//!
//! Invocations are fire-and-forget: the child process is spawned and never
//! awaited, and no output is captured.

use crate::error::{Error, Result};
use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

// ─────────────────────────────────────────────────────────────────────────────
// Notification Types
// ─────────────────────────────────────────────────────────────────────────────

/// A desktop notification.
#[derive(Debug, Clone)]
pub struct DesktopNotification {
    pub title: String,
    pub subtitle: Option<String>,
    pub message: String,
    /// macOS sound name; available sounds live in /System/Library/Sounds.
    pub sound: Option<String>,
}

impl DesktopNotification {
    /// Create a notification with a title and message.
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: None,
            message: message.into(),
            sound: None,
        }
    }

    /// Set the subtitle line.
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Set the notification sound.
    pub fn with_sound(mut self, sound: impl Into<String>) -> Self {
        self.sound = Some(sound.into());
        self
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Traits
// ─────────────────────────────────────────────────────────────────────────────

/// Sends desktop notifications.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, notification: &DesktopNotification) -> Result<()>;
}

/// Opens URLs (including custom schemes) with the platform opener.
#[async_trait]
pub trait UrlOpener: Send + Sync {
    async fn open(&self, url: &str) -> Result<()>;
}

// ─────────────────────────────────────────────────────────────────────────────
// System Implementations
// ─────────────────────────────────────────────────────────────────────────────

/// [`Notifier`] backed by the platform notification command.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemNotifier;

/// [`UrlOpener`] backed by the platform opener command.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemOpener;

#[async_trait]
impl Notifier for SystemNotifier {
    async fn notify(&self, notification: &DesktopNotification) -> Result<()> {
        let (program, args) = notification_command(notification);
        if which::which(program).is_err() {
            return Err(Error::NotifierNotFound);
        }
        spawn_forget(program, &args)
    }
}

#[async_trait]
impl UrlOpener for SystemOpener {
    async fn open(&self, url: &str) -> Result<()> {
        let program = opener_program();
        if which::which(program).is_err() {
            return Err(Error::OpenerNotFound);
        }
        spawn_forget(program, &[url.to_string()])
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Command Construction
// ─────────────────────────────────────────────────────────────────────────────

/// Build the platform notification command.
fn notification_command(notification: &DesktopNotification) -> (&'static str, Vec<String>) {
    if cfg!(target_os = "macos") {
        let mut script = format!(
            "display notification \"{}\" with title \"{}\"",
            escape_osascript(&notification.message),
            escape_osascript(&notification.title),
        );
        if let Some(ref subtitle) = notification.subtitle {
            script.push_str(&format!(" subtitle \"{}\"", escape_osascript(subtitle)));
        }
        if let Some(ref sound) = notification.sound {
            script.push_str(&format!(" sound name \"{}\"", escape_osascript(sound)));
        }
        ("osascript", vec!["-e".to_string(), script])
    } else {
        let body = match notification.subtitle {
            Some(ref subtitle) => format!("{}\n{}", subtitle, notification.message),
            None => notification.message.clone(),
        };
        ("notify-send", vec![notification.title.clone(), body])
    }
}

/// Platform opener binary.
fn opener_program() -> &'static str {
    if cfg!(target_os = "macos") {
        "open"
    } else {
        "xdg-open"
    }
}

/// Escape a string for embedding in a double-quoted AppleScript literal.
fn escape_osascript(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Spawn a command without waiting for it.
fn spawn_forget(program: &str, args: &[String]) -> Result<()> {
    Command::new(program).args(args).spawn()?;
    debug!("Spawned {} {:?}", program, args);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_osascript() {
        assert_eq!(escape_osascript("plain"), "plain");
        assert_eq!(escape_osascript(r#"say "hi""#), r#"say \"hi\""#);
        assert_eq!(escape_osascript(r"back\slash"), r"back\\slash");
    }

    #[test]
    fn test_notification_command_includes_content() {
        let notification = DesktopNotification::new("chime", "Run /init to get started")
            .with_subtitle("No AGENTS.md file found")
            .with_sound("Sosumi");

        let (program, args) = notification_command(&notification);
        let rendered = args.join(" ");
        assert!(rendered.contains("Run /init to get started"));
        assert!(rendered.contains("No AGENTS.md file found"));

        if cfg!(target_os = "macos") {
            assert_eq!(program, "osascript");
            assert_eq!(args[0], "-e");
            assert!(args[1].starts_with("display notification"));
            assert!(args[1].contains("sound name \"Sosumi\""));
        } else {
            assert_eq!(program, "notify-send");
            assert_eq!(args[0], "chime");
        }
    }

    #[test]
    fn test_opener_program() {
        let program = opener_program();
        assert!(program == "open" || program == "xdg-open");
    }
}
