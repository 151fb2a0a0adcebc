//! API client for the host runtime.
//!
//! The host exposes a local HTTP API while it runs. Observers use it for two
//! things: fetching session descriptors and showing toasts in the host TUI.
//!
//! # Usage
//!
//! ```rust,no_run
//! use chime_core::client::{HostClient, HttpHostClient};
//!
//! #[tokio::main]
//! async fn main() -> chime_core::Result<()> {
//!     let client = HttpHostClient::new("http://127.0.0.1:4096");
//!     let session = client.get_session("ses_1").await?;
//!     println!("{}", session.id);
//!     Ok(())
//! }
//! ```

use crate::error::{Error, Result};
use crate::session::Session;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

// ─────────────────────────────────────────────────────────────────────────────
// Toast Types
// ─────────────────────────────────────────────────────────────────────────────

/// Toast severity understood by the host TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastVariant {
    Info,
    Success,
    Warning,
    Error,
}

/// Toast request body for the host TUI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Toast {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub message: String,
    pub variant: ToastVariant,
    /// Display duration in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u64>,
}

impl Toast {
    /// Create a toast with the given message and variant.
    pub fn new(message: impl Into<String>, variant: ToastVariant) -> Self {
        Self {
            title: None,
            message: message.into(),
            variant,
            duration: None,
        }
    }

    /// Create a warning toast.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, ToastVariant::Warning)
    }

    /// Set the toast title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the display duration in milliseconds.
    pub fn with_duration(mut self, duration_ms: u64) -> Self {
        self.duration = Some(duration_ms);
        self
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Host Client
// ─────────────────────────────────────────────────────────────────────────────

/// Client-side view of the host API used by observers.
#[async_trait]
pub trait HostClient: Send + Sync {
    /// Fetch a session descriptor by id.
    async fn get_session(&self, session_id: &str) -> Result<Session>;

    /// Show a toast in the host TUI.
    async fn show_toast(&self, toast: &Toast) -> Result<()>;
}

/// HTTP implementation of [`HostClient`] against the host's local API.
#[derive(Clone)]
pub struct HttpHostClient {
    base_url: String,
    client: reqwest::Client,
}

impl HttpHostClient {
    /// Create a client for the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    /// Base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl HostClient for HttpHostClient {
    async fn get_session(&self, session_id: &str) -> Result<Session> {
        let url = format!("{}/session/{}", self.base_url, session_id);
        debug!("GET {}", url);

        let resp = self.client.get(&url).send().await?;
        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(Error::SessionNotFound(session_id.to_string()));
        }
        if !resp.status().is_success() {
            return Err(Error::HostApi(format!(
                "GET /session/{} returned {}",
                session_id,
                resp.status()
            )));
        }

        Ok(resp.json().await?)
    }

    async fn show_toast(&self, toast: &Toast) -> Result<()> {
        let url = format!("{}/tui/show-toast", self.base_url);
        debug!("POST {}", url);

        let resp = self.client.post(&url).json(toast).send().await?;
        if !resp.status().is_success() {
            return Err(Error::HostApi(format!(
                "POST /tui/show-toast returned {}",
                resp.status()
            )));
        }

        Ok(())
    }
}
