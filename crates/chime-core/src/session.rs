//! Session descriptors fetched from the host.

use serde::{Deserialize, Serialize};

/// Creation and update timestamps in epoch milliseconds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SessionTime {
    pub created: i64,
    pub updated: i64,
}

/// A session as reported by the host.
///
/// This is a borrowed view onto host-managed state: fetched on demand, valid
/// only for the duration of one event callback. Sessions are never created or
/// destroyed by this crate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub id: String,

    /// Parent session id; set on delegated subagent sessions, absent on
    /// top-level ones.
    #[serde(rename = "parentID", skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub directory: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<SessionTime>,
}

impl Session {
    /// Whether this session was delegated by another session.
    pub fn is_subagent(&self) -> bool {
        self.parent_id.is_some()
    }

    /// Whether this is a top-level session.
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}
