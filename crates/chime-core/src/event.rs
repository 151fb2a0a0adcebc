//! Host event types.
//!
//! Events are delivered by the host runtime, one at a time, as opaque records
//! with a string `type` discriminant and an optional payload. Observers only
//! act on `session.created` and `session.idle`; every other kind deserializes
//! into [`EventKind::Other`] and passes through untouched.

use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind discriminant of a host event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    /// A new session was created.
    #[serde(rename = "session.created")]
    SessionCreated,

    /// A session stopped producing output and went idle.
    #[serde(rename = "session.idle")]
    SessionIdle,

    /// Any kind this crate does not act on.
    #[serde(other)]
    Other,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventKind::SessionCreated => write!(f, "session.created"),
            EventKind::SessionIdle => write!(f, "session.idle"),
            EventKind::Other => write!(f, "other"),
        }
    }
}

/// Payload attached to a host event.
///
/// Hosts attach more fields than these; unknown fields are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventPayload {
    /// Session the event refers to, when the host provides one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

/// An event delivered by the host.
///
/// Borrowed view onto host state: valid for the duration of one observer
/// callback, never stored across events.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostEvent {
    /// Host-assigned event id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// When the host emitted the event.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,

    /// Kind discriminant.
    #[serde(rename = "type")]
    pub kind: EventKind,

    /// Event payload; empty when the host sends none.
    #[serde(default)]
    pub data: EventPayload,
}

impl HostEvent {
    /// Create an event of the given kind with an empty payload.
    pub fn new(kind: EventKind) -> Self {
        Self {
            id: None,
            timestamp: None,
            kind,
            data: EventPayload::default(),
        }
    }

    /// Attach a session id to the payload.
    pub fn with_session_id(mut self, session_id: impl Into<String>) -> Self {
        self.data.session_id = Some(session_id.into());
        self
    }

    /// Parse an event from a JSON value as delivered by the host.
    pub fn from_json(value: &serde_json::Value) -> Result<Self> {
        Ok(serde_json::from_value(value.clone())?)
    }

    /// Session id carried in the payload, if any.
    pub fn session_id(&self) -> Option<&str> {
        self.data.session_id.as_deref()
    }

    /// Whether this is a session.created event.
    pub fn is_session_created(&self) -> bool {
        self.kind == EventKind::SessionCreated
    }

    /// Whether this is a session.idle event.
    pub fn is_session_idle(&self) -> bool {
        self.kind == EventKind::SessionIdle
    }
}
