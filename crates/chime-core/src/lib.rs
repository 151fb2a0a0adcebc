//! chime-core - Core library for chime
//!
//! This crate provides the host-facing contracts shared by all chime
//! observers:
//!
//! - **event**: wire-format host events (`session.created`, `session.idle`)
//! - **session**: borrowed session descriptors fetched from the host
//! - **client**: host API access (session lookup, TUI toasts)
//! - **observer**: the event-observer contract and dispatch registry
//! - **desktop**: OS notifications and URL-scheme invocations
//! - **config**: layered configuration (env, file, defaults)

pub mod client;
pub mod config;
pub mod desktop;
pub mod error;
pub mod event;
pub mod observer;
pub mod session;

// Re-export commonly used types
pub use client::{HostClient, HttpHostClient, Toast, ToastVariant};
pub use config::{NotifierConfig, NotifyRoute};
pub use error::{Error, Result};
pub use event::{EventKind, EventPayload, HostEvent};
pub use observer::{EventObserver, ObserverContext, ObserverRegistry};
pub use session::Session;
