//! Event observer contract and dispatch.
//!
//! An observer is a single-method callback invoked once per host-delivered
//! event. The registry drives all registered observers in registration order
//! and swallows their failures: an observer error is logged at warn level and
//! never propagates back to the host.
//!
//! # Example
//!
//! ```rust
//! use chime_core::observer::{EventObserver, ObserverContext};
//! use chime_core::event::HostEvent;
//! use async_trait::async_trait;
//!
//! struct LoggingObserver;
//!
//! #[async_trait]
//! impl EventObserver for LoggingObserver {
//!     fn name(&self) -> &str {
//!         "logging"
//!     }
//!
//!     async fn on_event(&self, event: &HostEvent, _ctx: &ObserverContext) -> chime_core::Result<()> {
//!         println!("saw {}", event.kind);
//!         Ok(())
//!     }
//! }
//! ```

use crate::client::HostClient;
use crate::error::Result;
use crate::event::HostEvent;
use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::warn;

// ─────────────────────────────────────────────────────────────────────────────
// Observer Context
// ─────────────────────────────────────────────────────────────────────────────

/// Context shared with every observer invocation.
#[derive(Clone)]
pub struct ObserverContext {
    /// Project root the host launched the session in.
    pub directory: PathBuf,
    /// Client for host API queries.
    pub client: Arc<dyn HostClient>,
}

impl ObserverContext {
    /// Create a new observer context.
    pub fn new(directory: impl Into<PathBuf>, client: Arc<dyn HostClient>) -> Self {
        Self {
            directory: directory.into(),
            client,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Observer Trait
// ─────────────────────────────────────────────────────────────────────────────

/// Trait for implementing event observers.
#[async_trait]
pub trait EventObserver: Send + Sync {
    /// Name of the observer (for logging/debugging).
    fn name(&self) -> &str;

    /// Handle one host-delivered event.
    ///
    /// The event is a read-only borrow valid for this call only. Returning an
    /// error is safe: the registry logs it and moves on.
    async fn on_event(&self, event: &HostEvent, ctx: &ObserverContext) -> Result<()>;
}

// ─────────────────────────────────────────────────────────────────────────────
// Observer Registry
// ─────────────────────────────────────────────────────────────────────────────

/// Registry for managing observers.
#[derive(Default)]
pub struct ObserverRegistry {
    observers: RwLock<Vec<Arc<dyn EventObserver>>>,
}

impl ObserverRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an observer.
    pub async fn register(&self, observer: Arc<dyn EventObserver>) {
        self.observers.write().await.push(observer);
    }

    /// Unregister an observer by name.
    pub async fn unregister(&self, name: &str) {
        self.observers.write().await.retain(|o| o.name() != name);
    }

    /// Number of registered observers.
    pub async fn len(&self) -> usize {
        self.observers.read().await.len()
    }

    /// Whether the registry is empty.
    pub async fn is_empty(&self) -> bool {
        self.observers.read().await.is_empty()
    }

    /// Dispatch one event to every registered observer, in registration order.
    ///
    /// Observer errors are logged and swallowed; dispatch itself never fails.
    pub async fn dispatch(&self, event: &HostEvent, ctx: &ObserverContext) {
        let observers = self.observers.read().await.clone();

        for observer in observers {
            if let Err(err) = observer.on_event(event, ctx).await {
                warn!("Observer {} failed on {}: {}", observer.name(), event.kind, err);
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Observer Builder
// ─────────────────────────────────────────────────────────────────────────────

/// Builder for creating observers from closures.
pub struct ObserverBuilder {
    name: String,
}

impl ObserverBuilder {
    /// Create a new observer builder.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Build with an async closure.
    pub fn build<F, Fut>(self, handler: F) -> ClosureObserver<F>
    where
        F: Fn(&HostEvent, &ObserverContext) -> Fut + Send + Sync + 'static,
        Fut: std::future::Future<Output = Result<()>> + Send + 'static,
    {
        ClosureObserver {
            name: self.name,
            handler,
        }
    }
}

/// Observer implementation using a closure.
pub struct ClosureObserver<F> {
    name: String,
    handler: F,
}

#[async_trait]
impl<F, Fut> EventObserver for ClosureObserver<F>
where
    F: Fn(&HostEvent, &ObserverContext) -> Fut + Send + Sync + 'static,
    Fut: std::future::Future<Output = Result<()>> + Send + 'static,
{
    fn name(&self) -> &str {
        &self.name
    }

    async fn on_event(&self, event: &HostEvent, ctx: &ObserverContext) -> Result<()> {
        (self.handler)(event, ctx).await
    }
}
