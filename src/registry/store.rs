//! Name → handler registry.
//!
//! # Responsibilities
//! - Register handlers under a name (last registration wins)
//! - Resolve a decoded ajaxlet name to its handler
//!
//! # Design Decisions
//! - Backed by a sharded `DashMap`; an insert is published under the shard
//!   write lock, so readers see either the old or the new entry
//! - Lookups hand out a cloned `Arc`, no lock is held while a handler runs
//! - Cloning the registry shares the same map

use std::sync::Arc;

use dashmap::DashMap;

use super::Ajaxlet;

/// Registry mapping names to handlers.
pub struct HandlerRegistry<H: ?Sized = dyn Ajaxlet> {
    handlers: Arc<DashMap<String, Arc<H>>>,
}

impl<H: ?Sized> HandlerRegistry<H> {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            handlers: Arc::new(DashMap::new()),
        }
    }

    /// Register `handler` under `name`, replacing any previous handler.
    pub fn register(&self, name: impl Into<String>, handler: Arc<H>) {
        let name = name.into();
        if self.handlers.insert(name.clone(), handler).is_some() {
            tracing::warn!(ajaxlet = %name, "Replaced previously registered ajaxlet");
        } else {
            tracing::debug!(ajaxlet = %name, "Registered ajaxlet");
        }
    }

    /// Find the handler registered under exactly `name`.
    pub fn lookup(&self, name: &str) -> Option<Arc<H>> {
        self.handlers.get(name).map(|entry| Arc::clone(entry.value()))
    }

    /// Number of registered names.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Whether nothing has been registered yet.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.handlers.iter().map(|e| e.key().clone()).collect();
        names.sort();
        names
    }
}

impl<H: ?Sized> Clone for HandlerRegistry<H> {
    fn clone(&self) -> Self {
        Self {
            handlers: Arc::clone(&self.handlers),
        }
    }
}

impl<H: ?Sized> Default for HandlerRegistry<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: ?Sized> std::fmt::Debug for HandlerRegistry<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandlerRegistry")
            .field("names", &self.names())
            .finish()
    }
}
