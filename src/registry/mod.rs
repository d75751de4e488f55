//! Ajaxlet registry subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (plugin loading):
//!     register(name, Arc<dyn Ajaxlet>) → store.rs (DashMap)
//!
//! Request path:
//!     decoded name → lookup(name) → Option<Arc<dyn Ajaxlet>>
//!     → caller invokes Ajaxlet::service(&AjaxCall)
//! ```
//!
//! # Design Decisions
//! - The registry is an explicit value threaded through the server state,
//!   never a global
//! - Exact, case-sensitive names; no unregister

pub mod ajaxlet;
pub mod builtin;
pub mod store;

pub use ajaxlet::{AjaxCall, Ajaxlet, AjaxletError};
pub use store::HandlerRegistry;
