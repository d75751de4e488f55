//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (main.rs):
//!     Load config → Validate → Build registry → Start listener
//!
//! Shutdown (shutdown.rs):
//!     trigger() or Ctrl+C → Stop accepting → Drain in-flight requests → Exit
//! ```
//!
//! # Design Decisions
//! - Ordered startup: config first, then registry, then listener
//! - Tests drive shutdown through the same broadcast channel as signals

pub mod shutdown;

pub use shutdown::Shutdown;
