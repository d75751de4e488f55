//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → DispatchConfig (validated, immutable)
//!     → published through ArcSwap to the dispatch handler
//!
//! On file change:
//!     watcher.rs detects change
//!     → loader.rs loads new config
//!     → validation.rs validates
//!     → mpsc channel → server swaps the Arc<DispatchConfig>
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require full reload
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks
//! - The listener address is only read at startup; a reload changes the
//!   prefix and nothing else observable

pub mod loader;
pub mod schema;
pub mod validation;
pub mod watcher;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{DispatchConfig, DispatchSettings, ListenerConfig, ObservabilityConfig, TimeoutConfig};
pub use validation::{validate_config, ValidationError};
pub use watcher::ConfigWatcher;
