//! Path token extraction.
//!
//! # Data Flow
//! ```text
//! Raw request path ("/ajax/My%2FPlugin/Friend?x=1")
//!     → path.rs (prefix match, raw boundary scan)
//!     → decode.rs (`+` → space, %XX → bytes → UTF-8)
//!     → Return: name token, action token, or None
//! ```
//!
//! # Design Decisions
//! - Stateless and lock-free; callers pass the prefix on every call
//! - Absence is a value (`None`), never an error
//! - No query parameter parsing here (the HTTP layer owns that)

pub mod decode;
pub mod path;

pub use decode::decode_segment;
pub use path::{extract_action, extract_name, split_tokens, AjaxPath};
