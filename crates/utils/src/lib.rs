//! Satchel Utils - generic utility functions shared across Satchel services.
//!
//! This crate collects small, self-contained helpers that are used by
//! multiple crates. Each module is an independent entry point; nothing here
//! depends on anything else in the crate.
//!
//! # Design Principles
//!
//! - **Stateless** - no shared mutable state across calls
//! - **Total functions** - absence is an `Option`, never a panic or error
//! - **Minimal dependencies** - only serde_json for dynamic values and
//!   tokio for the timer driver
//! - **No domain types** - utilities must not import from service crates

pub mod array;
pub mod object;
pub mod timing;

// Re-export commonly used functions at crate root for convenience
pub use array::last_element;
pub use object::{is_empty_object, ValueExt};
pub use timing::{sleep, sleep_ms};
