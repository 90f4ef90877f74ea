//! penamap-rs
//!
//! Umbrella crate for the demos: re-exports [`penamap_core`].
pub use penamap_core::*;
