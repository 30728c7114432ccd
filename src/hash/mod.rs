//! Hash algorithms exposed by the crate.
//!
//! Currently includes SHA-512 with a pure-Rust implementation.

pub mod sha512;

/// Re-export of the SHA-512 convenience functions and streaming state.
pub use sha512::{Sha512, Sha512Error, sha512, sha512_hex};
