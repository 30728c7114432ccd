//! SHA-512 message digest for Nebula
//!
//! This crate provides a from-scratch implementation of the SHA-512 hash
//! function (FIPS 180-4) together with the known-answer vectors used to
//! validate it.
//!
//! The focus is on **clarity, predictability, and auditability**: the
//! algorithm is written out explicitly, the streaming state has a strict
//! lifecycle, and every digest can be checked against published vectors.
//!
//! # Module overview
//!
//! - `hash`  
//!   The SHA-512 digest engine. Messages can be hashed in one call with
//!   `sha512`, or incrementally through `Sha512`:
//!
//!   ```rust
//!   use cryptal_sha512::hash::{Sha512, sha512};
//!
//!   let mut state = Sha512::new();
//!   state.update(b"ab").unwrap();
//!   state.update(b"c").unwrap();
//!
//!   assert_eq!(state.finalize().unwrap(), sha512(b"abc"));
//!   ```
//!
//!   A state accepts any number of `update` calls and exactly one
//!   `finalize`; using it afterwards returns `Sha512Error::InvalidState`.
//!
//! - `kat`  
//!   NIST CAVS known-answer vectors for SHA-512 and a runner that checks
//!   the engine against them, including a 1 MiB message fed through
//!   repeated chunked updates.
//!
//! # Features
//!
//! - `speed`  
//!   Fully unrolls the 80 compression rounds. Output is identical to the
//!   default build.
//!
//! # Design goals
//!
//! - No heap allocations in the digest engine
//! - No data-dependent branches in the compression function
//! - Streaming state wiped on drop
//! - Minimal and explicit APIs

pub mod hash;
pub mod kat;
