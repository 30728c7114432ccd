//! Known-answer tests (KAT)
//!
//! This module carries a table of SHA-512 known-answer vectors and a small
//! runner that hashes each vector's message and compares the result with
//! its published digest.
//!
//! A vector either hashes its whole input in one `update`, or, when it
//! carries `Chunking`, feeds its input buffer repeatedly in fixed-size
//! chunks. The second form exercises the streaming path of `Sha512` on
//! messages far larger than the buffer stored in the table.
//!
//! Vectors marked `Expectation::Fail` pair a message with a deliberately
//! wrong digest; the runner counts them as passed only when the computed
//! digest does NOT match.

mod vectors;

use std::borrow::Cow;

use thiserror::Error;
use tracing::{debug, debug_span, warn};

use crate::hash::sha512::{DIGEST_LEN, Sha512, Sha512Error};

pub use vectors::{FLASH_DATA, SHA512_LONG_VECTORS, SHA512_VECTORS};

/// Errors raised while loading or running a vector.
#[derive(Debug, Error)]
pub enum KatError {
    /// The vector's input or expected digest is not valid hex.
    #[error("vector `{name}`: malformed hex")]
    MalformedHex {
        name: &'static str,
        #[source]
        source: hex::FromHexError,
    },

    /// The expected digest does not decode to 64 bytes.
    #[error("vector `{name}`: expected digest is {len} bytes, not 64")]
    DigestLength { name: &'static str, len: usize },

    /// Zero chunk length, empty input, or an input length that is not a
    /// multiple of the chunk length.
    #[error("vector `{name}`: invalid chunking parameters")]
    InvalidChunking { name: &'static str },

    /// The digest engine rejected an operation.
    #[error(transparent)]
    Engine(#[from] Sha512Error),

    /// The computed digest disagrees with the vector's expectation.
    #[error("vector `{name}` failed")]
    VectorFailed { name: &'static str },
}

/// Whether the expected digest is supposed to match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expectation {
    Pass,
    Fail,
}

/// Message source of a vector.
#[derive(Debug, Clone, Copy)]
pub enum VectorInput {
    /// Hex-encoded message.
    Hex(&'static str),
    /// Raw bytes, typically a buffer repeated through `Chunking`.
    Raw(&'static [u8]),
}

/// Streaming parameters of a vector.
///
/// The message is the input buffer repeated end to end, truncated to
/// `chunk_len * iterations` bytes, and is fed to `update` in `iterations`
/// calls of `chunk_len` bytes each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunking {
    pub chunk_len: usize,
    pub iterations: usize,
}

/// A single known-answer vector.
#[derive(Debug, Clone, Copy)]
pub struct HashVector {
    pub name: &'static str,
    pub input: VectorInput,
    /// Expected digest, 128 hex characters.
    pub expected: &'static str,
    pub expectation: Expectation,
    pub chunking: Option<Chunking>,
}

/// Outcome of running one vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VectorReport {
    pub name: &'static str,
    pub digest: [u8; DIGEST_LEN],
    /// The computed digest equals the expected one.
    pub matched: bool,
    /// `matched` agrees with the vector's expectation.
    pub passed: bool,
}

impl VectorReport {
    /// Computed digest as lowercase hex.
    pub fn digest_hex(&self) -> String {
        hex::encode(self.digest)
    }
}

impl HashVector {
    /// Decodes the vector's input buffer.
    pub fn input_bytes(&self) -> Result<Cow<'static, [u8]>, KatError> {
        match self.input {
            VectorInput::Hex(encoded) => hex::decode(encoded)
                .map(Cow::Owned)
                .map_err(|source| self.malformed(source)),
            VectorInput::Raw(bytes) => Ok(Cow::Borrowed(bytes)),
        }
    }

    /// Decodes the expected digest.
    pub fn expected_digest(&self) -> Result<[u8; DIGEST_LEN], KatError> {
        let bytes = hex::decode(self.expected).map_err(|source| self.malformed(source))?;

        bytes.try_into().map_err(|bytes: Vec<u8>| KatError::DigestLength {
            name: self.name,
            len: bytes.len(),
        })
    }

    /// Materializes the complete logical message.
    ///
    /// For chunked vectors this is the input buffer repeated up to
    /// `chunk_len * iterations` bytes.
    pub fn message(&self) -> Result<Vec<u8>, KatError> {
        let input = self.input_bytes()?;

        match self.chunking {
            None => Ok(input.into_owned()),
            Some(chunking) => {
                self.check_chunking(chunking, input.len())?;

                Ok(input
                    .iter()
                    .copied()
                    .cycle()
                    .take(chunking.chunk_len * chunking.iterations)
                    .collect())
            }
        }
    }

    fn check_chunking(&self, chunking: Chunking, input_len: usize) -> Result<(), KatError> {
        if chunking.chunk_len == 0 || input_len == 0 || input_len % chunking.chunk_len != 0 {
            return Err(KatError::InvalidChunking { name: self.name });
        }

        Ok(())
    }

    fn malformed(&self, source: hex::FromHexError) -> KatError {
        KatError::MalformedHex {
            name: self.name,
            source,
        }
    }
}

/// Runs a single vector through the streaming engine.
///
/// Malformed vectors are rejected before anything is hashed. A digest that
/// disagrees with the expectation is NOT an error here: it is reported
/// through `VectorReport::passed`.
pub fn run_vector(vector: &HashVector) -> Result<VectorReport, KatError> {
    let _span = debug_span!("kat", vector = vector.name).entered();

    let expected = vector.expected_digest()?;
    let input = vector.input_bytes()?;

    let mut state = Sha512::new();

    match vector.chunking {
        None => state.update(&input)?,
        Some(chunking) => {
            vector.check_chunking(chunking, input.len())?;

            // Chunks never straddle the end of the buffer since its length
            // is a multiple of `chunk_len`.
            let mut chunks = input.chunks_exact(chunking.chunk_len).cycle();

            for _ in 0..chunking.iterations {
                if let Some(chunk) = chunks.next() {
                    state.update(chunk)?;
                }
            }
        }
    }

    let digest = state.finalize()?;
    let matched = digest == expected;
    let passed = matched == (vector.expectation == Expectation::Pass);

    if passed {
        debug!(matched, "vector passed");
    } else {
        warn!(
            expected = vector.expected,
            got = %hex::encode(digest),
            "vector failed"
        );
    }

    Ok(VectorReport {
        name: vector.name,
        digest,
        matched,
        passed,
    })
}

/// Runs every vector in `vectors`, stopping at the first failure.
///
/// # Returns
/// The number of vectors run.
pub fn run_all(vectors: &[HashVector]) -> Result<usize, KatError> {
    for vector in vectors {
        let report = run_vector(vector)?;

        if !report.passed {
            return Err(KatError::VectorFailed { name: vector.name });
        }
    }

    Ok(vectors.len())
}

/// Runs the built-in SHA-512 vector tables.
///
/// # Returns
/// The number of vectors run.
pub fn self_test() -> Result<usize, KatError> {
    Ok(run_all(SHA512_VECTORS)? + run_all(SHA512_LONG_VECTORS)?)
}
