//! Streaming SHA-512 state
//!
//! `Sha512` absorbs a message through any number of `update` calls and
//! produces the digest exactly once through `finalize`:
//!
//! `new` → `update`* → `finalize`
//!
//! Any split of the message across `update` calls yields the same digest
//! as hashing the concatenation in one call. Input is compressed as soon
//! as a full block is available; only the trailing partial block is
//! copied into the state.

use std::fmt;

use tracing::trace;
use zeroize::Zeroize;

use super::core::{compress, finish};
use super::{BLOCK_LEN, DIGEST_LEN, H512_INIT, Sha512Error};

/// Largest message, in bytes, whose bit length still fits in 128 bits.
const MAX_MESSAGE_LEN: u128 = u128::MAX >> 3;

/// Incremental SHA-512 hasher.
///
/// The state is wiped when dropped.
#[derive(Clone)]
pub struct Sha512 {
    /// Running hash words H0..H7
    hash_words: [u64; 8],

    /// Bytes not yet forming a complete block
    buffer: [u8; BLOCK_LEN],

    /// Number of valid bytes in `buffer`, always below `BLOCK_LEN`
    buffer_len: usize,

    /// Total number of message bytes absorbed
    total_len: u128,

    finalized: bool,
}

impl Sha512 {
    /// Creates a fresh state loaded with the SHA-512 initial hash value.
    pub fn new() -> Self {
        Self {
            hash_words: H512_INIT,
            buffer: [0u8; BLOCK_LEN],
            buffer_len: 0,
            total_len: 0,
            finalized: false,
        }
    }

    /// Hashes `input` in one call.
    pub fn digest(input: &[u8]) -> [u8; DIGEST_LEN] {
        let mut state = Self::new();

        // A slice is at most 2^64 bytes long, far below `MAX_MESSAGE_LEN`.
        state.absorb(input);
        state.seal()
    }

    /// Appends `input` to the message.
    ///
    /// `input` may have any length, including zero. Complete blocks are
    /// compressed immediately and the remainder is buffered.
    ///
    /// # Errors
    /// - `Sha512Error::InvalidState` if the state was already finalized
    /// - `Sha512Error::MessageTooLong` if the total message would exceed
    ///   2¹²⁸ − 1 bits; the state is left unchanged
    pub fn update(&mut self, input: &[u8]) -> Result<(), Sha512Error> {
        if self.finalized {
            return Err(Sha512Error::InvalidState);
        }

        self.total_len
            .checked_add(input.len() as u128)
            .filter(|&total| total <= MAX_MESSAGE_LEN)
            .ok_or(Sha512Error::MessageTooLong)?;

        self.absorb(input);

        Ok(())
    }

    /// Pads the message, processes the final block(s) and returns the
    /// 64-byte digest.
    ///
    /// The state becomes terminal: later calls to `update` or `finalize`
    /// fail and leave it untouched.
    ///
    /// # Errors
    /// - `Sha512Error::InvalidState` if the state was already finalized
    pub fn finalize(&mut self) -> Result<[u8; DIGEST_LEN], Sha512Error> {
        if self.finalized {
            return Err(Sha512Error::InvalidState);
        }

        Ok(self.seal())
    }

    /// Total number of message bytes absorbed so far.
    pub fn total_len(&self) -> u128 {
        self.total_len
    }

    /// Whether `finalize` has already been called.
    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    fn absorb(&mut self, mut input: &[u8]) {
        self.total_len += input.len() as u128;

        // Top up a partially filled buffer first
        if self.buffer_len > 0 {
            let take = (BLOCK_LEN - self.buffer_len).min(input.len());

            self.buffer[self.buffer_len..self.buffer_len + take]
                .copy_from_slice(&input[..take]);
            self.buffer_len += take;
            input = &input[take..];

            if self.buffer_len < BLOCK_LEN {
                return;
            }

            compress(&self.buffer, &mut self.hash_words);
            self.buffer_len = 0;
        }

        // Compress full blocks straight from the caller's slice
        while let Some((block, rest)) = input.split_first_chunk::<BLOCK_LEN>() {
            compress(block, &mut self.hash_words);
            input = rest;
        }

        self.buffer[..input.len()].copy_from_slice(input);
        self.buffer_len = input.len();
    }

    fn seal(&mut self) -> [u8; DIGEST_LEN] {
        self.finalized = true;

        let bit_len = self.total_len << 3;
        let (digest, blocks) = finish(
            &self.buffer[..self.buffer_len],
            bit_len,
            &mut self.hash_words,
        );

        trace!(
            bytes = self.total_len,
            final_blocks = blocks,
            "sha512 finalized"
        );

        self.buffer.zeroize();
        self.buffer_len = 0;

        digest
    }
}

impl Default for Sha512 {
    /// Equivalent to [`Sha512::new`].
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Sha512 {
    // Buffered message bytes and intermediate words stay out of logs.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sha512")
            .field("total_len", &self.total_len)
            .field("buffer_len", &self.buffer_len)
            .field("finalized", &self.finalized)
            .finish_non_exhaustive()
    }
}

impl Drop for Sha512 {
    fn drop(&mut self) {
        self.hash_words.zeroize();
        self.buffer.zeroize();
        self.buffer_len.zeroize();
        self.total_len.zeroize();
        self.finalized.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_overflow_is_rejected_without_mutation() {
        let mut state = Sha512::new();
        state.update(b"abc").unwrap();
        state.total_len = MAX_MESSAGE_LEN - 1;

        assert_eq!(state.update(b"xy"), Err(Sha512Error::MessageTooLong));
        assert_eq!(state.total_len, MAX_MESSAGE_LEN - 1);
        assert_eq!(state.buffer_len, 3);

        assert_eq!(state.update(b"x"), Ok(()));
        assert_eq!(state.total_len, MAX_MESSAGE_LEN);
        assert!(state.finalize().is_ok());
    }
}
