//! SHA-512 core hashing functions
//!
//! This module implements the block-level logic of the SHA-512
//! cryptographic hash function as defined in FIPS 180-4.
//!
//! It provides:
//! - the compression function operating on 1024-bit blocks
//! - the final padding step, which seals a message of known length
//!
//! Both functions operate on raw state words and carry no knowledge of
//! how the input was split across calls; that bookkeeping lives in
//! `Sha512`.

use super::computations::all_rounds;
use super::{BLOCK_LEN, DIGEST_LEN, LENGTH_FIELD_LEN};

/// Compresses a single 1024-bit message block.
///
/// This function performs the SHA-512 compression step on a single
/// 128-byte block, updating the internal hash state in place.
///
/// # Parameters
/// - `block`: A 1024-bit (128-byte) message block
/// - `state`: The current hash state (8 × 64-bit words)
///
/// # Notes
/// - Input words are interpreted as big-endian, as required by SHA-512.
/// - The cost is the same for every block and no branch depends on the
///   block contents.
pub fn compress(block: &[u8; BLOCK_LEN], state: &mut [u64; 8]) {
    // Message schedule (first 16 words)
    let mut w = [0u64; 16];

    for (slot, chunk) in w.iter_mut().zip(block.chunks_exact(8)) {
        let mut word = [0u8; 8];
        word.copy_from_slice(chunk);
        *slot = u64::from_be_bytes(word);
    }

    all_rounds(state, w);
}

/// Pads the trailing partial block and emits the digest.
///
/// `tail` holds the bytes of the message that did not fill a whole block
/// (strictly fewer than 128), and `bit_len` is the length of the complete
/// message in bits.
///
/// # Returns
/// The 64-byte digest together with the number of blocks compressed
/// during padding (1 or 2).
///
/// # Notes
/// - A single `0x80` byte follows the message, then zeros up to byte 112
///   of the last block, then the 128-bit big-endian bit length.
/// - When fewer than 17 bytes are left after the tail, the length field
///   does not fit and an additional all-zero block is used.
pub fn finish(tail: &[u8], bit_len: u128, state: &mut [u64; 8]) -> ([u8; DIGEST_LEN], usize) {
    debug_assert!(tail.len() < BLOCK_LEN);

    let mut block = [0u8; BLOCK_LEN];
    let rem = tail.len();
    let mut blocks = 1;

    // Copy remaining bytes and append the padding bit (0x80)
    block[..rem].copy_from_slice(tail);
    block[rem] = 0x80;

    if rem >= BLOCK_LEN - LENGTH_FIELD_LEN {
        compress(&block, state);
        block = [0; BLOCK_LEN];
        blocks += 1;
    }

    block[BLOCK_LEN - LENGTH_FIELD_LEN..].copy_from_slice(&bit_len.to_be_bytes());

    compress(&block, state);

    // Serialize final state into big-endian bytes
    let mut out = [0u8; DIGEST_LEN];
    for (chunk, word) in out.chunks_exact_mut(8).zip(state.iter()) {
        chunk.copy_from_slice(&word.to_be_bytes());
    }

    (out, blocks)
}
