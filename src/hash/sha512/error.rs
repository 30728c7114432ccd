use thiserror::Error;

/// Errors returned by the streaming SHA-512 API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Sha512Error {
    /// The state was already finalized.
    ///
    /// Neither `update` nor `finalize` may be called after `finalize`;
    /// a new `Sha512` must be created instead.
    #[error("sha512 state already finalized")]
    InvalidState,

    /// Absorbing the input would push the message length past 2¹²⁸ − 1
    /// bits, which cannot be encoded in the length field.
    #[error("message length exceeds 2^128 - 1 bits")]
    MessageTooLong,
}
