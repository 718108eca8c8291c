use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Why a well-formed signature failed to verify.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("signature is not smaller than the modulus")]
    SignatureOutOfRange,
    #[error("encoded message does not end with 0xbc")]
    InvalidTrailer,
    #[error("leading byte of the encoded message is not zero")]
    LeadingByteNonzero,
    #[error("masked bits of the first data block byte are set")]
    MaskedBitsNonzero,
    #[error("invalid padding")]
    InvalidPadding,
    #[error("digest info prefix mismatch")]
    DigestInfoMismatch,
    #[error("hash mismatch")]
    HashMismatch,
}

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("unsupported public exponent {0}, expected 3 or 65537")]
    InvalidExponent(u64),
    #[error("invalid modulus parameters: {0}")]
    InvalidParams(String),
    #[error("invalid signature: {0}")]
    InvalidSignature(String),
    #[error("{mod_bits}-bit modulus is too small, need at least {min_bits} bits")]
    ModulusTooSmall { mod_bits: usize, min_bits: usize },
    #[error("mask length {0} too long")]
    MaskTooLong(u64),
    #[error("range {start}..{end} of a {len}-byte buffer does not fit into {dst_len} bytes")]
    SliceOutOfBounds {
        start: usize,
        end: usize,
        len: usize,
        dst_len: usize,
    },
    #[error("encoded message of {len} bytes is shorter than {min_len}")]
    EncodedMessageTooShort { len: usize, min_len: usize },
    #[error("encoded message is {actual} bytes, expected {expected}")]
    InvalidEncodedMessage { expected: usize, actual: usize },
    #[error("signature rejected: {0}")]
    Rejected(#[from] Rejection),
}

impl Error {
    /// True for verification failures, false for malformed or inconsistent input.
    pub fn is_rejection(&self) -> bool {
        matches!(self, Error::Rejected(_))
    }
}
