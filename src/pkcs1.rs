use log::trace;

use crate::error::{Error, Rejection, Result};
use crate::HASH_LEN;

/// DER prefix of the SHA-256 `DigestInfo`.
pub const SHA256_DIGEST_INFO: [u8; 19] = [
    0x30, 0x31, 0x30, 0x0d, 0x06, 0x09, 0x60, 0x86, 0x48, 0x01, 0x65, 0x03, 0x04, 0x02, 0x01, 0x05,
    0x00, 0x04, 0x20,
];

const T_LEN: usize = SHA256_DIGEST_INFO.len() + HASH_LEN;
const MIN_PS_LEN: usize = 8;

/// EM = 0x00 || 0x01 || PS || 0x00 || DigestInfo || H
///
/// `em` is big-endian and as long as the modulus. Every field is checked
/// against the encoding `message_hash` must produce.
pub fn compare(message_hash: &[u8; HASH_LEN], em: &[u8]) -> Result<()> {
    let key_len = em.len();
    trace!("pkcs1 compare: {} byte encoded message", key_len);

    let min_len = T_LEN + MIN_PS_LEN + 3;
    if key_len < min_len {
        return Err(Error::EncodedMessageTooShort {
            len: key_len,
            min_len,
        });
    }

    let (head, t) = em.split_at(key_len - T_LEN);
    let (digest_info, h) = t.split_at(SHA256_DIGEST_INFO.len());

    if h != message_hash {
        return Err(Rejection::HashMismatch.into());
    }

    if digest_info != SHA256_DIGEST_INFO {
        return Err(Rejection::DigestInfoMismatch.into());
    }

    // head = 0x00 || 0x01 || PS || 0x00
    let ps = &head[2..head.len() - 1];
    if head[0] != 0x00
        || head[1] != 0x01
        || ps.iter().any(|&b| b != 0xff)
        || head[head.len() - 1] != 0x00
    {
        return Err(Rejection::InvalidPadding.into());
    }

    Ok(())
}
