//! MGF1 mask generation over SHA-256, RFC 8017 appendix B.2.1.

use sha2::{Digest, Sha256};

use crate::error::{Error, Result};
use crate::HASH_LEN;

/// Exclusive upper bound on the mask length, `2^32 * hLen`.
pub const MGF1_MAX_LEN: u64 = (1 << 32) * HASH_LEN as u64;

pub fn mgf1(seed: &[u8], len: usize) -> Result<Vec<u8>> {
    if len as u64 >= MGF1_MAX_LEN {
        return Err(Error::MaskTooLong(len as u64));
    }

    let iterations = (len / HASH_LEN + 1) as u64;
    let mut mask = Vec::with_capacity(iterations as usize * HASH_LEN);
    for counter in 0..iterations {
        // counter < 2^32 by the length check above
        let block = Sha256::new()
            .chain_update(seed)
            .chain_update((counter as u32).to_be_bytes())
            .finalize();
        mask.extend_from_slice(&block);
    }

    mask.truncate(len);
    Ok(mask)
}
