//! EMSA-PSS-VERIFY (RFC 8017 section 9.1.2) for SHA-256 with a 32-byte salt.

use log::trace;
use sha2::{Digest, Sha256};

use crate::bytes::{slice, slice_into};
use crate::error::{Error, Rejection, Result};
use crate::mgf1::mgf1;
use crate::{HASH_LEN, SALT_LEN};

const TRAILER: u8 = 0xbc;

/// Lengths derived from the modulus size.
#[derive(Debug, PartialEq, Eq)]
struct Metrics {
    key_len: usize,
    em_len: usize,
    db_len: usize,
    ps_len: usize,
    top_byte_mask: u8,
}

impl Metrics {
    fn new(mod_bits: usize) -> Result<Self> {
        let too_small = || Error::ModulusTooSmall {
            mod_bits,
            min_bits: 8 * (HASH_LEN + SALT_LEN + 1) + 2,
        };

        let em_bits = mod_bits.checked_sub(1).ok_or_else(too_small)?;
        let em_len = (em_bits + 7) / 8;
        let key_len = (mod_bits + 7) / 8;
        if em_len < HASH_LEN + SALT_LEN + 2 {
            return Err(too_small());
        }

        let bits_to_mask = 8 * em_len - em_bits;
        debug_assert!(bits_to_mask < 8);

        Ok(Self {
            key_len,
            em_len,
            db_len: em_len - HASH_LEN - 1,
            ps_len: em_len - HASH_LEN - SALT_LEN - 2,
            top_byte_mask: 0xff >> bits_to_mask,
        })
    }

    /// 1 when `mod_bits % 8 == 1`: the encoded message is one byte shorter than the modulus.
    fn offset(&self) -> usize {
        self.key_len - self.em_len
    }
}

/// `H' = SHA-256(0x00 * 8 || mHash || salt)`
fn pss_digest(message_hash: &[u8; HASH_LEN], salt: &[u8; SALT_LEN]) -> [u8; HASH_LEN] {
    Sha256::new()
        .chain_update([0u8; 8])
        .chain_update(message_hash)
        .chain_update(salt)
        .finalize()
        .into()
}

/// Checks the big-endian encoded message `em`, exactly `ceil(mod_bits / 8)`
/// bytes, against `message_hash`.
pub fn decode(message_hash: &[u8; HASH_LEN], em: &[u8], mod_bits: usize) -> Result<()> {
    let metrics = Metrics::new(mod_bits)?;
    trace!("pss decode: {:?}", metrics);

    if em.len() != metrics.key_len {
        return Err(Error::InvalidEncodedMessage {
            expected: metrics.key_len,
            actual: em.len(),
        });
    }

    if em[metrics.key_len - 1] != TRAILER {
        return Err(Rejection::InvalidTrailer.into());
    }

    let offset = metrics.offset();
    if offset == 1 && em[0] != 0 {
        return Err(Rejection::LeadingByteNonzero.into());
    }

    let mut db = vec![0u8; metrics.db_len];
    slice_into(&mut db, em, offset, offset + metrics.db_len)?;
    let h: [u8; HASH_LEN] = slice(em, offset + metrics.db_len, metrics.key_len - 1)?;

    if db[0] & !metrics.top_byte_mask != 0 {
        return Err(Rejection::MaskedBitsNonzero.into());
    }

    let db_mask = mgf1(&h, metrics.db_len)?;
    db.iter_mut().zip(&db_mask).for_each(|(b, m)| *b ^= m);
    db[0] &= metrics.top_byte_mask;

    let (ps, rest) = db.split_at(metrics.ps_len);
    if ps.iter().any(|&b| b != 0) || rest[0] != 0x01 {
        return Err(Rejection::InvalidPadding.into());
    }

    let salt: [u8; SALT_LEN] = slice(&db, metrics.db_len - SALT_LEN, metrics.db_len)?;
    if pss_digest(message_hash, &salt) != h {
        return Err(Rejection::HashMismatch.into());
    }

    Ok(())
}
