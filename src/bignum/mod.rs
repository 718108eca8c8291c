//! Fixed-modulus big integers carried as little-endian 120-bit limbs.
//!
//! This is the arithmetic backend the verifier runs on: modular
//! multiplication with Barrett reduction and little-endian serialization.

mod params;
pub mod utils;

use std::fmt;

use num_bigint::BigUint;

use crate::error::{Error, Result};
use utils::{biguint_to_limbs, limb_in_range, limbs_to_biguint};

pub use params::{BigNumParams, BARRETT_OVERFLOW_BITS};
pub use utils::LIMB_BITS;

/// An integer in `[0, n)` for the modulus `n` of the parameters it was built against.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BigNum {
    value: BigUint,
    num_limbs: usize,
}

impl BigNum {
    pub fn from_biguint(params: &BigNumParams, value: BigUint) -> Result<Self> {
        if &value >= params.modulus() {
            return Err(Error::InvalidSignature(
                "value is not smaller than the modulus".to_string(),
            ));
        }

        Ok(Self {
            value,
            num_limbs: params.num_limbs(),
        })
    }

    pub fn from_limbs(params: &BigNumParams, limbs: &[u128]) -> Result<Self> {
        if limbs.len() != params.num_limbs() {
            return Err(Error::InvalidSignature(format!(
                "expected {} limbs, got {}",
                params.num_limbs(),
                limbs.len()
            )));
        }
        if let Some(limb) = limbs.iter().find(|&&l| !limb_in_range(l)) {
            return Err(Error::InvalidSignature(format!(
                "limb 0x{:x} exceeds 120 bits",
                limb
            )));
        }

        Self::from_biguint(params, limbs_to_biguint(limbs))
    }

    /// Big-endian input, at most `params.num_bytes()` long.
    pub fn from_be_bytes(params: &BigNumParams, bytes: &[u8]) -> Result<Self> {
        if bytes.len() > params.num_bytes() {
            return Err(Error::InvalidSignature(format!(
                "expected at most {} bytes, got {}",
                params.num_bytes(),
                bytes.len()
            )));
        }

        Self::from_biguint(params, BigUint::from_bytes_be(bytes))
    }

    pub fn value(&self) -> &BigUint {
        &self.value
    }

    pub fn num_limbs(&self) -> usize {
        self.num_limbs
    }

    pub fn limbs(&self) -> Vec<u128> {
        // the value is below the modulus, so it always fits
        biguint_to_limbs(&self.value, self.num_limbs).unwrap_or_default()
    }

    /// Least significant byte first, zero-padded to `len` bytes.
    pub fn to_le_bytes(&self, len: usize) -> Result<Vec<u8>> {
        let mut bytes = self.value.to_bytes_le();
        if bytes.len() > len {
            return Err(Error::InvalidEncodedMessage {
                expected: len,
                actual: bytes.len(),
            });
        }
        bytes.resize(len, 0);
        Ok(bytes)
    }
}

impl fmt::Display for BigNum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let limbs = self
            .limbs()
            .iter()
            .map(|limb| format!("0x{:x}", limb))
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "[{}]", limbs)
    }
}
