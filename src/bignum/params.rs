use num_bigint::BigUint;
use num_integer::Integer;

use super::utils::{biguint_to_limbs, limb_in_range, limbs_for_bits, limbs_to_biguint};
use super::BigNum;
use crate::error::{Error, Result};

/// Extra bits of precision carried by the Barrett reduction parameter.
pub const BARRETT_OVERFLOW_BITS: usize = 4;

/// Public modulus together with its limb form and Barrett reduction parameter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BigNumParams {
    modulus: BigUint,
    modulus_bits: usize,
    limbs: Vec<u128>,
    redc: BigUint,
    redc_limbs: Vec<u128>,
}

fn barrett_parameter(modulus: &BigUint, modulus_bits: usize) -> BigUint {
    (BigUint::from(1u8) << (2 * modulus_bits + BARRETT_OVERFLOW_BITS)) / modulus
}

impl BigNumParams {
    pub fn from_modulus(modulus: BigUint) -> Result<Self> {
        if modulus <= BigUint::from(1u8) || modulus.is_even() {
            return Err(Error::InvalidParams(
                "modulus must be odd and greater than one".to_string(),
            ));
        }

        let modulus_bits = modulus.bits() as usize;
        let num_limbs = limbs_for_bits(modulus_bits);
        let limbs = biguint_to_limbs(&modulus, num_limbs)
            .ok_or_else(|| Error::InvalidParams("modulus does not fit its limbs".to_string()))?;

        // n > 2^(k-1) keeps the parameter strictly below 2^(k+5)
        let redc = barrett_parameter(&modulus, modulus_bits);
        let redc_limbs =
            biguint_to_limbs(&redc, limbs_for_bits(modulus_bits + BARRETT_OVERFLOW_BITS + 1))
                .ok_or_else(|| {
                    Error::InvalidParams("reduction parameter does not fit its limbs".to_string())
                })?;

        Ok(Self {
            modulus,
            modulus_bits,
            limbs,
            redc,
            redc_limbs,
        })
    }

    pub fn from_be_bytes(modulus: &[u8]) -> Result<Self> {
        Self::from_modulus(BigUint::from_bytes_be(modulus))
    }

    /// Loads externally generated parameters, checking that the limbs, the
    /// declared bit length and the reduction parameter all agree.
    pub fn from_limbs(modulus: &[u128], redc: &[u128], modulus_bits: usize) -> Result<Self> {
        if let Some(limb) = modulus.iter().chain(redc).find(|&&l| !limb_in_range(l)) {
            return Err(Error::InvalidParams(format!(
                "limb 0x{:x} exceeds 120 bits",
                limb
            )));
        }

        let expected_limbs = limbs_for_bits(modulus_bits);
        if modulus.len() != expected_limbs {
            return Err(Error::InvalidParams(format!(
                "{}-bit modulus needs {} limbs, got {}",
                modulus_bits,
                expected_limbs,
                modulus.len()
            )));
        }

        let n = limbs_to_biguint(modulus);
        if n.bits() as usize != modulus_bits {
            return Err(Error::InvalidParams(format!(
                "modulus has {} bits, declared {}",
                n.bits(),
                modulus_bits
            )));
        }

        let params = Self::from_modulus(n)?;
        if limbs_to_biguint(redc) != params.redc {
            return Err(Error::InvalidParams(
                "reduction parameter does not match the modulus".to_string(),
            ));
        }

        Ok(params)
    }

    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    pub fn modulus_bits(&self) -> usize {
        self.modulus_bits
    }

    /// Byte length of the modulus, `ceil(bits / 8)`.
    pub fn num_bytes(&self) -> usize {
        (self.modulus_bits + 7) / 8
    }

    pub fn num_limbs(&self) -> usize {
        self.limbs.len()
    }

    pub fn limbs(&self) -> &[u128] {
        &self.limbs
    }

    pub fn redc_limbs(&self) -> &[u128] {
        &self.redc_limbs
    }

    /// `a * b mod n`.
    pub fn mul(&self, a: &BigNum, b: &BigNum) -> BigNum {
        self.reduce(&a.value * &b.value)
    }

    // x < n^2, so the quotient estimate is off by at most a couple of multiples of n
    fn reduce(&self, x: BigUint) -> BigNum {
        let shift = 2 * self.modulus_bits + BARRETT_OVERFLOW_BITS;
        let q = (&x * &self.redc) >> shift;
        let mut r = x - q * &self.modulus;
        while r >= self.modulus {
            r -= &self.modulus;
        }

        BigNum {
            value: r,
            num_limbs: self.num_limbs(),
        }
    }
}
