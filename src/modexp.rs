use log::trace;
use num_bigint::BigUint;

use crate::bignum::{BigNum, BigNumParams};
use crate::error::Error;

/// The public exponents verification supports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PublicExponent {
    Three,
    /// 65537, the fourth Fermat number.
    F4,
}

impl PublicExponent {
    pub const fn value(self) -> u32 {
        match self {
            PublicExponent::Three => 3,
            PublicExponent::F4 => 65537,
        }
    }
}

impl TryFrom<u32> for PublicExponent {
    type Error = Error;

    fn try_from(e: u32) -> Result<Self, Error> {
        match e {
            3 => Ok(PublicExponent::Three),
            65537 => Ok(PublicExponent::F4),
            other => Err(Error::InvalidExponent(other as u64)),
        }
    }
}

impl TryFrom<&BigUint> for PublicExponent {
    type Error = Error;

    fn try_from(e: &BigUint) -> Result<Self, Error> {
        match e.to_u64_digits().as_slice() {
            [] => Err(Error::InvalidExponent(0)),
            &[e] => u32::try_from(e)
                .map_err(|_| Error::InvalidExponent(e))
                .and_then(PublicExponent::try_from),
            _ => Err(Error::InvalidExponent(u64::MAX)),
        }
    }
}

/// `sig^e mod n` with a fixed ladder for each supported exponent.
pub fn pow_mod(params: &BigNumParams, sig: &BigNum, exponent: PublicExponent) -> BigNum {
    trace!(
        "exponentiating {}-bit signature with e = {}",
        params.modulus_bits(),
        exponent.value()
    );

    let sq = params.mul(sig, sig);
    match exponent {
        PublicExponent::Three => params.mul(&sq, sig),
        PublicExponent::F4 => {
            // sig^(2^16) after 16 squarings in total
            let mut r = sq;
            for _ in 1..16 {
                r = params.mul(&r, &r);
            }
            params.mul(&r, sig)
        }
    }
}
