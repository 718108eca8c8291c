/*!
RSA signature verification over SHA-256 digests, for PKCS#1 v1.5 and PSS
(RFC 8017) encoded messages.

Moduli of any bit length are supported, including ones that are not a
multiple of eight bits (a 1025-bit modulus yields a 129-byte signature but a
128-byte PSS encoded message). Public exponents are limited to 3 and 65537,
each of which gets a fixed multiplication ladder.

```no_run
use rsa_sigverify::{BigNum, BigNumParams, PublicExponent, Verifier};

fn check(modulus: &[u8], signature: &[u8], message: &[u8]) -> rsa_sigverify::Result<bool> {
    let params = BigNumParams::from_be_bytes(modulus)?;
    let sig = BigNum::from_be_bytes(&params, signature)?;
    let verifier = Verifier::new(params);
    verifier.verify_pss(&rsa_sigverify::sha256(message), &sig, PublicExponent::F4)
}
```

Decoding branches on the encoded message. Everything it inspects is derived
from public values, so no constant-time guarantees are attempted beyond
what the arithmetic offers.
*/

pub mod bignum;
pub mod bytes;
mod error;
pub mod mgf1;
pub mod modexp;
pub mod pkcs1;
pub mod pss;
pub mod rsa;

use sha2::{Digest, Sha256};

pub use crate::bignum::{BigNum, BigNumParams};
pub use crate::error::{Error, Rejection, Result};
pub use crate::modexp::PublicExponent;
pub use crate::rsa::Verifier;

/// SHA-256 output length.
pub const HASH_LEN: usize = 32;
/// PSS salt length, always equal to the hash length here.
pub const SALT_LEN: usize = 32;

pub fn sha256(data: &[u8]) -> [u8; HASH_LEN] {
    Sha256::digest(data).into()
}
