use log::debug;

use crate::bignum::{BigNum, BigNumParams};
use crate::bytes::reverse;
use crate::error::{Error, Rejection, Result};
use crate::modexp::{pow_mod, PublicExponent};
use crate::{pkcs1, pss, HASH_LEN};

/// Verifies SHA-256 RSA signatures against one public modulus.
///
/// `try_verify_*` report why a signature was rejected. `verify_*` collapse
/// every rejection to `Ok(false)` and only return `Err` for input that is
/// inconsistent with this key, such as a signature with the wrong limb
/// count or a modulus too small for the padding scheme.
#[derive(Clone, Debug)]
pub struct Verifier {
    params: BigNumParams,
}

impl Verifier {
    pub fn new(params: BigNumParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &BigNumParams {
        &self.params
    }

    /// `sig^e mod n` as a big-endian byte string of the modulus length.
    pub fn encoded_message(&self, sig: &BigNum, exponent: PublicExponent) -> Result<Vec<u8>> {
        if sig.num_limbs() != self.params.num_limbs() {
            return Err(Error::InvalidSignature(format!(
                "signature has {} limbs, modulus has {}",
                sig.num_limbs(),
                self.params.num_limbs()
            )));
        }
        if sig.value() >= self.params.modulus() {
            return Err(Rejection::SignatureOutOfRange.into());
        }

        let em = pow_mod(&self.params, sig, exponent);
        let le = em.to_le_bytes(self.params.num_bytes())?;
        Ok(reverse(&le))
    }

    pub fn try_verify_pss(
        &self,
        message_hash: &[u8; HASH_LEN],
        sig: &BigNum,
        exponent: PublicExponent,
    ) -> Result<()> {
        let em = self.encoded_message(sig, exponent)?;
        pss::decode(message_hash, &em, self.params.modulus_bits())
    }

    pub fn try_verify_pkcs1v15(
        &self,
        message_hash: &[u8; HASH_LEN],
        sig: &BigNum,
        exponent: PublicExponent,
    ) -> Result<()> {
        let em = self.encoded_message(sig, exponent)?;
        pkcs1::compare(message_hash, &em)
    }

    pub fn verify_pss(
        &self,
        message_hash: &[u8; HASH_LEN],
        sig: &BigNum,
        exponent: PublicExponent,
    ) -> Result<bool> {
        self.outcome("pss", self.try_verify_pss(message_hash, sig, exponent))
    }

    pub fn verify_pkcs1v15(
        &self,
        message_hash: &[u8; HASH_LEN],
        sig: &BigNum,
        exponent: PublicExponent,
    ) -> Result<bool> {
        self.outcome("pkcs1v15", self.try_verify_pkcs1v15(message_hash, sig, exponent))
    }

    fn outcome(&self, scheme: &str, result: Result<()>) -> Result<bool> {
        match result {
            Ok(()) => Ok(true),
            Err(Error::Rejected(reason)) => {
                debug!(
                    "{}-bit {} signature rejected: {}",
                    self.params.modulus_bits(),
                    scheme,
                    reason
                );
                Ok(false)
            }
            Err(err) => Err(err),
        }
    }
}

#[cfg(test)]
mod test_rsa {
    use super::*;
    use crate::sha256;
    use num_bigint::BigUint;

    // (n, d) pairs from an external key generator
    const KEY_1025_F4: (&str, &str) = (
        "12a66cc1fcb81479349a0bc95ccad83f69d42f9dc2f2a2eeb6834c163e416e7bc7c33596122da74c73102102d5b0f8e17fb98162c22985b50f7e83f66f9842ef2a6e32069e199f35eea3fa7eac989a1ab2dc958bae5b20da7353d6141039cdaf7a0837e56f105b726fe8416f3109fa41ae8f0d27d909d34e8435b83511960a893",
        "11d2b8671f043094b09f731a29b2b4bccd7f794df46b7b285485dfa5f63303ca095b560fa829b713497725851700fca84c2ed526b355893142b06e9e8981629e18bd415bf26962c75d1e7d662d16bcbc751fdbdbe444c471db3113b300e34d203bfa5cc39ac3d0dc6c1d51f8394912e5b1c791e02ed4f1e4c450a2ab52a7c7139",
    );
    const KEY_1024_E3: (&str, &str) = (
        "aa52dd4b73294abe4f194a4c7ec5fc69e85802fd986edb948c88daeeed9140089662e7746cb378958d697df866eec6c0df546f7d02d609bedbfb6d0f5d23acdb538ad460f09c744952d6bfe340002de4e6122bdffcbc614948d87876becc8d531891d79a672fb97e5067eb7be6e276a5897f720c6cb7c4338ea82b39af8637f1",
        "718c9387a21b87298a10dc32ff2ea8469ae55753baf49263085b3c9f490b8005b99744f84877a5b908f0fea599f4848094e2f4fe01e4067f3d5248b4e8c2733bcb43f397794579c725c4337576a89534ce46200ebb8d561709f10bff164a7074c58e4fa7f336982f106618e9b3ac4dd4eb25ae60625e5f6ffec18c505271faab",
    );

    struct Key {
        n: BigUint,
        d: BigUint,
        verifier: Verifier,
    }

    impl Key {
        fn new((n, d): (&str, &str)) -> Self {
            let n = BigUint::parse_bytes(n.as_bytes(), 16).unwrap();
            let d = BigUint::parse_bytes(d.as_bytes(), 16).unwrap();
            let verifier = Verifier::new(BigNumParams::from_modulus(n.clone()).unwrap());
            Self { n, d, verifier }
        }

        fn params(&self) -> &BigNumParams {
            self.verifier.params()
        }

        fn sign(&self, em: &[u8]) -> BigNum {
            let sig = BigUint::from_bytes_be(em).modpow(&self.d, &self.n);
            BigNum::from_biguint(self.params(), sig).unwrap()
        }
    }

    #[test]
    fn pkcs1v15_round_trip() {
        let _ = env_logger::builder().is_test(true).try_init();

        let key = Key::new(KEY_1024_E3);
        let hash = sha256(b"hello world! test#123");
        let em = crate::pkcs1::tests::encode(&hash, key.params().num_bytes());
        let sig = key.sign(&em);

        assert_eq!(
            key.verifier
                .encoded_message(&sig, PublicExponent::Three)
                .unwrap(),
            em
        );
        assert!(key
            .verifier
            .verify_pkcs1v15(&hash, &sig, PublicExponent::Three)
            .unwrap());

        // wrong scheme, wrong exponent, wrong message
        assert!(!key
            .verifier
            .verify_pss(&hash, &sig, PublicExponent::Three)
            .unwrap());
        assert!(!key
            .verifier
            .verify_pkcs1v15(&hash, &sig, PublicExponent::F4)
            .unwrap());
        assert!(!key
            .verifier
            .verify_pkcs1v15(
                &sha256(b"hello world! test#124"),
                &sig,
                PublicExponent::Three
            )
            .unwrap());
    }

    #[test]
    fn pss_round_trip_unaligned_modulus() {
        let _ = env_logger::builder().is_test(true).try_init();

        let key = Key::new(KEY_1025_F4);
        assert_eq!(key.params().modulus_bits(), 1025);

        let hash = sha256(b"Hello World! This is Noir-RSA");
        let em = crate::pss::tests::encode(&hash, &[7u8; 32], 1025);
        let sig = key.sign(&em);

        assert!(key
            .verifier
            .verify_pss(&hash, &sig, PublicExponent::F4)
            .unwrap());
        let err = key
            .verifier
            .try_verify_pss(&hash, &sig, PublicExponent::Three)
            .unwrap_err();
        assert!(err.is_rejection());
    }

    #[test]
    fn signature_from_another_key() {
        let key = Key::new(KEY_1025_F4);
        let other = Key::new(KEY_1024_E3);
        let hash = sha256(b"hello world! test#123");

        // valid for the other key only
        let sig = other.sign(&crate::pkcs1::tests::encode(&hash, 128));
        assert_eq!(sig.num_limbs(), key.params().num_limbs());
        assert!(!key
            .verifier
            .verify_pkcs1v15(&hash, &sig, PublicExponent::F4)
            .unwrap());

        // same limb count but larger than this modulus
        let big = BigNumParams::from_modulus((BigUint::from(1u8) << 1079) + 1u8).unwrap();
        let sig = BigNum::from_biguint(&big, key.n.clone()).unwrap();
        assert!(matches!(
            key.verifier.try_verify_pss(&hash, &sig, PublicExponent::F4),
            Err(Error::Rejected(Rejection::SignatureOutOfRange))
        ));
        assert!(!key
            .verifier
            .verify_pss(&hash, &sig, PublicExponent::F4)
            .unwrap());

        let small = BigNumParams::from_modulus(BigUint::from(65537u32)).unwrap();
        let sig = BigNum::from_biguint(&small, BigUint::from(2u8)).unwrap();
        // different limb count is an input error, not a rejection
        assert!(matches!(
            key.verifier.verify_pkcs1v15(&hash, &sig, PublicExponent::F4),
            Err(Error::InvalidSignature(_))
        ));
    }

    #[test]
    fn small_modulus_is_an_input_error() {
        // 2^479 + 1 is too small for both encodings
        let params = BigNumParams::from_modulus((BigUint::from(1u8) << 479) + 1u8).unwrap();
        let verifier = Verifier::new(params.clone());
        let sig = BigNum::from_biguint(&params, BigUint::from(2u8)).unwrap();
        let hash = sha256(b"small");

        assert!(matches!(
            verifier.verify_pss(&hash, &sig, PublicExponent::F4),
            Err(Error::ModulusTooSmall { mod_bits: 480, .. })
        ));
        assert!(matches!(
            verifier.verify_pkcs1v15(&hash, &sig, PublicExponent::F4),
            Err(Error::EncodedMessageTooShort { len: 60, .. })
        ));
    }
}
