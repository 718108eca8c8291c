use rsa::pkcs1v15;
use rsa::pss::BlindedSigningKey;
use rsa::sha2::Sha256;
use rsa::signature::{RandomizedSigner, SignatureEncoding, Signer};
use rsa::traits::PublicKeyParts;
use rsa::{BigUint, RsaPrivateKey};

#[derive(Clone, Copy, Debug)]
pub enum Scheme {
    Pkcs1v15,
    Pss,
}

/// Signs `data` with a fresh key, returning the big-endian modulus and signature.
pub fn sign(data: &[u8], bits: usize, e: u32, scheme: Scheme) -> (Vec<u8>, Vec<u8>) {
    let mut rng = rand_core::OsRng;

    let private_key = RsaPrivateKey::new_with_exp(&mut rng, bits, &BigUint::from(e))
        .expect("failed to generate a key");
    let pk = private_key.to_public_key();

    let sig = match scheme {
        Scheme::Pkcs1v15 => pkcs1v15::SigningKey::<Sha256>::new(private_key)
            .sign(data)
            .to_vec(),
        Scheme::Pss => BlindedSigningKey::<Sha256>::new(private_key)
            .sign_with_rng(&mut rng, data)
            .to_vec(),
    };

    (pk.n().to_bytes_be(), sig)
}
