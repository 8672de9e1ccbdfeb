//! SSH keypair generation

use crate::CourseError;
use rand::rngs::OsRng;
use rsa::pkcs8::{EncodePrivateKey, LineEnding};
use rsa::traits::PublicKeyParts;
use rsa::{BigUint, RsaPrivateKey};
use ssh_key::public::{KeyData, RsaPublicKey};
use ssh_key::{Mpint, PublicKey};

/// RSA modulus size in bits
pub const KEY_BITS: usize = 2048;

/// RSA public exponent
pub const PUBLIC_EXPONENT: u32 = 65537;

/// A user's SSH keypair in text form
#[derive(Debug, Clone)]
pub struct SshKeypair {
    /// Unencrypted PKCS#8 PEM
    pub private_key: String,
    /// OpenSSH authorized_keys line (`ssh-rsa AAAA...`)
    pub public_key: String,
}

/// Generate a fresh RSA keypair
pub fn generate_keypair() -> Result<SshKeypair, CourseError> {
    let mut rng = OsRng;
    let exponent = BigUint::from(PUBLIC_EXPONENT);
    let key = RsaPrivateKey::new_with_exp(&mut rng, KEY_BITS, &exponent)
        .map_err(|e| CourseError::crypto(format!("RSA key generation failed: {}", e)))?;

    let private_key = key
        .to_pkcs8_pem(LineEnding::LF)
        .map_err(|e| CourseError::crypto(format!("PKCS#8 encoding failed: {}", e)))?
        .to_string();

    let public_key = openssh_public_key(&key)?;

    Ok(SshKeypair {
        private_key,
        public_key,
    })
}

fn openssh_public_key(key: &RsaPrivateKey) -> Result<String, CourseError> {
    let encode_err = |e: ssh_key::Error| CourseError::crypto(format!("OpenSSH encoding failed: {}", e));

    let rsa_public = RsaPublicKey {
        e: Mpint::from_positive_bytes(&key.e().to_bytes_be()).map_err(encode_err)?,
        n: Mpint::from_positive_bytes(&key.n().to_bytes_be()).map_err(encode_err)?,
    };

    PublicKey::new(KeyData::Rsa(rsa_public), "")
        .to_openssh()
        .map_err(encode_err)
}
