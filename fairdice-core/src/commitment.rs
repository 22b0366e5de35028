use hmac::{Hmac, Mac};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use sha3::Sha3_256;
use std::fmt;

type HmacSha3 = Hmac<Sha3_256>;

/// Length of the keyed-hash output in bytes.
pub const DIGEST_LEN: usize = 32;

/// Default secret key length in bytes.
pub const DEFAULT_KEY_LEN: usize = 32;

/// The public half of a commitment: HMAC-SHA3-256 over the decimal
/// string of the secret value, keyed by the secret key.
pub type Digest = [u8; DIGEST_LEN];

/// A secret value bound to a verifiable digest.
///
/// The digest is disclosed immediately (commit phase); the secret value
/// and key only after the counterpart's contribution is fixed (reveal
/// phase). Publishing them in the opposite order voids the
/// unbiasability guarantee.
#[derive(Clone)]
pub struct Commitment {
    secret_value: u64,
    secret_key: Vec<u8>,
    digest: Digest,
}

impl Commitment {
    /// Commit to `secret_value`, drawing `key_len` bytes of key
    /// material from `rng`.
    pub fn new(secret_value: u64, key_len: usize, rng: &mut (impl RngCore + CryptoRng)) -> Self {
        let mut secret_key = vec![0u8; key_len];
        rng.fill_bytes(&mut secret_key);
        let digest = keyed_digest(secret_value, &secret_key);
        Self {
            secret_value,
            secret_key,
            digest,
        }
    }

    /// Commit with the default key length and the OS entropy source.
    pub fn generate(secret_value: u64) -> Self {
        Self::new(secret_value, DEFAULT_KEY_LEN, &mut OsRng)
    }

    pub fn digest(&self) -> &Digest {
        &self.digest
    }

    /// Disclose the hidden fields. Consumes the commitment so a secret
    /// cannot be re-revealed with different material.
    pub fn reveal(self) -> RevealedSecret {
        RevealedSecret {
            value: self.secret_value,
            key: self.secret_key,
            digest: self.digest,
        }
    }
}

// Keep the secret out of debug output.
impl fmt::Debug for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Commitment")
            .field("digest", &hex::encode(self.digest))
            .finish()
    }
}

/// Everything a verifier needs to re-run the keyed hash.
#[derive(Debug, Clone)]
pub struct RevealedSecret {
    pub value: u64,
    pub key: Vec<u8>,
    pub digest: Digest,
}

impl RevealedSecret {
    pub fn verify(&self) -> bool {
        verify(self.value, &self.key, &self.digest)
    }
}

fn keyed_digest(secret_value: u64, secret_key: &[u8]) -> Digest {
    let mut mac = HmacSha3::new_from_slice(secret_key).expect("HMAC accepts any key length");
    mac.update(secret_value.to_string().as_bytes());
    let mut digest = [0u8; DIGEST_LEN];
    digest.copy_from_slice(&mac.finalize().into_bytes());
    digest
}

/// Recompute the keyed hash and compare against `digest` in constant
/// time.
pub fn verify(secret_value: u64, secret_key: &[u8], digest: &Digest) -> bool {
    let mut mac = HmacSha3::new_from_slice(secret_key).expect("HMAC accepts any key length");
    mac.update(secret_value.to_string().as_bytes());
    mac.verify_slice(digest).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commitment_round_trip() {
        let commitment = Commitment::generate(4);
        let digest = *commitment.digest();
        let revealed = commitment.reveal();

        assert_eq!(revealed.value, 4);
        assert_eq!(revealed.key.len(), DEFAULT_KEY_LEN);
        assert_eq!(revealed.digest, digest);
        assert!(revealed.verify());
        assert!(verify(revealed.value, &revealed.key, &digest));
    }

    #[test]
    fn test_wrong_value_rejected() {
        let revealed = Commitment::generate(3).reveal();
        assert!(!verify(revealed.value + 1, &revealed.key, &revealed.digest));
    }

    #[test]
    fn test_flipped_key_bit_rejected() {
        let revealed = Commitment::generate(3).reveal();
        let mut key = revealed.key.clone();
        key[0] ^= 0x01;
        assert!(!verify(revealed.value, &key, &revealed.digest));
    }

    #[test]
    fn test_flipped_digest_bit_rejected() {
        let revealed = Commitment::generate(3).reveal();
        let mut digest = revealed.digest;
        digest[31] ^= 0x80;
        assert!(!verify(revealed.value, &revealed.key, &digest));
    }

    #[test]
    fn test_fresh_keys_give_fresh_digests() {
        let a = Commitment::generate(0);
        let b = Commitment::generate(0);
        assert_ne!(a.digest(), b.digest());
    }
}
