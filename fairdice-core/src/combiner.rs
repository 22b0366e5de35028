//! Joint random value generation from one secret and one open
//! contribution.
//!
//! If at least one of the two inputs is uniform over `[0, modulus)` and
//! independent of the other, the combined result is uniform regardless
//! of how the other party chooses its input.

use crate::commitment::{Commitment, Digest, RevealedSecret, DEFAULT_KEY_LEN};
use crate::{GameError, Result};
use rand::rngs::OsRng;
use rand::{CryptoRng, Rng, RngCore};

/// Draw a uniform secret over `[0, modulus)` and commit to it.
///
/// The returned commitment's digest is what gets disclosed first; the
/// value stays hidden until `reveal`.
pub fn secret_contribution(modulus: u64, rng: &mut (impl RngCore + CryptoRng)) -> Result<Commitment> {
    if modulus == 0 {
        return Err(GameError::validation("modulus must be at least 1"));
    }
    let value = rng.gen_range(0..modulus);
    Ok(Commitment::new(value, DEFAULT_KEY_LEN, rng))
}

/// `(secret + open) mod modulus`.
///
/// `open` must already be in `[0, modulus)`; the committing party's
/// secret is guaranteed in range by construction.
pub fn combine(secret: u64, open: u64, modulus: u64) -> Result<u64> {
    if modulus == 0 {
        return Err(GameError::validation("modulus must be at least 1"));
    }
    if open >= modulus {
        return Err(GameError::out_of_range(open, format!("0..{modulus}")));
    }
    debug_assert!(secret < modulus);
    Ok((secret + open) % modulus)
}

/// Commitment-based fair coin flip with a guesser.
///
/// This is the binary-decision instantiation: the open party submits a
/// guess of the secret bit and wins on equality. Distinct from the
/// summation rule in [`combine`].
#[derive(Debug)]
pub struct CoinFlip {
    commitment: Commitment,
}

impl CoinFlip {
    pub fn new(rng: &mut (impl RngCore + CryptoRng)) -> Self {
        let secret = rng.gen_range(0..2u64);
        Self {
            commitment: Commitment::new(secret, DEFAULT_KEY_LEN, rng),
        }
    }

    pub fn generate() -> Self {
        Self::new(&mut OsRng)
    }

    pub fn digest(&self) -> &Digest {
        self.commitment.digest()
    }

    /// Resolve against the counterpart's guess, revealing the secret.
    ///
    /// Must only be called once the guess is fixed; the guess is
    /// validated before anything is disclosed.
    pub fn resolve(self, guess: u64) -> Result<CoinFlipResult> {
        if guess > 1 {
            return Err(GameError::out_of_range(guess, "0..2"));
        }
        let revealed = self.commitment.reveal();
        Ok(CoinFlipResult {
            guess,
            guesser_wins: guess == revealed.value,
            revealed,
        })
    }
}

#[derive(Debug, Clone)]
pub struct CoinFlipResult {
    pub guess: u64,
    pub guesser_wins: bool,
    pub revealed: RevealedSecret,
}
