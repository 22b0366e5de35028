//! Provably fair dice duel between two mutually distrusting parties.
//!
//! Neither side trusts the other to generate randomness honestly, so
//! every random decision runs a commit-reveal protocol: the automated
//! party publishes an HMAC-SHA3-256 digest of its secret before the
//! interactive party contributes, then reveals the secret and key so
//! the result can be verified after the fact.

pub mod combiner;
pub mod commitment;
pub mod dice;
pub mod error;
pub mod pool;
pub mod probability;
pub mod round;

pub use combiner::{combine, secret_contribution, CoinFlip, CoinFlipResult};
pub use commitment::{verify, Commitment, Digest, RevealedSecret};
pub use dice::{DiceSet, Die, FACES_PER_DIE, MIN_DICE};
pub use error::{GameError, Result};
pub use pool::DicePool;
pub use probability::{probability_matrix, win_probability, WinProbability};
pub use round::{
    Assignment, CommitPurpose, Counterpart, NullReporter, Party, Reporter, Round, RoundEvent,
    RoundOutcome, RoundState, Throw,
};
