//! Round orchestration: first-mover decision, dice selection, throws,
//! and outcome comparison, in strict forward sequence.

use crate::combiner::{self, CoinFlip};
use crate::commitment::{Digest, RevealedSecret};
use crate::dice::{DiceSet, Die};
use crate::pool::DicePool;
use crate::{GameError, Result};
use rand::rngs::OsRng;
use serde::{Deserialize, Serialize};

/// The two sides of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Party {
    Player,
    Computer,
}

impl Party {
    pub fn other(self) -> Party {
        match self {
            Party::Player => Party::Computer,
            Party::Computer => Party::Player,
        }
    }
}

/// Forward-only round phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundState {
    DeterminingFirstMover,
    SelectingDice,
    AwaitingThrows,
    Resolved,
}

/// What a commitment was published for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitPurpose {
    FirstMover,
    Throw(Party),
}

/// The interactive contribution channel.
///
/// Each call returns exactly one value of the requested type; values
/// outside their domain abort the round with `OutOfRangeSelection`.
/// Retry loops belong to the caller, not the core.
pub trait Counterpart {
    /// A guess of the committed coin bit, expected in `{0, 1}`.
    fn guess_coin(&mut self) -> Result<u64>;

    /// A die selection from the currently available indices.
    fn choose_die(&mut self, available: &[usize]) -> Result<usize>;

    /// An open contribution in `[0, modulus)`.
    fn modulo_contribution(&mut self, modulus: u64) -> Result<u64>;
}

/// Observability data emitted as the round progresses.
///
/// Everything an external verifier needs passes through here: each
/// disclosed digest, each revealed secret and key, each combined
/// result. These are data, not control; round correctness does not
/// depend on anyone listening.
#[derive(Debug, Clone)]
pub enum RoundEvent {
    CommitmentPublished {
        purpose: CommitPurpose,
        modulus: u64,
        digest: Digest,
    },
    SecretRevealed {
        purpose: CommitPurpose,
        revealed: RevealedSecret,
    },
    FirstMoverDecided {
        guess: u64,
        first_mover: Party,
    },
    DieClaimed {
        party: Party,
        die_index: usize,
        die: Die,
    },
    ThrowResolved {
        party: Party,
        secret: u64,
        open: u64,
        modulus: u64,
        result: u64,
        face: i64,
    },
}

pub trait Reporter {
    fn report(&mut self, event: RoundEvent);
}

/// Reporter that drops every event. Handy for tests.
#[derive(Debug, Default)]
pub struct NullReporter;

impl Reporter for NullReporter {
    fn report(&mut self, _event: RoundEvent) {}
}

/// One party's claimed die, set once per round.
#[derive(Debug, Clone)]
pub struct Assignment {
    pub party: Party,
    pub die_index: usize,
    pub die: Die,
}

/// One party's resolved throw.
#[derive(Debug, Clone)]
pub struct Throw {
    pub party: Party,
    pub die_index: usize,
    pub face_index: u64,
    pub face: i64,
}

/// Terminal result of a round. `winner` is `None` on a draw.
#[derive(Debug, Clone)]
pub struct RoundOutcome {
    pub first_mover: Party,
    pub winner: Option<Party>,
    pub player: Throw,
    pub computer: Throw,
}

/// One round of the duel. Owns the working pool derived from the dice
/// set; single-threaded, no state survives the round.
pub struct Round<'a> {
    dice: &'a DiceSet,
    pool: DicePool,
    state: RoundState,
}

impl<'a> Round<'a> {
    pub fn new(dice: &'a DiceSet) -> Self {
        Self {
            dice,
            pool: DicePool::new(dice),
            state: RoundState::DeterminingFirstMover,
        }
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    pub fn dice(&self) -> &DiceSet {
        self.dice
    }

    /// Play the round to completion.
    ///
    /// Walks `DeterminingFirstMover` → `SelectingDice` →
    /// `AwaitingThrows` → `Resolved`. Any out-of-range counterpart
    /// value aborts with the error; nothing beyond the already
    /// published digest is disclosed on abort.
    pub fn play(
        mut self,
        counterpart: &mut impl Counterpart,
        reporter: &mut impl Reporter,
    ) -> Result<RoundOutcome> {
        let first_mover = self.determine_first_mover(counterpart, reporter)?;

        self.state = RoundState::SelectingDice;
        let (player, computer) = self.select_dice(first_mover, counterpart, reporter)?;

        self.state = RoundState::AwaitingThrows;
        let (player_throw, computer_throw) = match first_mover {
            Party::Player => {
                let p = self.throw(&player, counterpart, reporter)?;
                let c = self.throw(&computer, counterpart, reporter)?;
                (p, c)
            }
            Party::Computer => {
                let c = self.throw(&computer, counterpart, reporter)?;
                let p = self.throw(&player, counterpart, reporter)?;
                (p, c)
            }
        };

        self.state = RoundState::Resolved;
        let winner = if player_throw.face > computer_throw.face {
            Some(Party::Player)
        } else if player_throw.face < computer_throw.face {
            Some(Party::Computer)
        } else {
            None
        };

        tracing::info!(?winner, "round resolved");
        Ok(RoundOutcome {
            first_mover,
            winner,
            player: player_throw,
            computer: computer_throw,
        })
    }

    /// Commitment-based coin flip; the player guesses and moves first
    /// on a match.
    fn determine_first_mover(
        &mut self,
        counterpart: &mut impl Counterpart,
        reporter: &mut impl Reporter,
    ) -> Result<Party> {
        let flip = CoinFlip::new(&mut OsRng);
        reporter.report(RoundEvent::CommitmentPublished {
            purpose: CommitPurpose::FirstMover,
            modulus: 2,
            digest: *flip.digest(),
        });

        let guess = counterpart.guess_coin()?;
        let result = flip.resolve(guess)?;
        if !result.revealed.verify() {
            return Err(GameError::VerificationMismatch);
        }
        reporter.report(RoundEvent::SecretRevealed {
            purpose: CommitPurpose::FirstMover,
            revealed: result.revealed.clone(),
        });

        let first_mover = if result.guesser_wins {
            Party::Player
        } else {
            Party::Computer
        };
        tracing::info!(guess, secret = result.revealed.value, ?first_mover, "first mover decided");
        reporter.report(RoundEvent::FirstMoverDecided { guess, first_mover });
        Ok(first_mover)
    }

    /// The first mover claims, then the other takes from the
    /// remainder. The computer always claims uniformly at random.
    fn select_dice(
        &mut self,
        first_mover: Party,
        counterpart: &mut impl Counterpart,
        reporter: &mut impl Reporter,
    ) -> Result<(Assignment, Assignment)> {
        match first_mover {
            Party::Player => {
                let player = self.player_claim(counterpart, reporter)?;
                let computer = self.computer_claim(reporter)?;
                Ok((player, computer))
            }
            Party::Computer => {
                let computer = self.computer_claim(reporter)?;
                let player = self.player_claim(counterpart, reporter)?;
                Ok((player, computer))
            }
        }
    }

    fn player_claim(
        &mut self,
        counterpart: &mut impl Counterpart,
        reporter: &mut impl Reporter,
    ) -> Result<Assignment> {
        let available = self.pool.available();
        let die_index = counterpart.choose_die(&available)?;
        let die = self.pool.claim(die_index)?;
        tracing::debug!(die_index, "player claimed die");
        reporter.report(RoundEvent::DieClaimed {
            party: Party::Player,
            die_index,
            die: die.clone(),
        });
        Ok(Assignment {
            party: Party::Player,
            die_index,
            die,
        })
    }

    fn computer_claim(&mut self, reporter: &mut impl Reporter) -> Result<Assignment> {
        let (die_index, die) = self.pool.random_claim(&mut OsRng)?;
        tracing::debug!(die_index, "computer claimed die");
        reporter.report(RoundEvent::DieClaimed {
            party: Party::Computer,
            die_index,
            die: die.clone(),
        });
        Ok(Assignment {
            party: Party::Computer,
            die_index,
            die,
        })
    }

    /// One full commit/contribute/reveal cycle, yielding the face for
    /// `assignment`'s die.
    fn throw(
        &mut self,
        assignment: &Assignment,
        counterpart: &mut impl Counterpart,
        reporter: &mut impl Reporter,
    ) -> Result<Throw> {
        let modulus = assignment.die.len() as u64;
        let contribution = combiner::secret_contribution(modulus, &mut OsRng)?;
        reporter.report(RoundEvent::CommitmentPublished {
            purpose: CommitPurpose::Throw(assignment.party),
            modulus,
            digest: *contribution.digest(),
        });

        let open = counterpart.modulo_contribution(modulus)?;
        // Reject before revealing: an abort must not disclose the
        // secret once only the digest is public.
        if open >= modulus {
            return Err(GameError::out_of_range(open, format!("0..{modulus}")));
        }

        let revealed = contribution.reveal();
        if !revealed.verify() {
            return Err(GameError::VerificationMismatch);
        }
        reporter.report(RoundEvent::SecretRevealed {
            purpose: CommitPurpose::Throw(assignment.party),
            revealed: revealed.clone(),
        });

        let result = combiner::combine(revealed.value, open, modulus)?;
        let face = assignment
            .die
            .face(result as usize)
            .ok_or_else(|| GameError::out_of_range(result, format!("0..{}", assignment.die.len())))?;

        tracing::info!(party = ?assignment.party, secret = revealed.value, open, result, face, "throw resolved");
        reporter.report(RoundEvent::ThrowResolved {
            party: assignment.party,
            secret: revealed.value,
            open,
            modulus,
            result,
            face,
        });

        Ok(Throw {
            party: assignment.party,
            die_index: assignment.die_index,
            face_index: result,
            face,
        })
    }
}
