use crate::dice::{DiceSet, Die};
use crate::{GameError, Result};
use rand::{CryptoRng, Rng, RngCore};

/// The dice still unclaimed this round.
///
/// Entries keep their original `DiceSet` indices; claiming never
/// renumbers the survivors, so a claimed index simply stops being
/// available.
#[derive(Debug, Clone)]
pub struct DicePool {
    entries: Vec<(usize, Die)>,
}

impl DicePool {
    pub fn new(dice: &DiceSet) -> Self {
        Self {
            entries: dice.iter().cloned().enumerate().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Original indices of the dice still available, in order.
    pub fn available(&self) -> Vec<usize> {
        self.entries.iter().map(|(index, _)| *index).collect()
    }

    pub fn die(&self, index: usize) -> Option<&Die> {
        self.entries
            .iter()
            .find(|(i, _)| *i == index)
            .map(|(_, die)| die)
    }

    /// Remove and return the die at `index`.
    ///
    /// An absent index is `OutOfRangeSelection`; an empty pool is
    /// `PoolExhausted` (a logic defect, not a user error).
    pub fn claim(&mut self, index: usize) -> Result<Die> {
        if self.entries.is_empty() {
            return Err(GameError::PoolExhausted);
        }
        let position = self
            .entries
            .iter()
            .position(|(i, _)| *i == index)
            .ok_or_else(|| {
                GameError::out_of_range(index as u64, format!("available dice {:?}", self.available()))
            })?;
        Ok(self.entries.remove(position).1)
    }

    /// Claim a uniformly random available die via the secure source.
    pub fn random_claim(&mut self, rng: &mut (impl RngCore + CryptoRng)) -> Result<(usize, Die)> {
        if self.entries.is_empty() {
            return Err(GameError::PoolExhausted);
        }
        let position = rng.gen_range(0..self.entries.len());
        let (index, die) = self.entries.remove(position);
        Ok((index, die))
    }
}
