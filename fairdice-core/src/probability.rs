//! Pairwise win-probability computation over a dice set.

use crate::dice::{DiceSet, Die};
use serde::{Deserialize, Serialize};

/// Outcome distribution for one ordered pair of dice.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WinProbability {
    pub win: f64,
    pub lose: f64,
    pub draw: f64,
}

/// Exhaustive ordered-pair comparison of `a` against `b`.
///
/// Counts every `(face_a, face_b)` pair and normalizes by
/// `len(a) * len(b)`; the three probabilities sum to 1 for any two
/// non-empty dice.
pub fn win_probability(a: &Die, b: &Die) -> WinProbability {
    let mut wins = 0u64;
    let mut losses = 0u64;
    let mut draws = 0u64;

    for &face_a in a.faces() {
        for &face_b in b.faces() {
            if face_a > face_b {
                wins += 1;
            } else if face_a < face_b {
                losses += 1;
            } else {
                draws += 1;
            }
        }
    }

    let total = (a.len() * b.len()) as f64;
    WinProbability {
        win: wins as f64 / total,
        lose: losses as f64 / total,
        draw: draws as f64 / total,
    }
}

/// Full pairwise matrix across the set, diagonal included.
pub fn probability_matrix(dice: &DiceSet) -> Vec<Vec<WinProbability>> {
    dice.iter()
        .map(|row| dice.iter().map(|col| win_probability(row, col)).collect())
        .collect()
}
