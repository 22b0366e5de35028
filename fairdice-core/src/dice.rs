use crate::{GameError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Face count every die must have. The throw modulus is tied to it.
pub const FACES_PER_DIE: usize = 6;

/// Minimum number of dice configurations for a playable set.
pub const MIN_DICE: usize = 3;

/// An ordered, fixed-length sequence of integer face values.
///
/// Face values need not be distinct or consecutive. Immutable once
/// validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Die {
    faces: Vec<i64>,
}

impl Die {
    pub fn new(faces: Vec<i64>) -> Result<Self> {
        if faces.len() != FACES_PER_DIE {
            return Err(GameError::validation(format!(
                "each die must contain exactly {} comma-separated integers, got {}",
                FACES_PER_DIE,
                faces.len()
            )));
        }
        Ok(Self { faces })
    }

    pub fn faces(&self) -> &[i64] {
        &self.faces
    }

    pub fn len(&self) -> usize {
        self.faces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    pub fn face(&self, index: usize) -> Option<i64> {
        self.faces.get(index).copied()
    }
}

impl fmt::Display for Die {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for face in &self.faces {
            if !first {
                write!(f, ",")?;
            }
            write!(f, "{face}")?;
            first = false;
        }
        Ok(())
    }
}

impl FromStr for Die {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        let mut faces = Vec::new();
        for token in s.split(',') {
            let token = token.trim();
            let value = token.parse::<i64>().map_err(|_| {
                GameError::validation(format!(
                    "all face values must be integers, invalid value: \"{token}\""
                ))
            })?;
            faces.push(value);
        }
        Die::new(faces)
    }
}

/// A validated, read-only collection of dice, indexable by position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceSet {
    dice: Vec<Die>,
}

impl DiceSet {
    pub fn new(dice: Vec<Die>) -> Result<Self> {
        if dice.len() < MIN_DICE {
            return Err(GameError::validation(format!(
                "at least {} dice configurations are required, got {}",
                MIN_DICE,
                dice.len()
            )));
        }
        Ok(Self { dice })
    }

    /// Parse raw dice configurations like `"1,2,3,4,5,6"`.
    ///
    /// The first malformed argument aborts with its position so the
    /// caller can point at the offending input.
    pub fn parse<I, S>(configs: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dice = Vec::new();
        for (i, config) in configs.into_iter().enumerate() {
            let die = config.as_ref().parse::<Die>().map_err(|err| match err {
                GameError::Validation(msg) => {
                    GameError::validation(format!("argument {}: {}", i + 1, msg))
                }
                other => other,
            })?;
            dice.push(die);
        }
        Self::new(dice)
    }

    pub fn len(&self) -> usize {
        self.dice.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dice.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Die> {
        self.dice.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Die> {
        self.dice.iter()
    }
}

impl std::ops::Index<usize> for DiceSet {
    type Output = Die;

    fn index(&self, index: usize) -> &Die {
        &self.dice[index]
    }
}
