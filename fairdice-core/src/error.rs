use thiserror::Error;

pub type Result<T> = std::result::Result<T, GameError>;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("Invalid dice configuration: {0}")]
    Validation(String),

    #[error("Selection {value} is outside the valid domain {domain}")]
    OutOfRangeSelection { value: u64, domain: String },

    #[error("Dice pool is exhausted")]
    PoolExhausted,

    #[error("Revealed secret does not match the published digest")]
    VerificationMismatch,

    #[error("Counterpart channel error: {0}")]
    Channel(String),
}

impl GameError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn out_of_range(value: u64, domain: impl Into<String>) -> Self {
        Self::OutOfRangeSelection {
            value,
            domain: domain.into(),
        }
    }

    pub fn channel(msg: impl Into<String>) -> Self {
        Self::Channel(msg.into())
    }
}
