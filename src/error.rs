use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PredictorError {
    #[error("grid size must be at least 1")]
    InvalidGridSize,
    #[error("cannot place {bombs} bombs on a grid of {cells} cells")]
    TooManyBombs { bombs: usize, cells: usize },
    #[error("grid size {0} is too large")]
    GridTooLarge(usize),
}

/// A rejected form field. The display text doubles as the re-prompt.
#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum FieldError {
    #[error("Please enter a valid number for bomb count:")]
    BombsNotANumber,
    #[error("Invalid bomb count. Enter a number between 1 and 24:")]
    BombsOutOfRange,
    #[error("Please enter a valid Active Client Seed:")]
    EmptyClientSeed,
    #[error("Please enter a valid Active Server Seed:")]
    EmptyServerSeed,
    #[error("Please enter a valid number for bet amount:")]
    BetNotANumber,
    #[error("Bet amount must be a positive number. Please enter again:")]
    BetNotPositive,
}

pub type Result<T> = std::result::Result<T, PredictorError>;
