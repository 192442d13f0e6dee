use strum_macros::Display;
use thiserror::Error;

/// Which grammar field a rejected symbol was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum SymbolKind {
    ActionLetter,
    DifficultyModifier,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrickError {
    #[error("Unrecognized {kind} symbol: '{symbol}'")]
    UnrecognizedSymbol { kind: SymbolKind, symbol: char },

    /// Digit run does not fit in a `u64` (above 18446744073709551615).
    #[error("Repetition count out of range: {0}")]
    RepetitionOutOfRange(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RideLogError {
    #[error("Signature cannot be null or empty")]
    Empty,

    #[error("Invalid signature format. Expected format: DDMMYYYY-START-END-ROUTE")]
    Format,

    #[error("Invalid date format. Expected DDMMYYYY (8 digits), got '{0}'")]
    DateLength(String),

    #[error("Invalid date format. Could not parse date from '{0}'")]
    Date(String),

    #[error("{0} cannot be empty")]
    MissingField(&'static str),
}

#[derive(Error, Debug)]
pub enum BikeShopError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Trick Signature Error: {0}")]
    Trick(#[from] TrickError),

    #[error("Ride Log Error: {0}")]
    RideLog(#[from] RideLogError),

    #[error("Configuration Error: {0}")]
    Config(String),
}

pub type BsResult<T> = Result<T, BikeShopError>;
