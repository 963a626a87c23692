use thiserror::Error;

/// Why a single availability token could not be turned into an interval.
///
/// These never escape cell-level parsing: a bad token is dropped, not reported.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SlotParseError {
    #[error("empty slot")]
    Empty,

    #[error("missing '-' separator in {0:?}")]
    MissingSeparator(String),

    #[error("expected two hours in {token:?}, found {found} parts")]
    WrongPartCount { token: String, found: usize },

    #[error("missing 'h' after hour in {0:?}")]
    MissingHourMarker(String),

    #[error("not an hour: {0:?}")]
    NotAnHour(String),

    #[error("hour {0} is past 24h")]
    HourOutOfRange(u32),

    #[error("empty range {start}h-{end}h")]
    EmptyRange { start: u8, end: u8 },
}

#[derive(Error, Debug)]
pub enum RehearsalError {
    #[error("Unknown piece: {0}")]
    UnknownPiece(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(#[from] eyre::Report),
}

pub type RehearsalResult<T> = Result<T, RehearsalError>;
