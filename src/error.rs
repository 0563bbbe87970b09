use thiserror::Error;

/// Input string does not match the `H:MM[ AM|PM]` grammar.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("missing ':' separator in {0:?}")]
    MissingSeparator(String),

    #[error("non-numeric component {0:?}")]
    InvalidNumber(String),

    #[error("missing AM/PM in clock time {0:?}")]
    MissingMeridiem(String),

    #[error("invalid meridiem {0:?}, expected AM or PM")]
    InvalidMeridiem(String),

    #[error("hour {0} out of range 1-12")]
    HourOutOfRange(u32),

    #[error("minute {0} out of range 0-59")]
    MinuteOutOfRange(u32),
}

/// Weekday name outside the canonical seven.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown weekday {0:?}")]
pub struct LookupError(pub String);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Lookup(#[from] LookupError),
}
