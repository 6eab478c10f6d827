use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rejections are surfaced to the caller; a rejected command never
/// silently passes for an applied one.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum CommandError {
    #[error("Invalid amount (must be positive)")]
    InvalidAmount,
    #[error("Insufficient funds for withdrawal")]
    InsufficientFunds,
    #[error("A loan is already outstanding")]
    LoanOutstanding,
    #[error("Unknown command type: {0}")]
    UnknownCommandType(String),
}

/// Pipeline failures. Business rejections travel as `CommandError` and
/// I/O failures as `ConversionError`; only the engine's own invariants
/// live here.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum EngineError {
    #[error("No events produced by command handler")]
    NoEvents,
    #[error("State transition failed - event could not be applied")]
    StateTransitionFailed,
}

/// Failures of the external currency lookup. All of these terminate the
/// in-flight conversion and clear the loading flag.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum ConversionError {
    #[error("Currency service unavailable: {0}")]
    Unavailable(String),
    #[error("Currency lookup timed out")]
    Timeout,
    #[error("Malformed currency service response: {0}")]
    MalformedResponse(String),
    #[error("Unsupported currency: {0}")]
    UnsupportedCurrency(String),
}

#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum LedgerError {
    Command(CommandError),
    Engine(EngineError),
    Conversion(ConversionError),
}

impl Display for LedgerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            LedgerError::Command(e) => e.fmt(f),
            LedgerError::Engine(e) => e.fmt(f),
            LedgerError::Conversion(e) => e.fmt(f),
        }
    }
}
