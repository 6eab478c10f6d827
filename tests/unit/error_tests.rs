use ledger::domain::*;

#[test]
fn test_command_errors_display() {
    assert_eq!(
        CommandError::InvalidAmount.to_string(),
        "Invalid amount (must be positive)"
    );
    assert_eq!(
        CommandError::LoanOutstanding.to_string(),
        "A loan is already outstanding"
    );
    assert_eq!(
        CommandError::UnknownCommandType("transfer".to_string()).to_string(),
        "Unknown command type: transfer"
    );
}

#[test]
fn test_engine_errors_display() {
    assert_eq!(
        EngineError::NoEvents.to_string(),
        "No events produced by command handler"
    );
    assert_eq!(
        EngineError::StateTransitionFailed.to_string(),
        "State transition failed - event could not be applied"
    );
}

#[test]
fn test_ledger_error_displays_through() {
    let error = LedgerError::Conversion(ConversionError::Timeout);
    assert_eq!(error.to_string(), "Currency lookup timed out");

    let error = LedgerError::Command(CommandError::InsufficientFunds);
    assert_eq!(error.to_string(), "Insufficient funds for withdrawal");

    let error = LedgerError::Engine(EngineError::NoEvents);
    assert_eq!(error.to_string(), "No events produced by command handler");
}
