use ledger::domain::*;
use ledger::port::EventHandler;

#[test]
fn test_conversion_started_raises_loading_only() {
    let event = ConversionStarted {
        amount: 100.0,
        currency: "EUR".to_string(),
    };
    let state = AccountState {
        balance: 50.0,
        loan: 200.0,
        loan_purpose: "boat".to_string(),
        is_loading: false,
    };

    let new_state = event.apply(&state).unwrap();

    assert!(new_state.is_loading);
    assert_eq!(new_state.balance, 50.0);
    assert_eq!(new_state.loan, 200.0);
    assert_eq!(new_state.loan_purpose, "boat");
}

#[test]
fn test_conversion_aborted_clears_loading_only() {
    let event = ConversionAborted {
        reason: "connection refused".to_string(),
    };
    let state = AccountState {
        balance: 50.0,
        loan: 200.0,
        loan_purpose: "boat".to_string(),
        is_loading: true,
    };

    let new_state = event.apply(&state).unwrap();

    assert!(!new_state.is_loading);
    assert_eq!(new_state.balance, 50.0);
    assert_eq!(new_state.loan, 200.0);
}

#[test]
fn test_conversion_aborted_on_idle_account_is_noop() {
    let event = ConversionAborted {
        reason: "timeout".to_string(),
    };
    let state = AccountState::new();

    let new_state = event.apply(&state).unwrap();

    assert_eq!(new_state, state);
}
