use ledger::domain::*;
use ledger::port::EventHandler;

#[test]
fn test_deposited_updates_balance() {
    let event = Deposited { amount: 100.0 };
    let state = AccountState::new();

    let new_state = event.apply(&state).expect("Should apply successfully");

    assert_eq!(new_state.balance, 100.0);
    assert_eq!(new_state.loan, 0.0);
}

#[test]
fn test_deposited_clears_loading_flag() {
    let event = Deposited { amount: 110.0 };
    let state = AccountState {
        balance: 0.0,
        loan: 0.0,
        loan_purpose: String::new(),
        is_loading: true,
    };

    let new_state = event
        .apply(&state)
        .expect("Deposit terminates the conversion");

    assert_eq!(new_state.balance, 110.0);
    assert!(!new_state.is_loading);
}

#[test]
fn test_deposited_preserves_loan_fields() {
    let event = Deposited { amount: 50.0 };
    let state = AccountState {
        balance: 1000.0,
        loan: 1000.0,
        loan_purpose: "car".to_string(),
        is_loading: false,
    };

    let new_state = event.apply(&state).unwrap();

    assert_eq!(new_state.balance, 1050.0);
    assert_eq!(new_state.loan, 1000.0);
    assert_eq!(new_state.loan_purpose, "car");
}
