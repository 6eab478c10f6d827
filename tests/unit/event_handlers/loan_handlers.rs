use ledger::domain::*;
use ledger::port::EventHandler;

#[test]
fn test_loan_granted_sets_all_loan_fields() {
    let event = LoanGranted {
        amount: 1000.0,
        purpose: "car".to_string(),
    };
    let state = AccountState {
        balance: 100.0,
        ..AccountState::new()
    };

    let new_state = event.apply(&state).unwrap();

    assert_eq!(new_state.balance, 1100.0);
    assert_eq!(new_state.loan, 1000.0);
    assert_eq!(new_state.loan_purpose, "car");
}

#[test]
fn test_loan_repaid_clears_loan_and_purpose_together() {
    let event = LoanRepaid {};
    let state = AccountState {
        balance: 1100.0,
        loan: 1000.0,
        loan_purpose: "car".to_string(),
        is_loading: false,
    };

    let new_state = event.apply(&state).unwrap();

    assert_eq!(new_state.balance, 100.0);
    assert_eq!(new_state.loan, 0.0);
    assert_eq!(new_state.loan_purpose, "");
}

#[test]
fn test_loan_repaid_with_no_loan_subtracts_zero() {
    let event = LoanRepaid {};
    let state = AccountState {
        balance: 100.0,
        ..AccountState::new()
    };

    let new_state = event.apply(&state).unwrap();

    assert_eq!(new_state.balance, 100.0);
    assert_eq!(new_state.loan, 0.0);
    assert_eq!(new_state.loan_purpose, "");
}

#[test]
fn test_loan_repaid_is_idempotent() {
    let event = LoanRepaid {};
    let state = AccountState {
        balance: 1100.0,
        loan: 1000.0,
        loan_purpose: "car".to_string(),
        is_loading: false,
    };

    let once = event.apply(&state).unwrap();
    let twice = event.apply(&once).unwrap();

    assert_eq!(once, twice);
}
