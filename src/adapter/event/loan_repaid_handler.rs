use crate::{
    domain::{AccountState, LoanRepaid},
    port::EventHandler,
};

impl EventHandler for LoanRepaid {
    fn apply(&self, state: &AccountState) -> Option<AccountState> {
        // Safe with no outstanding loan: subtracting zero, clearing already
        // clear fields. The purpose is cleared exactly when the loan is.
        Some(AccountState {
            balance: state.balance - state.loan,
            loan: 0.0,
            loan_purpose: String::new(),
            is_loading: state.is_loading,
        })
    }
}
