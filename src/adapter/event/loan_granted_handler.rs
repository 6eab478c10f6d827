use crate::{
    domain::{AccountState, LoanGranted},
    port::EventHandler,
};

impl EventHandler for LoanGranted {
    fn apply(&self, state: &AccountState) -> Option<AccountState> {
        Some(AccountState {
            balance: state.balance + self.amount,
            loan: self.amount,
            loan_purpose: self.purpose.clone(),
            is_loading: state.is_loading,
        })
    }
}
