use crate::{
    domain::{AccountState, Deposited},
    port::EventHandler,
};

impl EventHandler for Deposited {
    fn apply(&self, state: &AccountState) -> Option<AccountState> {
        // A deposit is also the terminal step of the conversion path, so it
        // clears the loading flag unconditionally.
        Some(AccountState {
            balance: state.balance + self.amount,
            loan: state.loan,
            loan_purpose: state.loan_purpose.clone(),
            is_loading: false,
        })
    }
}
