use crate::{
    domain::{AccountState, ConversionAborted},
    port::EventHandler,
};

impl EventHandler for ConversionAborted {
    fn apply(&self, state: &AccountState) -> Option<AccountState> {
        // Every failed lookup lands here, so the loading flag can never
        // stay stuck.
        Some(AccountState {
            balance: state.balance,
            loan: state.loan,
            loan_purpose: state.loan_purpose.clone(),
            is_loading: false,
        })
    }
}
