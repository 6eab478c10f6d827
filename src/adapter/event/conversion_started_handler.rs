use crate::{
    domain::{AccountState, ConversionStarted},
    port::EventHandler,
};

impl EventHandler for ConversionStarted {
    fn apply(&self, state: &AccountState) -> Option<AccountState> {
        Some(AccountState {
            balance: state.balance,
            loan: state.loan,
            loan_purpose: state.loan_purpose.clone(),
            is_loading: true,
        })
    }
}
