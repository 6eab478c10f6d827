use crate::{
    domain::{AccountState, Withdrawn},
    port::EventHandler,
};

impl EventHandler for Withdrawn {
    fn apply(&self, state: &AccountState) -> Option<AccountState> {
        // No balance check here: overdraft policy is enforced at validation
        // time. Apply is total.
        Some(AccountState {
            balance: state.balance - self.amount,
            loan: state.loan,
            loan_purpose: state.loan_purpose.clone(),
            is_loading: state.is_loading,
        })
    }
}
