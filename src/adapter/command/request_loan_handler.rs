use crate::{
    domain::{
        AccountEvent, AccountState, CommandError, LedgerError, LoanGranted, RequestLoan,
        ValidationPolicy,
    },
    port::CommandHandler,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
impl CommandHandler for RequestLoan {
    type Resource = ();
    type Entity = ();

    async fn load(&self, _stale_state: &AccountState) -> Result<Self::Resource, LedgerError> {
        Ok(())
    }

    fn validate(
        &self,
        state: &AccountState,
        _policy: &ValidationPolicy,
        _resource: &Self::Resource,
    ) -> Result<Self::Entity, LedgerError> {
        if self.amount <= 0.0 {
            return Err(LedgerError::Command(CommandError::InvalidAmount));
        }

        // At most one active loan. The original silently returned the state
        // unchanged here; we surface the rejection instead.
        if state.has_loan() {
            return Err(LedgerError::Command(CommandError::LoanOutstanding));
        }

        Ok(())
    }

    fn emit(
        &self,
        _state: &AccountState,
        _entity: &Self::Entity,
        _resource: &Self::Resource,
        _timestamp: DateTime<Utc>,
    ) -> Result<Vec<AccountEvent>, LedgerError> {
        Ok(vec![AccountEvent::LoanGranted(LoanGranted {
            amount: self.amount,
            purpose: self.purpose.clone(),
        })])
    }

    async fn effect(
        &self,
        _previous_state: &AccountState,
        _state: &AccountState,
        _resource: &Self::Resource,
        _entity: &Self::Entity,
        _timestamp: DateTime<Utc>,
    ) -> Result<(), LedgerError> {
        Ok(())
    }
}
