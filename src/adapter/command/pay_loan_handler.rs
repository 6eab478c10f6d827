use crate::{
    domain::{AccountEvent, AccountState, LedgerError, LoanRepaid, PayLoan, ValidationPolicy},
    port::CommandHandler,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
impl CommandHandler for PayLoan {
    type Resource = ();
    type Entity = ();

    async fn load(&self, _stale_state: &AccountState) -> Result<Self::Resource, LedgerError> {
        Ok(())
    }

    fn validate(
        &self,
        _state: &AccountState,
        _policy: &ValidationPolicy,
        _resource: &Self::Resource,
    ) -> Result<Self::Entity, LedgerError> {
        // Always valid: paying with no outstanding loan subtracts zero.
        Ok(())
    }

    fn emit(
        &self,
        _state: &AccountState,
        _entity: &Self::Entity,
        _resource: &Self::Resource,
        _timestamp: DateTime<Utc>,
    ) -> Result<Vec<AccountEvent>, LedgerError> {
        Ok(vec![AccountEvent::LoanRepaid(LoanRepaid {})])
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
