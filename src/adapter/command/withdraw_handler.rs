use crate::{
    domain::{
        AccountEvent, AccountState, CommandError, LedgerError, ValidationPolicy, Withdraw,
        Withdrawn,
    },
    port::CommandHandler,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
impl CommandHandler for Withdraw {
    type Resource = ();
    type Entity = ();

    async fn load(&self, _stale_state: &AccountState) -> Result<Self::Resource, LedgerError> {
        Ok(())
    }

    fn validate(
        &self,
        state: &AccountState,
        policy: &ValidationPolicy,
        _resource: &Self::Resource,
    ) -> Result<Self::Entity, LedgerError> {
        if self.amount <= 0.0 {
            return Err(LedgerError::Command(CommandError::InvalidAmount));
        }

        // Only the strict policy turns an over-withdrawal into a
        // rejection; by default the balance may go negative.
        if !policy.allow_overdraft && self.amount > state.balance {
            return Err(LedgerError::Command(CommandError::InsufficientFunds));
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
        Ok(vec![AccountEvent::Withdrawn(Withdrawn {
            amount: self.amount,
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
