use crate::{
    domain::{
        AccountEvent, AccountState, BeginConversion, CommandError, ConversionStarted, LedgerError,
        ValidationPolicy,
    },
    port::CommandHandler,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
impl CommandHandler for BeginConversion {
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
        if self.amount <= 0.0 {
            return Err(LedgerError::Command(CommandError::InvalidAmount));
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
        Ok(vec![AccountEvent::ConversionStarted(ConversionStarted {
            amount: self.amount,
            currency: self.currency.clone(),
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
