use crate::{
    domain::{
        AbortConversion, AccountEvent, AccountState, ConversionAborted, LedgerError,
        ValidationPolicy,
    },
    port::CommandHandler,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
impl CommandHandler for AbortConversion {
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
        // Aborting is always valid; clearing an already-clear loading flag
        // is a no-op at apply time.
        Ok(())
    }

    fn emit(
        &self,
        _state: &AccountState,
        _entity: &Self::Entity,
        _resource: &Self::Resource,
        _timestamp: DateTime<Utc>,
    ) -> Result<Vec<AccountEvent>, LedgerError> {
        Ok(vec![AccountEvent::ConversionAborted(ConversionAborted {
            reason: self.reason.clone(),
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
