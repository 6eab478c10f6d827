use crate::domain::{AccountEvent, AccountState, LedgerError, ValidationPolicy};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait CommandHandler {
    type Resource;
    type Entity;

    /// Load resources required to process the command
    ///
    /// This runs CONCURRENTLY with potentially stale state (fast-moving state is OK).
    /// Can be slow - do DB queries, HTTP calls, etc.
    async fn load(&self, stale_state: &AccountState) -> Result<Self::Resource, LedgerError>;

    /// Validate command against ACTUAL state
    ///
    /// This runs with EXCLUSIVE ACCESS to actual state - MUST BE FAST!
    /// No async, no I/O, just pure business logic. The policy decides
    /// configurable cases such as overdraft.
    fn validate(
        &self,
        actual_state: &AccountState,
        policy: &ValidationPolicy,
        resource: &Self::Resource,
    ) -> Result<Self::Entity, LedgerError>;

    /// Emit events from validated entity
    ///
    /// MUST BE FAST - no async, no I/O.
    /// Just creates events from the validated entity.
    /// Returns a Vec to support multiple events per command.
    fn emit(
        &self,
        state: &AccountState,
        entity: &Self::Entity,
        resource: &Self::Resource,
        timestamp: DateTime<Utc>,
    ) -> Result<Vec<AccountEvent>, LedgerError>;

    /// Execute side effects after event is persisted
    ///
    /// Can be slow - happens after persistence and state update
    async fn effect(
        &self,
        previous_state: &AccountState,
        state: &AccountState,
        resource: &Self::Resource,
        entity: &Self::Entity,
        timestamp: DateTime<Utc>,
    ) -> Result<(), LedgerError>;
}
