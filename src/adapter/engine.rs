use crate::{
    domain::{
        AccountCommand, AccountState, CommandMetadata, EngineError, EventEnvelope, EventMetadata,
        LedgerError,
    },
    port::{Engine, EventHandler, Journal, Processor},
};
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;

/// Context for the Engine containing current state and journal
pub struct EngineContext {
    /// The journal for persisting events
    pub journal: Arc<dyn Journal + Send + Sync>,
    /// Current state of the account
    pub current_state: AccountState,
}

/// The main ledger engine implementation
pub struct LedgerEngine {
    processor: Arc<dyn Processor>,
}

impl LedgerEngine {
    pub fn new(processor: Arc<dyn Processor>) -> Self {
        Self { processor }
    }
}

#[async_trait]
impl Engine for LedgerEngine {
    type Context = EngineContext;

    /// Process a command by orchestrating the following steps:
    /// 1. Async load phase (can query external state, use snapshot)
    /// 2. Validation phase (apply business rules to current state)
    /// 3. Persist event to journal (journal assigns sequence number atomically)
    /// 4. Apply event to state (functional - returns new state)
    /// 5. Execute effects (with new state)
    ///
    /// INFRASTRUCTURE CONTRACT (caller's responsibility):
    /// - Caller MUST provide serialization (here: the AccountService owns
    ///   the state behind `&mut self`, one command per turn)
    /// - Caller MUST update state atomically after successful processing
    ///
    /// This separation keeps the engine pure (stateless business logic) while
    /// pushing ordering guarantees to infrastructure.
    ///
    /// Returns (EventEnvelope, NewState) - includes sequence number for verification
    async fn process_command(
        &self,
        command: AccountCommand,
        metadata: CommandMetadata,
        context: &Self::Context,
    ) -> Result<(EventEnvelope, AccountState), LedgerError> {
        // 1. Load phase: query slow dependencies with a snapshot of state.
        //    Caller's serialization ensures state doesn't change during this
        let stale_state = context.current_state.clone();
        let validate_fn = self.processor.load(command, &stale_state).await?;

        // 2. Validation phase: apply business rules to CURRENT state
        //    Infrastructure guarantee: state hasn't changed since load phase
        let directive = validate_fn.apply(&context.current_state)?;

        // 3. Persistence phase: append event to journal
        //    Journal handles:
        //    - Idempotency check via deduplication_key
        //    - Atomic sequence number assignment (under journal's write lock)
        //    - Returns existing envelope if duplicate
        let event = directive
            .events
            .into_iter()
            .next()
            .ok_or(LedgerError::Engine(EngineError::NoEvents))?;

        let event_metadata = EventMetadata {
            deduplication_key: metadata.deduplication_key,
            timestamp: Utc::now(),
        };

        let envelope = context.journal.append(event, event_metadata).await?;

        // 4. State transition: apply event to get new state
        //    This is functional (pure) - returns new state, doesn't mutate
        let new_state = envelope
            .apply(&context.current_state)
            .ok_or(LedgerError::Engine(EngineError::StateTransitionFailed))?;

        // 5. Effects: execute side effects with new state
        for effect in directive.effects {
            effect.execute(&new_state).await?;
        }

        Ok((envelope, new_state))
    }

    fn processor(&self) -> &dyn Processor {
        self.processor.as_ref()
    }
}
