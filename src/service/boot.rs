use crate::adapter::{CommandProcessor, InMemoryJournal, LedgerEngine};
use crate::domain::ValidationPolicy;
use crate::port::RateLookup;
use crate::service::AccountService;
use std::sync::Arc;

/// Setup the ledger and return the owning account service
///
/// This creates all the infrastructure:
/// - InMemoryJournal (event store)
/// - CommandProcessor (carries the validation policy)
/// - LedgerEngine (load -> validate -> persist -> apply -> effects)
/// - AccountService (owns the state, serializes command turns)
pub fn boot(policy: ValidationPolicy, rates: Arc<dyn RateLookup>) -> AccountService {
    let journal: Arc<dyn crate::port::Journal + Send + Sync> = Arc::new(InMemoryJournal::new());
    let processor = Arc::new(CommandProcessor::new(policy));

    tracing::info!(
        allow_overdraft = processor.policy().allow_overdraft,
        "ledger initialized"
    );

    let engine = Arc::new(LedgerEngine::new(processor));

    AccountService::new(engine, journal, rates)
}
