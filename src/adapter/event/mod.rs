mod conversion_aborted_handler;
mod conversion_started_handler;
mod deposited_handler;
mod loan_granted_handler;
mod loan_repaid_handler;
mod withdrawn_handler;

use crate::domain::{AccountEvent, AccountState};
use crate::{domain::EventEnvelope, port::EventHandler};

impl EventHandler for EventEnvelope {
    fn apply(&self, state: &AccountState) -> Option<AccountState> {
        match &self.event {
            AccountEvent::Deposited(event) => event.apply(state),
            AccountEvent::Withdrawn(event) => event.apply(state),
            AccountEvent::LoanGranted(event) => event.apply(state),
            AccountEvent::LoanRepaid(event) => event.apply(state),
            AccountEvent::ConversionStarted(event) => event.apply(state),
            AccountEvent::ConversionAborted(event) => event.apply(state),
        }
    }
}
