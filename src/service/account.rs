use crate::{
    adapter::{EngineContext, LedgerEngine},
    domain::{
        AbortConversion, AccountCommand, AccountState, BeginConversion, CommandMetadata,
        ConversionError, DeduplicationKey, Deposit, LedgerError, LedgerRequest, PayLoan,
        RequestLoan, Withdraw,
    },
    port::{Engine, Journal, RateLookup},
};
use std::sync::Arc;
use std::time::Duration;

/// The command dispatch facade.
///
/// Owns the account state (no ambient singleton) and sequences commands one
/// turn at a time: every entry point takes `&mut self`, so commands are
/// serialized by ownership and no partial state is ever visible. The one
/// suspension point is the currency lookup inside `deposit`, awaited here
/// under an explicit timeout.
pub struct AccountService {
    engine: Arc<LedgerEngine>,
    journal: Arc<dyn Journal + Send + Sync>,
    rates: Arc<dyn RateLookup>,
    state: AccountState,
    base_currency: String,
    lookup_timeout: Duration,
    dispatch_counter: u64,
}

impl AccountService {
    pub fn new(
        engine: Arc<LedgerEngine>,
        journal: Arc<dyn Journal + Send + Sync>,
        rates: Arc<dyn RateLookup>,
    ) -> Self {
        Self {
            engine,
            journal,
            rates,
            state: AccountState::new(),
            base_currency: "USD".to_string(),
            lookup_timeout: Duration::from_secs(5),
            dispatch_counter: 0,
        }
    }

    pub fn with_base_currency(mut self, currency: impl Into<String>) -> Self {
        self.base_currency = currency.into();
        self
    }

    pub fn with_lookup_timeout(mut self, timeout: Duration) -> Self {
        self.lookup_timeout = timeout;
        self
    }

    /// Read-only snapshot of the account for rendering
    pub fn state(&self) -> &AccountState {
        &self.state
    }

    /// Deposit `amount` of `currency` into the account.
    ///
    /// Base-currency deposits go straight to the engine. Anything else first
    /// journals `ConversionStarted`, performs one rate lookup under the
    /// configured timeout, then deposits the converted total (which clears
    /// the loading flag). A failed or timed-out lookup journals
    /// `ConversionAborted` and surfaces the error - the loading flag never
    /// sticks.
    pub async fn deposit(&mut self, amount: f64, currency: &str) -> Result<(), LedgerError> {
        if currency.eq_ignore_ascii_case(&self.base_currency) {
            return self
                .process(AccountCommand::Deposit(Deposit { amount }))
                .await;
        }

        self.process(AccountCommand::BeginConversion(BeginConversion {
            amount,
            currency: currency.to_string(),
        }))
        .await?;

        // Clone the handle so the in-flight lookup doesn't borrow self;
        // the abort path below needs the service back.
        let rates = self.rates.clone();
        let base_currency = self.base_currency.clone();
        let outcome = tokio::time::timeout(
            self.lookup_timeout,
            rates.convert(amount, currency, &base_currency),
        )
        .await;

        let converted = match outcome {
            Ok(Ok(converted)) => converted,
            Ok(Err(error)) => return self.abort_conversion(error).await,
            Err(_) => {
                return self
                    .abort_conversion(LedgerError::Conversion(ConversionError::Timeout))
                    .await;
            }
        };

        // Converted totals are money: round to cents so rate arithmetic
        // never leaks sub-cent float residue into the balance.
        let converted = (converted * 100.0).round() / 100.0;

        self.process(AccountCommand::Deposit(Deposit { amount: converted }))
            .await
    }

    /// Withdraw `amount` from the account. May drive the balance negative
    /// unless the validation policy forbids overdraft.
    pub async fn withdraw(&mut self, amount: f64) -> Result<(), LedgerError> {
        self.process(AccountCommand::Withdraw(Withdraw { amount }))
            .await
    }

    /// Request a loan. Rejected while a loan is outstanding.
    pub async fn request_loan(&mut self, amount: f64, purpose: &str) -> Result<(), LedgerError> {
        self.process(AccountCommand::RequestLoan(RequestLoan {
            amount,
            purpose: purpose.to_string(),
        }))
        .await
    }

    /// Pay off the outstanding loan. Valid even with no active loan.
    pub async fn pay_loan(&mut self) -> Result<(), LedgerError> {
        self.process(AccountCommand::PayLoan(PayLoan {})).await
    }

    /// Apply a decoded user-level request (CSV row, API call)
    pub async fn apply(&mut self, request: LedgerRequest) -> Result<(), LedgerError> {
        match request {
            LedgerRequest::Deposit { amount, currency } => {
                self.deposit(amount, &currency).await
            }
            LedgerRequest::Withdraw { amount } => self.withdraw(amount).await,
            LedgerRequest::RequestLoan { amount, purpose } => {
                self.request_loan(amount, &purpose).await
            }
            LedgerRequest::PayLoan => self.pay_loan().await,
        }
    }

    async fn abort_conversion(&mut self, error: LedgerError) -> Result<(), LedgerError> {
        self.process(AccountCommand::AbortConversion(AbortConversion {
            reason: error.to_string(),
        }))
        .await?;

        tracing::warn!(%error, "currency conversion aborted");
        Err(error)
    }

    /// Process one command turn: validate against the actual state, persist,
    /// apply, and adopt the new state.
    async fn process(&mut self, command: AccountCommand) -> Result<(), LedgerError> {
        self.dispatch_counter += 1;
        let metadata = CommandMetadata {
            deduplication_key: DeduplicationKey::new(format!(
                "dispatch:{}",
                self.dispatch_counter
            )),
        };

        let context = EngineContext {
            journal: self.journal.clone(),
            current_state: self.state.clone(),
        };

        let (_envelope, new_state) = self
            .engine
            .process_command(command, metadata, &context)
            .await?;
        self.state = new_state;
        Ok(())
    }
}
