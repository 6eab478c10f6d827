use crate::{
    domain::{AccountCommand, AccountState, Directive, LedgerError, ValidationPolicy},
    port::{CommandHandler, EffectFn, Processor, ValidateFn},
};
use async_trait::async_trait;
use chrono::Utc;

/// CommandProcessor dispatches commands to their handlers
///
/// It carries the validation policy so every handler validates against the
/// same configuration.
pub struct CommandProcessor {
    policy: ValidationPolicy,
}

impl CommandProcessor {
    pub fn new(policy: ValidationPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &ValidationPolicy {
        &self.policy
    }
}

#[async_trait]
impl Processor for CommandProcessor {
    async fn load(
        &self,
        command: AccountCommand,
        stale_state: &AccountState,
    ) -> Result<Box<dyn ValidateFn>, LedgerError> {
        match command {
            AccountCommand::Deposit(cmd) => {
                let resource = cmd.load(stale_state).await?;
                Ok(Box::new(LoadedCommand::new(cmd, resource, self.policy)))
            }
            AccountCommand::Withdraw(cmd) => {
                let resource = cmd.load(stale_state).await?;
                Ok(Box::new(LoadedCommand::new(cmd, resource, self.policy)))
            }
            AccountCommand::RequestLoan(cmd) => {
                let resource = cmd.load(stale_state).await?;
                Ok(Box::new(LoadedCommand::new(cmd, resource, self.policy)))
            }
            AccountCommand::PayLoan(cmd) => {
                let resource = cmd.load(stale_state).await?;
                Ok(Box::new(LoadedCommand::new(cmd, resource, self.policy)))
            }
            AccountCommand::BeginConversion(cmd) => {
                let resource = cmd.load(stale_state).await?;
                Ok(Box::new(LoadedCommand::new(cmd, resource, self.policy)))
            }
            AccountCommand::AbortConversion(cmd) => {
                let resource = cmd.load(stale_state).await?;
                Ok(Box::new(LoadedCommand::new(cmd, resource, self.policy)))
            }
        }
    }
}

struct LoadedCommand<H: CommandHandler> {
    handler: H,
    resource: H::Resource,
    policy: ValidationPolicy,
}

impl<H: CommandHandler> LoadedCommand<H> {
    fn new(handler: H, resource: H::Resource, policy: ValidationPolicy) -> Self {
        Self {
            handler,
            resource,
            policy,
        }
    }
}

impl<H> ValidateFn for LoadedCommand<H>
where
    H: CommandHandler + Clone + Send + Sync + 'static,
    H::Resource: Clone + Send + Sync + 'static,
    H::Entity: Clone + Send + Sync + 'static,
{
    fn apply(&self, actual_state: &AccountState) -> Result<Directive, LedgerError> {
        let entity = self
            .handler
            .validate(actual_state, &self.policy, &self.resource)?;

        let events = self
            .handler
            .emit(actual_state, &entity, &self.resource, Utc::now())?;

        let handler = self.handler.clone();
        let resource = self.resource.clone();
        let entity = entity.clone();
        let previous_state = actual_state.clone();

        let effects: Vec<Box<dyn EffectFn>> = vec![Box::new(CommandEffect {
            handler,
            resource,
            entity,
            previous_state,
        })];

        Ok(Directive { events, effects })
    }
}

struct CommandEffect<H: CommandHandler> {
    handler: H,
    resource: H::Resource,
    entity: H::Entity,
    previous_state: AccountState,
}

#[async_trait]
impl<H> EffectFn for CommandEffect<H>
where
    H: CommandHandler + Send + Sync,
    H::Resource: Send + Sync,
    H::Entity: Send + Sync,
{
    async fn execute(&self, new_state: &AccountState) -> Result<(), LedgerError> {
        self.handler
            .effect(
                &self.previous_state,
                new_state,
                &self.resource,
                &self.entity,
                Utc::now(),
            )
            .await
    }
}
