use crate::domain::{AccountState, LedgerRequest};
use crate::service::AccountService;
use std::fs::File;

#[derive(Debug, Clone)]
pub enum OrchestratorMode {
    Csv { file_path: String },
}

/// Replays a file of user-level requests against a single account and
/// reports the final state.
pub struct Orchestrator {
    service: AccountService,
    mode: OrchestratorMode,
}

impl Orchestrator {
    pub fn new(service: AccountService, mode: OrchestratorMode) -> Self {
        Self { service, mode }
    }

    pub async fn process(self) -> Result<AccountState, Box<dyn std::error::Error>> {
        let OrchestratorMode::Csv { file_path } = self.mode.clone();
        self.process_csv(&file_path).await
    }

    async fn process_csv(
        mut self,
        file_path: &str,
    ) -> Result<AccountState, Box<dyn std::error::Error>> {
        let file_handle = File::open(file_path)?;
        let mut rdr = csv::Reader::from_reader(file_handle);

        let mut line_num = 0;

        for result in rdr.deserialize() {
            line_num += 1;
            let request: LedgerRequest = match result {
                Ok(request) => request,
                Err(e) => {
                    tracing::warn!(line = line_num, error = %e, "skipping malformed row");
                    continue;
                }
            };

            // Rejections (duplicate loan, overdraft under strict policy,
            // failed conversions) are reported per line but don't stop the
            // replay - the state is unchanged for that row.
            if let Err(e) = self.service.apply(request).await {
                tracing::warn!(line = line_num, error = %e, "request rejected");
            }
        }

        Ok(self.service.state().clone())
    }

    /// Output the final account state as CSV to stdout
    pub fn output_csv(state: &AccountState) -> Result<(), Box<dyn std::error::Error>> {
        let mut wtr = csv::Writer::from_writer(std::io::stdout());
        wtr.write_record(["balance", "loan", "loan_purpose", "is_loading"])?;
        wtr.write_record([
            &format!("{:.2}", state.balance),
            &format!("{:.2}", state.loan),
            &state.loan_purpose,
            &state.is_loading.to_string(),
        ])?;

        wtr.flush()?;
        Ok(())
    }
}
