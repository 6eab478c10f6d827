use clap::{Parser, Subcommand};
use ledger::{
    adapter::HttpRateLookup,
    domain::ValidationPolicy,
    service::{
        boot, mock::generator,
        orchestrator::{Orchestrator, OrchestratorMode},
    },
};
use std::sync::Arc;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "ledger", version, about = "A single-account banking ledger CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to the requests CSV file to replay
    #[arg(value_name = "FILE")]
    file: Option<String>,

    /// Reject withdrawals that would overdraw the balance
    #[arg(long)]
    strict: bool,

    /// Base URL of the currency rate API
    #[arg(long, default_value = "https://api.frankfurter.dev/v1")]
    rate_url: String,

    /// Currency lookup timeout in milliseconds
    #[arg(long, default_value = "5000")]
    timeout_ms: u64,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate dummy test data to a file
    Generate {
        /// Output file path
        #[arg(short, long, default_value = "requests.csv", value_name = "FILE")]
        output: String,

        /// Number of requests to generate
        #[arg(short, long, default_value = "10", value_name = "COUNT")]
        count: usize,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let args = Cli::parse();

    match args.command {
        Some(Commands::Generate { output, count }) => {
            generator(&output, count)?;
        }
        None => {
            let file = args
                .file
                .ok_or("Please provide a CSV file path or use the 'generate' command")?;

            let policy = if args.strict {
                ValidationPolicy::strict()
            } else {
                ValidationPolicy::default()
            };

            let rates = Arc::new(HttpRateLookup::new(args.rate_url));
            let service = boot(policy, rates)
                .with_lookup_timeout(Duration::from_millis(args.timeout_ms));

            let orchestrator =
                Orchestrator::new(service, OrchestratorMode::Csv { file_path: file });
            let final_state = orchestrator.process().await?;
            Orchestrator::output_csv(&final_state)?;
        }
    }

    Ok(())
}
