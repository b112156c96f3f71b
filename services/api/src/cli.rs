use crate::report::{run_report, AgingArgs, PayrollArgs, ReceivableArgs, SalesArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use paint_office::config::AppConfig;
use paint_office::db::connect_and_migrate;
use paint_office::error::AppError;
use paint_office::telemetry;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "paint-office",
    about = "Run the painting back office API or print its reports from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Create or upgrade the database schema, then exit
    Migrate,
    /// Print a report to stdout
    Report {
        #[command(subcommand)]
        command: ReportCommand,
    },
}

#[derive(Subcommand, Debug)]
pub(crate) enum ReportCommand {
    /// Unpaid balances bucketed by days since the work date
    Aging(AgingArgs),
    /// Outstanding invoices with balances and totals
    Receivable(ReceivableArgs),
    /// A contractor's jobs and pay for a date range
    Payroll(PayrollArgs),
    /// Paid invoices grouped by company for a date range
    Sales(SalesArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Migrate => migrate().await,
        Command::Report { command } => run_report(command).await,
    }
}

async fn migrate() -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    connect_and_migrate(&config.database).await?;
    info!(url = %config.database.url, "database schema is up to date");
    Ok(())
}
