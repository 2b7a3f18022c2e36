use crate::commands::{run_explain, run_overview, run_rank, ExplainArgs, OverviewArgs, RankArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use bridge17::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Bridge17 Partnership Engine",
    about = "Rank NGO partnerships against CSR funding and suppliers, or serve the ranking API",
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
    /// Rank NGOs for a state and development-goal category
    Rank(RankArgs),
    /// Show one NGO's profile and score breakdown
    Explain(ExplainArgs),
    /// Summarize the NGO registry by state and category
    Overview(OverviewArgs),
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
        Command::Rank(args) => run_rank(args),
        Command::Explain(args) => run_explain(args),
        Command::Overview(args) => run_overview(args),
    }
}
