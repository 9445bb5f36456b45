use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use skyroutes_cli::commands::route::{handle_route_command, RouteCommandArgs};
use skyroutes_cli::commands::validate::{handle_validate_command, ValidateCommandArgs};
use skyroutes_cli::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(author, version, about = "SkyRoutes flight itinerary planner")]
struct Cli {
    /// Directory containing airports.csv and routes.csv.
    #[arg(long, env = "SKYROUTES_DATA_DIR", global = true)]
    data_dir: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Plan an itinerary between two airports, optionally through stops.
    Route(RouteCommandArgs),
    /// Load the dataset and report records dropped while building the graph.
    Validate(ValidateCommandArgs),
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match &cli.command {
        Command::Route(args) => handle_route_command(cli.data_dir.as_deref(), cli.format, args),
        Command::Validate(args) => {
            handle_validate_command(cli.data_dir.as_deref(), cli.format, args)
        }
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
