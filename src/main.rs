use anyhow::Result;
use clap::{Args, CommandFactory, Parser, Subcommand};
use irrcalc::cli::calc::CalcOptions;
use irrcalc::core::RawInput;
use irrcalc::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args)]
struct CalcArgs {
    /// Start date (YYYY-MM-DD)
    #[arg(long, default_value = "")]
    start_date: String,

    /// End date (YYYY-MM-DD)
    #[arg(long, default_value = "")]
    end_date: String,

    /// Balance on the start date, e.g. 1,000.00
    #[arg(long, default_value = "")]
    begin_balance: String,

    /// Balance on the end date
    #[arg(long, default_value = "")]
    end_balance: String,

    /// Print the outcome as JSON
    #[arg(long)]
    json: bool,

    /// Show a table of the values used
    #[arg(long)]
    details: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Compute the IRR between two dated balances
    Calc(CalcArgs),
    /// Fill in the calculator form interactively
    Form,
}

impl From<Commands> for irrcalc::AppCommand {
    fn from(cmd: Commands) -> irrcalc::AppCommand {
        match cmd {
            Commands::Calc(args) => irrcalc::AppCommand::Calc {
                input: RawInput {
                    start_date: args.start_date,
                    end_date: args.end_date,
                    begin_balance: args.begin_balance,
                    end_balance: args.end_balance,
                },
                options: CalcOptions {
                    json: args.json,
                    details: args.details,
                },
            },
            Commands::Form => irrcalc::AppCommand::Form,
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => irrcalc::cli::setup::run(cli.config_path.as_deref()),
        Some(cmd) => irrcalc::run_command(cmd.into(), cli.config_path.as_deref()),
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
