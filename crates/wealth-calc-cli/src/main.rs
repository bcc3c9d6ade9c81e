mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::projections::{GoalArgs, LumpSumArgs, RetirementArgs, SipArgs};

/// Financial projection calculators with decimal precision
#[derive(Parser)]
#[command(
    name = "wcalc",
    version,
    about = "Financial projection calculators with decimal precision",
    long_about = "A CLI for the financial projection calculators behind the investment \
                  planning dashboard: SIP future value, lump-sum compound interest, \
                  goal-based SIP solving, and retirement corpus planning."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Project the future value of a monthly SIP
    Sip(SipArgs),
    /// Project a lump sum under periodic compounding
    CompoundInterest(LumpSumArgs),
    /// Solve the monthly SIP needed to reach a target amount
    Goal(GoalArgs),
    /// Size a retirement corpus and the SIP needed to accumulate it
    Retirement(RetirementArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Sip(args) => commands::projections::run_sip(args),
        Commands::CompoundInterest(args) => commands::projections::run_lump_sum(args),
        Commands::Goal(args) => commands::projections::run_goal(args),
        Commands::Retirement(args) => commands::projections::run_retirement(args),
        Commands::Version => {
            println!("wcalc {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
