use crate::config::ReportConfig;
use crate::error::Error;
use crate::report::{OutputFormat, Report};
use crate::ticket::TicketSet;
use crate::time::TimePattern;
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;
mod error;
mod report;
mod route;
mod ticket;
mod time;

/// Minimum flight time per carrier and price statistics for one route.
#[derive(Parser)]
struct Args {
    /// Path to the JSON tickets file
    #[arg(short, long, value_name = "FILE", default_value = "data/tickets.json")]
    tickets: PathBuf,

    /// One end of the route; tickets in both directions are counted
    #[arg(long, value_name = "CODE", default_value = "VVO")]
    origin: String,

    /// Other end of the route
    #[arg(long, value_name = "CODE", default_value = "TLV")]
    destination: String,

    /// Layout of departure and arrival times
    #[arg(long, value_enum, default_value_t = TimePattern::Flexible)]
    time_pattern: TimePattern,

    /// Plain text lines or rounded tables
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

fn init_logs() {
    // stdout carries the report only
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();
}

fn run(args: &Args) -> Result<String, Error> {
    let config = ReportConfig::new(&args.origin, &args.destination, args.time_pattern)?;
    let tickets = TicketSet::load_from_file(&args.tickets)?;
    info!(path = %args.tickets.display(), count = tickets.tickets.len(), "loaded tickets");

    let report = Report::build(&tickets, &config);
    Ok(report.render(args.format))
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logs();

    match run(&args) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{} {}", "Error:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}
