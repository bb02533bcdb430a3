//! Upmon Entry Point

use clap::Parser;
use std::process::ExitCode;
use upmon::cli::Cli;
use upmon::config::MonitorConfig;
use upmon::runner::Monitor;
use upmon::{logging, error::MonitorError};

#[tokio::main]
async fn main() -> ExitCode {
    let _cli = Cli::parse();

    logging::init().expect("failed to initialize logging");

    let config = MonitorConfig::from_env();
    let monitor = Monitor::new(config);

    match monitor.run().await {
        Ok(report) => {
            println!(
                "Archived: {} ({})",
                report.archived, report.archive_reference
            );
            if report.issue_count > 0 {
                println!("Notification sent: {}", report.notified);
            } else {
                println!("All OK.");
            }
            ExitCode::SUCCESS
        }
        Err(e @ MonitorError::UrlSourceMissing(_)) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
