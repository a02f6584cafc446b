//! r2cfg CLI entry point
//!
//! Run once per CI job, with no arguments, before any step that talks to R2
//! through the AWS CLI.

// CLI binary needs to output to stdout/stderr - this is intentional
#![allow(clippy::print_stdout, clippy::print_stderr)]

use r2cfg::cli::{self, EXIT_IO, EXIT_OK, exit_code_for, render_error, report_json};
use r2cfg::setup;
use r2cfg::tracing::{TracingConfig, init_tracing};

fn main() {
    // NOTE: eprintln! is used here because tracing may not be usable during a panic.
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panicked: {panic_info}");
        eprintln!("Internal error occurred. Run with RUST_LOG=debug for more information.");
    }));

    let cli = cli::parse();

    // A broken RUST_LOG should not stop the setup itself
    if let Err(e) = init_tracing(TracingConfig::from_cli(&cli)) {
        eprintln!("{e:?}");
    }

    std::process::exit(run(&cli));
}

fn run(cli: &cli::Cli) -> i32 {
    match setup::execute() {
        Ok(report) => {
            if !cli.json {
                return EXIT_OK;
            }
            match report_json(&report) {
                Ok(json) => {
                    println!("{json}");
                    EXIT_OK
                }
                // Files are on disk, but --json callers need the result to count as success
                Err(e) => {
                    eprintln!("Error serializing response: {e}");
                    EXIT_IO
                }
            }
        }
        Err(err) => {
            tracing::debug!(error = %err, "Setup failed");
            let code = exit_code_for(&err);
            render_error(err, cli.json);
            code
        }
    }
}
