// Entry point for the webp-batch command-line tool.
// The lib.rs file serves as the public API; this file only wires it up.

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use webp_batch::cli::Args;
use webp_batch::report::FileSavings;
use webp_batch::{Converter, ImageTask, VipsRuntime};

/// Exit status when arguments are invalid or libvips cannot start.
const EXIT_USAGE: u8 = 2;

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)         // Remove file path
        .with_line_number(false)  // Remove line numbers
        .with_thread_ids(false)   // Remove thread IDs
        .with_thread_names(false) // Remove thread names
        .with_target(false)       // Remove module path
        .with_ansi(true)          // Keep colored output
        .with_writer(std::io::stderr)
        .compact()                // Use compact formatter instead of pretty
        .init();
}

fn run(args: Args) -> anyhow::Result<ExitCode> {
    let files = args.files.clone();
    let json = args.json;

    let settings = match args.into_settings() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("error: {e}");
            return Ok(ExitCode::from(EXIT_USAGE));
        }
    };
    debug!(
        "Resolved settings: {}",
        serde_json::to_string(&settings).unwrap_or_default()
    );

    let runtime = VipsRuntime::start("webp-batch").context("starting libvips")?;

    let tasks = ImageTask::from_inputs(&files, &settings);
    let converter = Converter::new(&settings, &runtime);
    let report = converter.execute_batch(&tasks, |result| {
        if !json {
            println!("{}", FileSavings(result));
        }
    });

    if json {
        println!("{}", report.to_json()?);
    } else {
        println!("{report}");
    }

    info!("=== Done ===");
    Ok(if report.has_failures() { ExitCode::FAILURE } else { ExitCode::SUCCESS })
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(EXIT_USAGE)
        }
    }
}
