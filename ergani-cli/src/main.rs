//! Ergani CLI - submit labor declarations from JSON files

mod cli;
mod config;
mod documents;
mod error;
mod output;

use clap::Parser;
use cli::{Args, Command};
use config::Config;
use ergani_client::ErganiError;
use error::CliError;
use output::OutputFormatter;
use tracing_subscriber::EnvFilter;

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        if let CliError::Ergani(ErganiError::Api(failure)) = &e {
            eprintln!("Response body: {}", failure.body);
        }
        std::process::exit(1);
    }
}

/// Install the stderr log subscriber; `RUST_LOG` wins over `-v`
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: &Args) -> Result<(), CliError> {
    match &args.command {
        Command::Encode { kind, file } => {
            let payload = documents::encode_file(*kind, file)?;
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
        Command::Auth => {
            let config = Config::from_args(args)?;
            let mut client = config.build_client()?;
            client.authenticate()?;
            if !args.quiet {
                println!("Authenticated as {}", config.username);
            }
        }
        Command::Submit { kind, file } => {
            let config = Config::from_args(args)?;
            let mut client = config.build_client()?;
            let receipts = documents::submit_file(&mut client, *kind, file)?;
            OutputFormatter::new(args.quiet).print_receipts((*kind).into(), &receipts);
        }
    }
    Ok(())
}
