mod app;
mod config;
mod error;
mod prompt;
mod render;
mod tmdb;

use std::io;
use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::app::{SessionOutcome, Verdict, run_lookup};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::tmdb::client::TmdbClient;

fn setup_logging() -> Result<()> {
    let data_dir = config::data_dir()?;
    std::fs::create_dir_all(&data_dir)?;

    let file_appender = tracing_appender::rolling::daily(&data_dir, "flick.log");

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive("flick=info".parse().unwrap()))
        .with(fmt::layer().with_writer(file_appender).with_ansi(false))
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    // Log to a file; the terminal belongs to the interactive prompts
    if let Err(e) = setup_logging() {
        eprintln!("Warning: Could not set up logging: {}", e);
    }

    info!("Starting flick");

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: Could not load configuration: {}", e);
            return ExitCode::from(2);
        }
    };

    if config.tmdb.api_key.is_empty() {
        eprintln!("Error: No TMDB API key configured.");
        if let Ok(path) = config::config_path() {
            eprintln!("Set TMDB_API_KEY or add api_key to {}", path.display());
        }
        return ExitCode::from(2);
    }

    let client = TmdbClient::new(&config.tmdb);

    let query = match prompt::read_line("Enter a movie title: ") {
        Ok(query) => query,
        Err(e) => {
            eprintln!("Error: Could not read input: {}", e);
            return ExitCode::from(2);
        }
    };

    println!("\n--- Searching for: {} ---", query);

    let outcome = run_lookup(&client, &query, |candidate, details| {
        println!("Found movie ID: {} ({})", candidate.id, candidate.title);

        let rendered = render::present(&mut io::stdout(), Some(details)).unwrap_or(false);
        if !rendered {
            return Verdict::Accept;
        }

        let answer =
            prompt::read_line("Press Enter to keep this match, or type 'retry' for the next result: ");
        match answer {
            Ok(answer) => prompt::parse_verdict(&answer),
            Err(_) => Verdict::Accept,
        }
    })
    .await;

    match outcome {
        SessionOutcome::Accepted(details) => {
            info!(title = %details.title, "Accepted candidate");
            ExitCode::SUCCESS
        }
        SessionOutcome::NoMatches => {
            println!("Error: No movie found with that title. Try again");
            ExitCode::from(1)
        }
        SessionOutcome::Exhausted => {
            println!("No more results to show.");
            ExitCode::from(3)
        }
        SessionOutcome::Failed(e) => {
            error!(error = %e, "Lookup failed");
            match &e {
                Error::Api(status) => {
                    println!("An HTTP error occurred: {}", status);
                    println!("Tip: Did you include a valid TMDB API key?");
                }
                Error::Network(cause) => {
                    println!("An error occurred during the API request: {}", cause);
                }
                other => {
                    println!("An unexpected error occurred: {}", other);
                }
            }
            ExitCode::from(2)
        }
    }
}
