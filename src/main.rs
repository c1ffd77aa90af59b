//! `ratingbeam <ratings.csv> <output.txt>`
//!
//! Writes the average rating of every movie in the input to the output file.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use ratingbeam::job::RatingsJob;
use ratingbeam::logging;

const USAGE: &str = "Usage: ratingbeam <ratings.csv> <output.txt>";

// Exactly two positionals and nothing else: no help or version flags, and a
// leading `-` is part of a path.
#[derive(Parser, Debug)]
#[command(
    name = "ratingbeam",
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Cli {
    /// Ratings file, one `user,movie,rating` record per line
    #[arg(allow_hyphen_values = true)]
    input: PathBuf,

    /// Output file, created or overwritten
    #[arg(allow_hyphen_values = true)]
    output: PathBuf,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(_) => {
            eprintln!("{USAGE}");
            return ExitCode::from(1);
        }
    };

    if let Err(e) = logging::init_tracing() {
        eprintln!("Warning: Failed to initialize logging: {e}");
    }

    let job = RatingsJob::new(cli.input, cli.output);
    match job.run() {
        Ok(_) => {
            println!(
                "Processing complete. Output written to {}",
                job.output.display()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e:?}");
            ExitCode::FAILURE
        }
    }
}
