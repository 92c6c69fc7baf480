mod analytics;
mod classify;
mod invariants;
mod models;
mod parser;
mod pipeline;
mod report;
mod source;
mod tokenizer;

use std::process::ExitCode;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_URL: &str = "http://s3.amazonaws.com/cuny-is211-spring2015/weblog.csv";

/// Reports image traffic and the most popular browser from a CSV web server log.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// URL or file path of the CSV log
    #[arg(long, default_value = DEFAULT_URL)]
    url: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    info!("downloading data from {}", args.url);
    let text = match source::fetch(&args.url).await {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Error downloading data: {e}");
            return ExitCode::FAILURE;
        }
    };

    info!("processing file");
    print!("{}", pipeline::analyze(&text));
    ExitCode::SUCCESS
}
