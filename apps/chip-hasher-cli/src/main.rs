use clap::Parser;
use std::path::PathBuf;

mod commands;
mod error;

#[derive(Parser)]
#[command(name = "chip-hasher")]
#[command(about = "Append CHIP-0007 metadata hashes to an NFT CSV file")]
#[command(version)]
struct Cli {
    /// Input CSV file; output is written to <input-stem>.output.csv
    input: PathBuf,
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing();

    match commands::hash_csv::execute(cli.input) {
        Ok(output_path) => {
            println!("Successfully created output file: {}", output_path.display());
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
