use std::error::Error;

use clap::Parser;
use log::info;
use rand::thread_rng;

use employee_datagen::fake::UsFake;
use employee_datagen::generator::RecordBatchGenerator;
use employee_datagen::writer::{ChunkedDatasetWriter, DEFAULT_CHUNK_SIZE};

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Number of employee rows to generate
    pub(crate) row_count: String,
    /// Output CSV file
    #[clap(short, long, default_value = "employee_data.csv")]
    pub(crate) output: String,
    /// Rows generated and flushed per chunk
    #[clap(long, default_value_t = DEFAULT_CHUNK_SIZE)]
    pub(crate) chunk_size: u64,
}

/// Parsed by hand so both non-numeric and zero inputs report on stdout.
fn parse_row_count(raw: &str) -> Option<u64> {
    raw.parse().ok().filter(|&n| n > 0)
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let cli = Cli::parse();
    let row_count = match parse_row_count(&cli.row_count) {
        Some(count) => count,
        None => {
            println!("Error: row count must be a positive integer");
            std::process::exit(1);
        }
    };

    let mut generator = RecordBatchGenerator::new(UsFake::new(thread_rng()), thread_rng());
    let writer = ChunkedDatasetWriter::new(cli.chunk_size)?;
    info!(
        "Generating {} rows in chunks of {}",
        row_count, cli.chunk_size
    );
    writer.run_to_path(&mut generator, row_count, &cli.output)?;

    println!("Generated {} rows and saved to {}", row_count, cli.output);

    Ok(())
}
