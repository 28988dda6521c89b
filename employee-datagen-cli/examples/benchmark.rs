//! Times bulk generation without touching disk.
//! Run with `cargo run --example benchmark`

use std::error::Error;
use std::io;
use std::time::Instant;

use log::warn;
use rand::thread_rng;

use employee_datagen::fake::UsFake;
use employee_datagen::generator::RecordBatchGenerator;
use employee_datagen::writer::ChunkedDatasetWriter;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut generator = RecordBatchGenerator::new(UsFake::new(thread_rng()), thread_rng());
    let writer = ChunkedDatasetWriter::new(100_000)?;

    let start = Instant::now();
    writer.run(&mut generator, 1_000_000, io::sink())?;
    warn!("Generating 1M rows took: {:.2?}", start.elapsed());

    Ok(())
}
