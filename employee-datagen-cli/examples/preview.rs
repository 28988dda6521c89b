//! Prints a small sample batch as CSV to stdout.
//! Run with `cargo run --example preview`

use std::error::Error;
use std::io;

use rand::thread_rng;

use employee_datagen::fake::UsFake;
use employee_datagen::generator::RecordBatchGenerator;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut generator = RecordBatchGenerator::new(UsFake::new(thread_rng()), thread_rng());
    let (batch, _) = generator.generate(10, 1)?;

    let mut writer = csv::WriterBuilder::new().from_writer(io::stdout());
    for record in &batch {
        writer.serialize(record)?;
    }
    writer.flush()?;

    Ok(())
}
