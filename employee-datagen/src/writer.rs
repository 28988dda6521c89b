//! Chunked CSV output.
//!
//! Drives the batch generator over sub-ranges of the requested row count so
//! peak memory is bounded by the chunk size, not the total. The id offset
//! returned by each `generate` call is fed into the next one, keeping ids
//! contiguous across chunk boundaries.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::WriterBuilder;
use log::debug;
use rand::Rng;

use crate::error::GenError;
use crate::fake::FakeSource;
use crate::generator::RecordBatchGenerator;

/// Rows generated and flushed per chunk unless configured otherwise.
pub const DEFAULT_CHUNK_SIZE: u64 = 500_000;

/// Sequence number of the first employee id in a run.
pub const FIRST_ID_SEQUENCE: u64 = 1;

#[derive(Debug, Clone, Copy)]
pub struct ChunkedDatasetWriter {
    chunk_size: u64,
}

impl Default for ChunkedDatasetWriter {
    fn default() -> Self {
        ChunkedDatasetWriter {
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

impl ChunkedDatasetWriter {
    /// # Errors
    /// Errors when `chunk_size` is zero.
    pub fn new(chunk_size: u64) -> Result<Self, GenError> {
        if chunk_size == 0 {
            return Err(GenError::InvalidChunkSize);
        }
        Ok(ChunkedDatasetWriter { chunk_size })
    }

    #[must_use]
    pub fn chunk_size(&self) -> u64 {
        self.chunk_size
    }

    /// Generates `total_rows` records into `sink` as CSV, one chunk at a
    /// time. The header is written once, with the first chunk; every chunk
    /// is flushed before the next one is built, and a mid-run failure leaves
    /// the rows flushed so far intact.
    ///
    /// # Errors
    /// 1. `total_rows` is zero
    /// 2. Generation fails (fake source down, id space exhausted)
    /// 3. The sink rejects a write
    pub fn run<F, R, W>(
        &self,
        generator: &mut RecordBatchGenerator<F, R>,
        total_rows: u64,
        sink: W,
    ) -> Result<(), GenError>
    where
        F: FakeSource,
        R: Rng,
        W: Write,
    {
        if total_rows == 0 {
            return Err(GenError::InvalidRowCount);
        }

        let mut writer = WriterBuilder::new().from_writer(sink);
        let mut next_id = FIRST_ID_SEQUENCE;
        let mut remaining = total_rows;
        let mut chunk_index: u64 = 0;
        while remaining > 0 {
            let rows = remaining.min(self.chunk_size);
            let (batch, next) = generator.generate(rows, next_id)?;
            for record in &batch {
                writer.serialize(record)?;
            }
            writer.flush()?;
            next_id = next;
            remaining -= rows;
            chunk_index += 1;
            debug!(
                "Flushed chunk {} ({} rows, {} remaining)",
                chunk_index, rows, remaining
            );
            // `batch` drops here; no chunk outlives its flush.
        }
        Ok(())
    }

    /// Like [`run`](Self::run), writing to a freshly created file. Fails
    /// fast when the file cannot be created.
    ///
    /// # Errors
    /// As [`run`](Self::run), plus file creation failure.
    pub fn run_to_path<F, R, P>(
        &self,
        generator: &mut RecordBatchGenerator<F, R>,
        total_rows: u64,
        path: P,
    ) -> Result<(), GenError>
    where
        F: FakeSource,
        R: Rng,
        P: AsRef<Path>,
    {
        let file = File::create(path)?;
        self.run(generator, total_rows, file)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::fake::UsFake;
    use crate::generator::GeneratorConfig;

    fn generator(seed: u64) -> RecordBatchGenerator<UsFake<StdRng>, StdRng> {
        RecordBatchGenerator::with_config(
            UsFake::new(StdRng::seed_from_u64(seed)),
            StdRng::seed_from_u64(seed.wrapping_add(1)),
            GeneratorConfig::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_rejects_zero_chunk_size() {
        assert!(matches!(
            ChunkedDatasetWriter::new(0),
            Err(GenError::InvalidChunkSize)
        ));
    }

    #[test]
    fn test_rejects_zero_total_rows() {
        let writer = ChunkedDatasetWriter::new(10).unwrap();
        let mut sink = Vec::new();
        assert!(matches!(
            writer.run(&mut generator(1), 0, &mut sink),
            Err(GenError::InvalidRowCount)
        ));
        assert!(sink.is_empty());
    }

    #[test]
    fn test_default_chunk_size() {
        assert_eq!(ChunkedDatasetWriter::default().chunk_size(), 500_000);
    }

    #[test]
    fn test_header_written_once() {
        let writer = ChunkedDatasetWriter::new(2).unwrap();
        let mut sink = Vec::new();
        writer.run(&mut generator(2), 7, &mut sink).unwrap();
        let text = String::from_utf8(sink).unwrap();
        let header_lines = text
            .lines()
            .filter(|line| line.starts_with("employee_id,"))
            .count();
        assert_eq!(header_lines, 1);
        // 1 header + 7 rows.
        assert_eq!(text.lines().count(), 8);
    }

    #[test]
    fn test_single_oversized_chunk() {
        let writer = ChunkedDatasetWriter::new(1000).unwrap();
        let mut sink = Vec::new();
        writer.run(&mut generator(3), 5, &mut sink).unwrap();
        let text = String::from_utf8(sink).unwrap();
        assert_eq!(text.lines().count(), 6);
    }
}
