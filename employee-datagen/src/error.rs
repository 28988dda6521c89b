use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenError {
    #[error("CSV Error")]
    Csv(#[from] csv::Error),
    #[error("I/O Error")]
    Io(#[from] io::Error),
    #[error("Row count must be a positive integer")]
    InvalidRowCount,
    #[error("Chunk size must be a positive integer")]
    InvalidChunkSize,
    #[error("Start id must be a positive integer")]
    InvalidStartId,
    #[error("Fake data source unavailable: {0}")]
    SourceUnavailable(String),
    #[error("Requested id range does not fit the fixed-width employee id space")]
    IdSpaceExhausted,
    #[error("Salary model parameters are invalid")]
    InvalidSalaryModel,
    #[error("Sampled value was not a finite number")]
    NonFiniteSample,
}
