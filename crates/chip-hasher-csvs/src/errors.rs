use chip_hasher_metadata::MetadataError;
use thiserror::Error;

pub type CsvResult<T> = Result<T, CsvError>;

#[derive(Error, Debug)]
pub enum CsvError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Empty CSV file: no header row found")]
    EmptyInput,

    #[error("Metadata serialization error: {0}")]
    Metadata(#[from] MetadataError),
}
