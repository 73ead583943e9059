use std::path::PathBuf;
use thiserror::Error;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid file type specified, CSV file expected: {}", .0.display())]
    InvalidFileType(PathBuf),

    #[error("Hashing failed: {0}")]
    Hashing(#[from] chip_hasher_csvs::CsvError),
}
