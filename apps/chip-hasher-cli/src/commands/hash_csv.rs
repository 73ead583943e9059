use crate::error::{CliError, CliResult};
use chip_hasher_csvs::HashPipeline;
use std::path::{Path, PathBuf};
use tracing::info;

/// Hash every named row of `input` and return the path of the output CSV.
pub fn execute(input: PathBuf) -> CliResult<PathBuf> {
    if !has_csv_extension(&input) {
        return Err(CliError::InvalidFileType(input));
    }

    info!(input = %input.display(), "Hashing NFT metadata");

    // Canonical JSON of every record goes to stdout, logs go to stderr
    let outcome = HashPipeline::new().run_file(&input, |json| println!("{json}"))?;

    info!(
        rows_hashed = outcome.summary.rows_hashed,
        rows_passed_through = outcome.summary.rows_passed_through,
        "Output written to {}",
        outcome.output_path.display()
    );

    Ok(outcome.output_path)
}

fn has_csv_extension(path: &Path) -> bool {
    path.extension()
        .is_some_and(|extension| extension.eq_ignore_ascii_case("csv"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_has_csv_extension() {
        assert!(has_csv_extension(Path::new("nfts.csv")));
        assert!(has_csv_extension(Path::new("dir/nfts.CSV")));
        assert!(!has_csv_extension(Path::new("nfts.json")));
        assert!(!has_csv_extension(Path::new("nfts")));
        assert!(!has_csv_extension(Path::new("csv")));
    }

    #[test]
    fn test_rejects_wrong_extension_without_touching_disk() {
        let result = execute(PathBuf::from("does/not/exist.txt"));
        assert!(matches!(result, Err(CliError::InvalidFileType(_))));
    }

    #[test]
    fn test_execute_writes_output() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("nfts.csv");
        std::fs::write(&input, "Name,Gender\nadewale,Male\n").unwrap();

        let output = execute(input).unwrap();

        assert_eq!(output, dir.path().join("nfts.output.csv"));
        let contents = std::fs::read_to_string(output).unwrap();
        assert!(contents.starts_with("Name,Gender,Hash\nadewale,Male,"));
    }

    #[test]
    fn test_empty_input_is_reported() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("empty.csv");
        std::fs::write(&input, "").unwrap();

        let err = execute(input).unwrap_err();
        assert!(err.to_string().contains("Empty CSV file"));
    }
}
