/*!
# CHIP-0007 CSV Hashing

Reads NFT CSV files exported by minting teams, builds a CHIP-0007 metadata
record for every named row, and appends the record's SHA-256 hash as a `Hash`
column in `<input-stem>.output.csv`.

## Recognized Columns

Located by header name, case-insensitive, in any order:
- `name`: rows with an empty name are copied through without a hash
- `description`
- `gender`: always the first attribute of a record
- `attributes`: free text such as `hair: bald, eyes: black`
- `series number`
- `team names`: sticky, applies to every following row until replaced

Missing columns are logged and read as empty cells.

## Usage

```rust,no_run
use chip_hasher_csvs::{HashPipeline, CsvResult};

fn example() -> CsvResult<()> {
    let outcome = HashPipeline::new().run_file("nfts.csv", |json| println!("{json}"))?;
    println!("Wrote {}", outcome.output_path.display());
    Ok(())
}
```
*/

pub mod config;
pub mod errors;
pub mod pipeline;
pub mod records;
pub mod schemas;

// Re-export main types for convenience
pub use config::HashConfig;
pub use errors::{CsvError, CsvResult};
pub use pipeline::{count_lines, output_path_for, HashOutcome, HashPipeline, HashSummary};
pub use records::{build_metadata, is_qualifying, RunningContext};
pub use schemas::{Column, ColumnIndex};
