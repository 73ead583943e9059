/*!
# Row Pipeline

Drives a whole file through column resolution, record building and hashing.

The input is buffered once and traversed twice: a byte scan counts line
breaks for `series_total`, then the CSV reader walks the same bytes. Output is
collected in memory and only written to disk after the last row succeeds, so a
failed run leaves no output file behind. Rows are copied as raw bytes; cells
that are not valid UTF-8 pass through unchanged.
*/

use crate::{
    config::HashConfig,
    errors::{CsvError, CsvResult},
    records::{build_metadata, is_qualifying, RunningContext},
    schemas::{Column, ColumnIndex},
};
use chip_hasher_metadata::MetadataHasher;
use csv::{ByteRecord, ReaderBuilder, Terminator, WriterBuilder};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Counters reported at the end of a run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HashSummary {
    /// Data rows read, excluding the header
    pub rows_read: u64,
    /// Rows that received a hash
    pub rows_hashed: u64,
    /// Rows without a name, copied through unchanged
    pub rows_passed_through: u64,
    /// Value written as `series_total` in every record
    pub series_total: u64,
}

/// Result of hashing a file on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashOutcome {
    pub output_path: PathBuf,
    pub summary: HashSummary,
}

#[derive(Debug, Clone, Default)]
pub struct HashPipeline {
    config: HashConfig,
}

impl HashPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: HashConfig) -> Self {
        Self { config }
    }

    /// Hash every qualifying row of `input` and write the augmented CSV to `output`.
    ///
    /// `audit` receives the canonical JSON of each record before its hash is written.
    pub fn run<W, F>(&self, input: &[u8], output: W, mut audit: F) -> CsvResult<HashSummary>
    where
        W: Write,
        F: FnMut(&str),
    {
        let series_total = count_lines(input);
        info!(series_total, "Counted input lines");

        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(input);
        let mut records = reader.byte_records();

        let header = match records.next() {
            Some(header) => header?,
            None => return Err(CsvError::EmptyInput),
        };
        let columns = ColumnIndex::resolve(&header);

        let mut writer = WriterBuilder::new()
            .flexible(true)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(output);

        let mut output_header = header.clone();
        output_header.push_field(self.config.hash_column.as_bytes());
        writer.write_record(&output_header)?;

        let mut context = RunningContext::new(series_total);
        let mut summary = HashSummary {
            series_total,
            ..Default::default()
        };

        for result in records {
            let mut record = result?;
            summary.rows_read += 1;

            if let Some(hash) = self.process_record(&record, &columns, &mut context, &mut audit)? {
                record.push_field(hash.as_bytes());
                summary.rows_hashed += 1;
            } else {
                summary.rows_passed_through += 1;
            }

            writer.write_record(&record)?;
        }

        writer.flush()?;

        info!(
            rows_read = summary.rows_read,
            rows_hashed = summary.rows_hashed,
            rows_passed_through = summary.rows_passed_through,
            "Hashing completed"
        );

        Ok(summary)
    }

    /// Hash the CSV at `input_path` into `<stem>.<output_suffix>` next to it.
    pub fn run_file<P, F>(&self, input_path: P, audit: F) -> CsvResult<HashOutcome>
    where
        P: AsRef<Path>,
        F: FnMut(&str),
    {
        let input_path = input_path.as_ref();
        let input = fs::read(input_path)?;
        let output_path = output_path_for(input_path, &self.config.output_suffix);

        let mut buffer = Vec::new();
        let summary = self.run(&input, &mut buffer, audit)?;

        fs::write(&output_path, buffer)?;

        Ok(HashOutcome {
            output_path,
            summary,
        })
    }

    /// Returns the hash for qualifying rows, `None` for rows copied through.
    fn process_record<F>(
        &self,
        record: &ByteRecord,
        columns: &ColumnIndex,
        context: &mut RunningContext,
        audit: &mut F,
    ) -> CsvResult<Option<String>>
    where
        F: FnMut(&str),
    {
        context.observe_team_name(&columns.cell(record, Column::TeamNames));

        if !is_qualifying(record, columns) {
            if !columns.cell(record, Column::SeriesNumber).is_empty() {
                context.advance();
            }
            return Ok(None);
        }

        let metadata = build_metadata(record, columns, context, &self.config);
        context.advance();

        let digest = MetadataHasher::hash(&metadata)?;
        audit(&digest.json);

        debug!(
            series_number = metadata.series_number,
            name = %metadata.name,
            hash = %digest.hash,
            "Hashed row"
        );

        Ok(Some(digest.hash))
    }
}

/// Number of `\n` bytes in `input`. Header and blank lines are counted too.
pub fn count_lines(input: &[u8]) -> u64 {
    input.iter().filter(|&&byte| byte == b'\n').count() as u64
}

/// `nfts.csv` becomes `nfts.output.csv` for the default suffix.
pub fn output_path_for(input_path: &Path, suffix: &str) -> PathBuf {
    input_path.with_extension(suffix)
}
