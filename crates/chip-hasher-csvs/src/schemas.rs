/*!
# NFT CSV Column Layout

Team CSVs never agreed on a column order, so semantic columns are located by
header name (case-insensitive) once per file. Historical variants also omit
some columns entirely; a missing column reads as an empty cell on every row.

Rows stay raw bytes. Only the cells this tool reads are decoded, lossily, so
stray Latin-1 bytes never abort a run.
*/

use csv::ByteRecord;
use std::borrow::Cow;
use tracing::warn;

const COLUMN_COUNT: usize = 6;

/// Semantic columns read from an NFT CSV
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Name,
    Description,
    Gender,
    Attributes,
    SeriesNumber,
    TeamNames,
}

impl Column {
    pub const ALL: [Column; COLUMN_COUNT] = [
        Column::Name,
        Column::Description,
        Column::Gender,
        Column::Attributes,
        Column::SeriesNumber,
        Column::TeamNames,
    ];

    /// Lowercase header name that identifies this column
    pub fn header_name(self) -> &'static str {
        match self {
            Column::Name => "name",
            Column::Description => "description",
            Column::Gender => "gender",
            Column::Attributes => "attributes",
            Column::SeriesNumber => "series number",
            Column::TeamNames => "team names",
        }
    }
}

/// Header positions of every semantic column, resolved once per file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnIndex {
    positions: [Option<usize>; COLUMN_COUNT],
}

impl ColumnIndex {
    /// Locate every semantic column in `header`. Missing columns are logged
    /// once here and read as empty cells afterwards.
    pub fn resolve(header: &ByteRecord) -> Self {
        let mut positions = [None; COLUMN_COUNT];

        for column in Column::ALL {
            let position = find_column(header, column.header_name());
            if position.is_none() {
                warn!(column = column.header_name(), "No column named {:?}", column.header_name());
            }
            positions[column as usize] = position;
        }

        Self { positions }
    }

    pub fn position(&self, column: Column) -> Option<usize> {
        self.positions[column as usize]
    }

    pub fn contains(&self, column: Column) -> bool {
        self.position(column).is_some()
    }

    /// Cell of `column` in `row`, or `""` when the column is absent or the
    /// row is too short to reach it. Invalid UTF-8 becomes U+FFFD.
    pub fn cell<'r>(&self, row: &'r ByteRecord, column: Column) -> Cow<'r, str> {
        self.position(column)
            .and_then(|position| row.get(position))
            .map(String::from_utf8_lossy)
            .unwrap_or(Cow::Borrowed(""))
    }
}

fn find_column(header: &ByteRecord, name: &str) -> Option<usize> {
    header
        .iter()
        .position(|field| String::from_utf8_lossy(field).to_lowercase() == name)
}
