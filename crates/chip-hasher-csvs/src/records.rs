//! Mapping of a single CSV row onto a CHIP-0007 record.

use crate::{
    config::HashConfig,
    schemas::{Column, ColumnIndex},
};
use chip_hasher_metadata::{parse_attributes, Attribute, ChipMetadata, GENDER_TRAIT};
use csv::ByteRecord;

/// State carried from row to row within one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunningContext {
    team_name: String,
    series_number: u64,
    series_total: u64,
}

impl RunningContext {
    pub fn new(series_total: u64) -> Self {
        Self {
            team_name: String::new(),
            series_number: 1,
            series_total,
        }
    }

    /// Team name applied to records until a later row names another team
    pub fn team_name(&self) -> &str {
        &self.team_name
    }

    /// Series number the next record will receive
    pub fn series_number(&self) -> u64 {
        self.series_number
    }

    pub fn series_total(&self) -> u64 {
        self.series_total
    }

    /// Empty cells leave the current team in place.
    pub fn observe_team_name(&mut self, cell: &str) {
        if !cell.is_empty() {
            self.team_name = cell.to_string();
        }
    }

    pub fn advance(&mut self) {
        self.series_number += 1;
    }
}

/// A row qualifies for hashing when its name cell is non-empty.
pub fn is_qualifying(row: &ByteRecord, columns: &ColumnIndex) -> bool {
    !columns.cell(row, Column::Name).is_empty()
}

/// Build the record for `row` using the context's current team and series number.
pub fn build_metadata(
    row: &ByteRecord,
    columns: &ColumnIndex,
    context: &RunningContext,
    config: &HashConfig,
) -> ChipMetadata {
    let mut attributes = vec![Attribute::new(
        GENDER_TRAIT,
        columns.cell(row, Column::Gender).trim(),
    )];

    if columns.contains(Column::Attributes) {
        attributes.extend(parse_attributes(&columns.cell(row, Column::Attributes)));
    }

    ChipMetadata {
        format: config.format.clone(),
        name: columns.cell(row, Column::Name).trim().to_string(),
        description: columns.cell(row, Column::Description).trim().to_string(),
        minting_tool: context.team_name().to_string(),
        sensitive_content: false,
        series_number: context.series_number(),
        series_total: context.series_total(),
        attributes,
        collection: config.collection.clone(),
    }
}
