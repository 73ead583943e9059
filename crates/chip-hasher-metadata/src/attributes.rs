//! Parsing of the free-text `attributes` cell.
//!
//! Teams wrote traits as `Trait: Value` pairs joined by whatever separator
//! they liked (`;`, `,`, `, `, ` ;`). Everything is normalized to a single
//! delimiter before splitting. Entries that are not exactly one `trait:value`
//! pair are skipped.

use crate::schema::Attribute;

/// Separators between entries, tried in this order at each position
const ENTRY_SEPARATORS: &[&str] = &["; ", " ;", ",", ", "];

const ENTRY_DELIMITER: char = ';';
const TRAIT_VALUE_DELIMITER: char = ':';

/// Parse an attributes cell into trait/value pairs, preserving input order.
pub fn parse_attributes(cell: &str) -> Vec<Attribute> {
    normalize_separators(cell)
        .split(ENTRY_DELIMITER)
        .filter_map(parse_entry)
        .collect()
}

fn normalize_separators(cell: &str) -> String {
    let mut normalized = String::with_capacity(cell.len());
    let mut rest = cell;

    'scan: while !rest.is_empty() {
        for separator in ENTRY_SEPARATORS {
            if let Some(tail) = rest.strip_prefix(separator) {
                normalized.push(ENTRY_DELIMITER);
                rest = tail;
                continue 'scan;
            }
        }

        let mut chars = rest.chars();
        if let Some(c) = chars.next() {
            normalized.push(c);
        }
        rest = chars.as_str();
    }

    normalized
}

fn parse_entry(entry: &str) -> Option<Attribute> {
    let mut parts = entry.split(TRAIT_VALUE_DELIMITER);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(trait_type), Some(value), None) => Some(Attribute::new(
            trait_type.trim(),
            value.trim().trim_matches(','),
        )),
        _ => None,
    }
}
