// src/feed/parse.rs
//
// Two strategies:
// 1. `csv` reader: header row, quoted fields, ragged rows tolerated, values trimmed.
// 2. Manual split, used when (1) errors or finds no rows. Splits on bare commas,
//    so a quoted value containing a comma shifts the rest of its row.
//    Known limitation of the fallback; the primary reader handles quotes.

use std::collections::HashMap;

use csv::{ReaderBuilder, Trim};

use crate::error::Result;

/// One feed line keyed by column name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawRow {
    fields: HashMap<String, String>,
}

impl RawRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// `None` when the column is absent from this row (ragged line or unknown header).
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(|v| v.as_str())
    }

    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(column.into(), value.into());
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RawRow {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut row = RawRow::new();
        for (k, v) in iter {
            row.insert(k, v);
        }
        row
    }
}

/// Parse feed text into rows, falling back to the manual splitter.
pub fn parse(text: &str) -> Vec<RawRow> {
    match parse_primary(text) {
        Ok(rows) if !rows.is_empty() => {
            logd!("Parse: csv reader → {} row(s)", rows.len());
            rows
        }
        Ok(_) => {
            logw!("Parse: csv reader found no rows, trying manual split");
            parse_manual(text)
        }
        Err(e) => {
            logw!("Parse: csv reader failed ({e}), trying manual split");
            parse_manual(text)
        }
    }
}

/// First line is the header. Field values are trimmed; header names are not.
pub fn parse_primary(text: &str) -> Result<Vec<RawRow>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::Fields)
        .from_reader(text.as_bytes());

    let headers = rdr.headers()?.clone();
    let mut rows = Vec::new();

    for record in rdr.records() {
        let record = record?;
        rows.push(headers.iter().zip(record.iter()).collect());
    }

    Ok(rows)
}

/// Positional comma split. Needs a header line plus at least one data line.
pub fn parse_manual(text: &str) -> Vec<RawRow> {
    let lines: Vec<&str> = text
        .split('\n')
        .filter(|line| !line.trim().is_empty())
        .collect();

    if lines.len() < 2 {
        return Vec::new();
    }

    let headers: Vec<&str> = lines[0].split(',').map(str::trim).collect();

    lines[1..]
        .iter()
        .map(|line| {
            let values: Vec<&str> = line.split(',').collect();
            headers
                .iter()
                .enumerate()
                .map(|(i, h)| (*h, values.get(i).map(|v| v.trim()).unwrap_or("")))
                .collect()
        })
        .collect()
}
