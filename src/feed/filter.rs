// src/feed/filter.rs
use super::parse::RawRow;
use crate::config::consts::{COL_NOTES, HIDDEN_NOTE_MARKERS};

/// False when `notes` mentions consignment, a hold, or an explicit hide.
/// Case-insensitive substring match; rows without notes are always available.
pub fn is_available(row: &RawRow) -> bool {
    match row.get(COL_NOTES) {
        None | Some("") => true,
        Some(notes) => {
            let note = notes.to_lowercase();
            !HIDDEN_NOTE_MARKERS.iter().any(|m| note.contains(m))
        }
    }
}

pub fn keep_available(rows: Vec<RawRow>) -> Vec<RawRow> {
    rows.into_iter().filter(|r| is_available(r)).collect()
}
