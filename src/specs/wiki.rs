// src/specs/wiki.rs
//
// Reads the saved "Server configuration" wiki page. Every documented
// section is an anchored headline followed by one table whose rows
// look like
//
//   | toggles | icons | Variable | Description | ... |
//
// so the variable cell is the third <td> and the prose the fourth.

use crate::core::html::{find_anchor, inner_after_open_tag, next_tag_block_ci, strip_tags};
use crate::core::sanitize::normalize_entities;

/// One qualifying table row, ready for merging.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtractedRow {
    pub section: &'static str,
    pub key: String,
    pub description: String,
}

/// First `<table>` block after the element carrying `anchor_id`.
/// None when the anchor is absent or no table follows — the caller
/// skips that section and moves on.
pub fn locate_section_table<'a>(doc: &'a str, anchor_id: &str) -> Option<&'a str> {
    let from = find_anchor(doc, anchor_id)?;
    let (start, end) = next_tag_block_ci(doc, "<table", "</table>", from)?;
    Some(&doc[start..end])
}

/// Lazy walk over the data rows of one section table. The first row is
/// the header; rows with fewer than four cells or a blank key are
/// skipped, not errors.
pub fn extract_rows<'a>(section: &'static str, table: &'a str) -> Rows<'a> {
    let pos = match next_tag_block_ci(table, "<tr", "</tr>", 0) {
        Some((_, header_end)) => header_end,
        None => table.len(),
    };
    Rows { section, table, pos }
}

pub struct Rows<'a> {
    section: &'static str,
    table: &'a str,
    pos: usize,
}

impl Iterator for Rows<'_> {
    type Item = ExtractedRow;

    fn next(&mut self) -> Option<ExtractedRow> {
        while let Some((tr_s, tr_e)) = next_tag_block_ci(self.table, "<tr", "</tr>", self.pos) {
            self.pos = tr_e;
            let cells = read_cells(&self.table[tr_s..tr_e]);
            if cells.len() < 4 {
                logd!("{}: row with {} cells skipped", self.section, cells.len());
                continue;
            }
            let key = normalize_key(&cells[2]);
            if key.is_empty() {
                logd!("{}: row with blank variable cell skipped", self.section);
                continue;
            }
            return Some(ExtractedRow {
                section: self.section,
                key,
                description: cells[3].clone(),
            });
        }
        None
    }
}

/// Variable cells read like `MaxPlayers=<value>` or
/// `AllowRaid (true/false)`: cut at the first `=`, else at the first
/// `(`, then shed ini punctuation. Idempotent.
pub fn normalize_key(raw: &str) -> String {
    let cut = if let Some(i) = raw.find('=') {
        &raw[..i]
    } else if let Some(i) = raw.find('(') {
        &raw[..i]
    } else {
        raw
    };
    cut.trim()
        .chars()
        .filter(|c| !matches!(c, '[' | ']' | '"'))
        .collect::<String>()
        .trim()
        .to_string()
}

/* ---------- helpers ---------- */

fn read_cells(tr: &str) -> Vec<String> {
    let mut cells = Vec::new();
    let mut pos = 0usize;
    while let Some((td_s, td_e)) = next_tag_block_ci(tr, "<td", "</td>", pos) {
        let inner = inner_after_open_tag(&tr[td_s..td_e]);
        cells.push(strip_tags(normalize_entities(&inner)));
        pos = td_e;
    }
    cells
}
