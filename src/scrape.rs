// src/scrape.rs
//
// Walks the file/anchor table, pulls rows out of the wiki document and
// merges them into the template. Per-section and per-row problems are
// logged and skipped; only whole-document I/O can abort a run.

use std::error::Error;

use crate::infer;
use crate::specs::{self, FileSpec, wiki};
use crate::template::{SettingEntry, SettingsTemplate};

/// What one extraction pass did, for human-facing reporting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExtractSummary {
    pub sections_found: usize,
    pub sections_missing: usize,
    pub rows_seen: usize,
    pub updated: usize,
    pub added: usize,
}

/// One full pass of `doc` against `template`, in place. Idempotent:
/// a second pass over the same document changes nothing.
pub fn collect_settings(
    doc: &str,
    template: &mut SettingsTemplate,
) -> Result<ExtractSummary, Box<dyn Error>> {
    let mut summary = ExtractSummary::default();

    for spec in specs::FILE_SPECS {
        for (anchor, section) in spec.anchors() {
            let Some(table) = wiki::locate_section_table(doc, &anchor) else {
                logd!("{}: no table under anchor {anchor:?}", spec.file);
                summary.sections_missing += 1;
                continue;
            };
            summary.sections_found += 1;

            for row in wiki::extract_rows(section, table) {
                summary.rows_seen += 1;
                merge_row(template, spec, &row, &mut summary)?;
            }
        }
    }

    logf!(
        "extract: {} sections ({} missing), {} rows, {} updated, {} added",
        summary.sections_found,
        summary.sections_missing,
        summary.rows_seen,
        summary.updated,
        summary.added,
    );
    Ok(summary)
}

fn merge_row(
    template: &mut SettingsTemplate,
    spec: &FileSpec,
    row: &wiki::ExtractedRow,
    summary: &mut ExtractSummary,
) -> Result<(), Box<dyn Error>> {
    // Re-extraction refreshes prose only; typed metadata survives.
    if template.update_description(spec.file, row.section, &row.key, &row.description) {
        summary.updated += 1;
        return Ok(());
    }

    if !spec.creates_missing() {
        // fixed-section files only ever refresh declared keys
        logd!("{}: undeclared key {} left alone", spec.file, row.key);
        return Ok(());
    }

    let (kind, default) = infer::infer(&row.description);
    let entry = SettingEntry {
        kind,
        label: row.key.clone(),
        default,
        description: row.description.clone(),
    };
    template.insert_entry(spec.file, row.section, &row.key, &entry)?;
    summary.added += 1;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::SettingsTemplate;
    use serde_json::json;

    const DOC: &str = r#"
        <h2><span class="mw-headline" id="Game.ini">Game.ini</span></h2>
        <table>
          <tr><th>?</th><th>?</th><th>Variable</th><th>Description</th></tr>
          <tr><td>a</td><td>b</td><td>bPvE=&lt;bool&gt;</td><td>Enables PvE. Default value: false.</td></tr>
          <tr><td>a</td><td>b</td><td>bStranger=&lt;bool&gt;</td><td>Not in the template.</td></tr>
        </table>
        <h3><span class="mw-headline" id="ServerSettings">[ServerSettings]</span></h3>
        <table>
          <tr><th>?</th><th>?</th><th>Variable</th><th>Description</th></tr>
          <tr><td>a</td><td>b</td><td>TamingSpeedMultiplier=&lt;value&gt;</td><td>Taming multiplier. Default value: 3.5.</td></tr>
        </table>
        <h3><span class="mw-headline" id="MessageOfTheDay">[MessageOfTheDay]</span></h3>
        <table>
          <tr><th>?</th><th>?</th><th>Variable</th><th>Description</th></tr>
          <tr><td>a</td><td>b</td><td>Message=&lt;string&gt;</td><td>The message string. Default value: N/A.</td></tr>
        </table>
    "#;

    fn template() -> SettingsTemplate {
        SettingsTemplate::from_str(
            r#"{
              "Game.ini": { "sections": { "[/Script/ShooterGame.ShooterGameMode]": { "settings": {
                "bPvE": { "type": "bool", "label": "PvE", "default": true, "description": "stale" }
              } } } },
              "GameUserSettings.ini": { "sections": {} }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn pass_updates_creates_and_counts() {
        let mut t = template();
        let summary = collect_settings(DOC, &mut t).unwrap();

        assert_eq!(summary.sections_found, 3);
        assert_eq!(summary.sections_missing, 4); // SessionSettings, MultiHome, GameSession, Ragnarok
        assert_eq!(summary.rows_seen, 4);
        assert_eq!(summary.updated, 1);
        assert_eq!(summary.added, 2);

        // declared key: description refreshed, typed metadata untouched
        let bpve = &t.as_value()["Game.ini"]["sections"]["[/Script/ShooterGame.ShooterGameMode]"]
            ["settings"]["bPvE"];
        assert_eq!(bpve["description"], "Enables PvE. Default value: false.");
        assert_eq!(bpve["default"], true);
        assert_eq!(bpve["label"], "PvE");

        // fixed-section file never gains keys
        assert!(!t.declared_keys("Game.ini").contains("bStranger"));

        // dynamic file: section created, entry fully inferred
        let taming = &t.as_value()["GameUserSettings.ini"]["sections"]["[ServerSettings]"]
            ["settings"]["TamingSpeedMultiplier"];
        assert_eq!(taming["type"], "float");
        assert_eq!(taming["label"], "TamingSpeedMultiplier");
        assert_eq!(taming["default"], json!(3.5));

        let motd = &t.as_value()["GameUserSettings.ini"]["sections"]["[MessageOfTheDay]"]
            ["settings"]["Message"];
        assert_eq!(motd["type"], "string");
        assert_eq!(motd["default"], "");
    }

    #[test]
    fn second_pass_is_idempotent() {
        let mut once = template();
        collect_settings(DOC, &mut once).unwrap();
        let mut twice = once.clone();
        let summary = collect_settings(DOC, &mut twice).unwrap();

        assert_eq!(once, twice);
        // existing keys resolve as updates the second time around
        assert_eq!(summary.added, 0);
        assert_eq!(summary.updated, 3);
    }

    #[test]
    fn empty_document_changes_nothing() {
        let mut t = template();
        let before = t.clone();
        let summary = collect_settings("<html><body>nothing here</body></html>", &mut t).unwrap();
        assert_eq!(t, before);
        assert_eq!(summary.sections_found, 0);
        assert_eq!(summary.sections_missing, 7);
    }
}
