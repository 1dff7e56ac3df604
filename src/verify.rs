// src/verify.rs
//
// Cross-checks the template against the raw key lists dumped from the
// wiki tables: keys filed under the wrong ini, keys missing from the
// template altogether. Informational only — nothing is mutated.

use std::collections::BTreeSet;
use std::error::Error;
use std::fmt;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::specs::{GAME_INI, GAME_USER_SETTINGS_INI};
use crate::template::SettingsTemplate;

/// Setting rows in the dumps start with the wiki's availability icons,
/// e.g. `Check mark.svgCheck mark.svg  MaxPlayers  ...`; the first
/// token after the icon pair is the key. Everything else is page
/// furniture and is skipped.
static KEY_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:Missing|Check mark|X mark)\.(?:png|svg).+\.(?:png|svg)\s+(\S+)\s+")
        .expect("KEY_LINE: hardcoded pattern is valid")
});

/// Keys named by one line-oriented dump file.
pub fn load_keys(path: &Path) -> Result<BTreeSet<String>, Box<dyn Error>> {
    let text = fs::read_to_string(path)
        .map_err(|e| format!("read {}: {e}", path.display()))?;
    Ok(keys_from_text(&text))
}

pub fn keys_from_text(text: &str) -> BTreeSet<String> {
    text.lines()
        .filter_map(|line| KEY_LINE.captures(line.trim()))
        .map(|caps| s!(&caps[1]))
        .collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReconcileReport {
    /// Declared under Game.ini but observed in the GameUserSettings dump.
    pub misplaced_in_game_ini: BTreeSet<String>,
    /// Declared under GameUserSettings.ini but observed in the Game dump.
    pub misplaced_in_gus_ini: BTreeSet<String>,
    /// In the Game dump but absent from the Game.ini template.
    pub missing_in_game_ini: BTreeSet<String>,
    /// In the GameUserSettings dump but absent from its template.
    pub missing_in_gus_ini: BTreeSet<String>,
}

/// Four set differences between the dumps and the template's declared
/// keys. Misplacement is a plain intersection with the *other* file's
/// dump — inherited semantics, kept as-is.
pub fn reconcile(
    game_keys: &BTreeSet<String>,
    gus_keys: &BTreeSet<String>,
    template: &SettingsTemplate,
) -> ReconcileReport {
    let template_game = template.declared_keys(GAME_INI);
    let template_gus = template.declared_keys(GAME_USER_SETTINGS_INI);

    ReconcileReport {
        misplaced_in_game_ini: template_game.intersection(gus_keys).cloned().collect(),
        misplaced_in_gus_ini: template_gus.intersection(game_keys).cloned().collect(),
        missing_in_game_ini: game_keys.difference(&template_game).cloned().collect(),
        missing_in_gus_ini: gus_keys.difference(&template_gus).cloned().collect(),
    }
}

impl fmt::Display for ReconcileReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_set(
            f,
            "Template Game.ini keys also in the GameUserSettings list",
            &self.misplaced_in_game_ini,
        )?;
        write_set(
            f,
            "Template GameUserSettings.ini keys also in the Game.ini list",
            &self.misplaced_in_gus_ini,
        )?;
        write_set(f, "Game.ini list keys not in the template", &self.missing_in_game_ini)?;
        write_set(f, "GameUserSettings list keys not in the template", &self.missing_in_gus_ini)
    }
}

fn write_set(f: &mut fmt::Formatter<'_>, label: &str, set: &BTreeSet<String>) -> fmt::Result {
    writeln!(f, "{label} ({}):", set.len())?;
    for key in set {
        writeln!(f, "  {key}")?;
    }
    Ok(())
}
