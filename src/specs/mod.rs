// src/specs/mod.rs
//! Page-specific extraction knowledge.
//!
//! `wiki` knows how the settings tables on the wiki export are laid
//! out. The table below says which ini files are documented, which
//! anchors feed them and how rows resolve to template sections — new
//! files are added here as data, not as new branches in the merger.

pub mod wiki;

pub const GAME_INI: &str = "Game.ini";
pub const GAME_USER_SETTINGS_INI: &str = "GameUserSettings.ini";

/// How extracted rows resolve to a template section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectionStrategy {
    /// Every row lands in one known section, whatever anchor it came
    /// from. Only declared keys are refreshed; nothing is created.
    Fixed(&'static str),
    /// One anchor per section. Missing sections and keys are created.
    PerAnchor(&'static [&'static str]),
}

/// One ini file the wiki documents.
#[derive(Clone, Copy, Debug)]
pub struct FileSpec {
    pub file: &'static str,
    pub strategy: SectionStrategy,
}

impl FileSpec {
    /// (anchor id, target section) pairs to scan for this file.
    /// Fixed files are anchored on the file name itself; per-anchor
    /// sections are anchored on the section id minus its brackets.
    pub fn anchors(&self) -> Vec<(String, &'static str)> {
        match self.strategy {
            SectionStrategy::Fixed(section) => vec![(s!(self.file), section)],
            SectionStrategy::PerAnchor(sections) => sections
                .iter()
                .map(|sec| (sec.trim_matches(['[', ']']).to_string(), *sec))
                .collect(),
        }
    }

    pub fn creates_missing(&self) -> bool {
        matches!(self.strategy, SectionStrategy::PerAnchor(_))
    }
}

pub const FILE_SPECS: &[FileSpec] = &[
    FileSpec {
        file: GAME_INI,
        strategy: SectionStrategy::Fixed("[/Script/ShooterGame.ShooterGameMode]"),
    },
    FileSpec {
        file: GAME_USER_SETTINGS_INI,
        strategy: SectionStrategy::PerAnchor(&[
            "[ServerSettings]",
            "[SessionSettings]",
            "[MultiHome]",
            "[/Script/Engine.GameSession]",
            "[Ragnarok]",
            "[MessageOfTheDay]",
        ]),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_file_is_anchored_on_its_own_name() {
        let anchors = FILE_SPECS[0].anchors();
        assert_eq!(anchors, vec![(s!("Game.ini"), "[/Script/ShooterGame.ShooterGameMode]")]);
        assert!(!FILE_SPECS[0].creates_missing());
    }

    #[test]
    fn per_anchor_ids_drop_brackets_only() {
        let anchors = FILE_SPECS[1].anchors();
        assert_eq!(anchors[0], (s!("ServerSettings"), "[ServerSettings]"));
        // inner slashes and dots stay put
        assert!(anchors.contains(&(s!("/Script/Engine.GameSession"), "[/Script/Engine.GameSession]")));
        assert!(FILE_SPECS[1].creates_missing());
    }
}
