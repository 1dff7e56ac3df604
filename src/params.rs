// src/params.rs
use std::path::PathBuf;

// Default file names match what the wiki save-as and the template repo
// actually produce; every one is overridable on the command line.
pub const DEFAULT_HTML: &str = "Server configuration - ARK Official Community Wiki.htm";
pub const DEFAULT_TEMPLATE: &str = "ark-settings-template.json";
pub const DEFAULT_OUT: &str = "ark-settings.json";
pub const DEFAULT_GAME_LIST: &str = "game.ini.txt";
pub const DEFAULT_GUS_LIST: &str = "game user settings.ini.txt";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Extract,
    Verify,
}

#[derive(Clone, Debug)]
pub struct Params {
    pub command: Command,
    pub html: PathBuf,          // saved wiki page (extract)
    pub template: PathBuf,      // settings template JSON (both commands)
    pub out: PathBuf,           // merged output JSON (extract)
    pub game_list: PathBuf,     // Game.ini key dump (verify)
    pub gus_list: PathBuf,      // GameUserSettings.ini key dump (verify)
    pub list_sections: bool,    // print the section table, then exit
}

impl Params {
    pub fn new() -> Self {
        Self {
            command: Command::Extract,
            html: PathBuf::from(DEFAULT_HTML),
            template: PathBuf::from(DEFAULT_TEMPLATE),
            out: PathBuf::from(DEFAULT_OUT),
            game_list: PathBuf::from(DEFAULT_GAME_LIST),
            gus_list: PathBuf::from(DEFAULT_GUS_LIST),
            list_sections: false,
        }
    }
}
