// tests/runner_io.rs
//
// Runner-level I/O: files in, files out, and the no-partial-output
// guarantee when an input is missing.

use std::fs;

use ark_scrape::params::{Command, Params};
use ark_scrape::runner;

const PAGE: &str = r#"
<h3><span class="mw-headline" id="ServerSettings">[ServerSettings]</span></h3>
<table>
<tr><th></th><th></th><th>Variable</th><th>Description</th></tr>
<tr><td></td><td></td><td>MaxPlayers=&lt;value&gt;</td><td>Specifies the number of player slots. Default value: 70.</td></tr>
</table>
"#;

const TEMPLATE: &str = r#"{
  "Game.ini": { "sections": {} },
  "GameUserSettings.ini": { "sections": {} }
}"#;

fn extract_params(dir: &std::path::Path) -> Params {
    let mut params = Params::new();
    params.command = Command::Extract;
    params.html = dir.join("page.htm");
    params.template = dir.join("template.json");
    params.out = dir.join("out.json");
    params
}

#[test]
fn extract_writes_the_merged_template() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("page.htm"), PAGE).unwrap();
    fs::write(dir.path().join("template.json"), TEMPLATE).unwrap();

    let params = extract_params(dir.path());
    runner::run(&params).unwrap();

    let out = fs::read_to_string(dir.path().join("out.json")).unwrap();
    let v: serde_json::Value = serde_json::from_str(&out).unwrap();
    let entry = &v["GameUserSettings.ini"]["sections"]["[ServerSettings]"]["settings"]["MaxPlayers"];
    assert_eq!(entry["type"], "int");
    assert_eq!(entry["default"], 70);
    assert!(out.ends_with('\n'));
}

#[test]
fn missing_page_aborts_without_output() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("template.json"), TEMPLATE).unwrap();

    let params = extract_params(dir.path());
    let err = runner::run(&params).unwrap_err();
    assert!(err.to_string().contains("page.htm"));
    assert!(!dir.path().join("out.json").exists());
}

#[test]
fn malformed_template_aborts_without_output() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("page.htm"), PAGE).unwrap();
    fs::write(dir.path().join("template.json"), "{ not json").unwrap();

    let params = extract_params(dir.path());
    assert!(runner::run(&params).is_err());
    assert!(!dir.path().join("out.json").exists());
}

#[test]
fn verify_runs_against_dump_files() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("template.json"),
        r#"{
          "Game.ini": { "sections": { "[/Script/ShooterGame.ShooterGameMode]": { "settings": {
            "bUseSingleton": { "type": "bool", "label": "bUseSingleton", "default": "", "description": "" }
          } } } },
          "GameUserSettings.ini": { "sections": {} }
        }"#,
    )
    .unwrap();
    fs::write(dir.path().join("game.txt"), "no marker lines at all\n").unwrap();
    fs::write(
        dir.path().join("gus.txt"),
        "Check mark.svgCheck mark.svg  bUseSingleton  true flag\n",
    )
    .unwrap();

    let mut params = Params::new();
    params.command = Command::Verify;
    params.template = dir.path().join("template.json");
    params.game_list = dir.path().join("game.txt");
    params.gus_list = dir.path().join("gus.txt");

    runner::run(&params).unwrap();
}
