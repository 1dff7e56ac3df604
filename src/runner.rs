// src/runner.rs
use std::error::Error;
use std::fs;

use crate::params::{Command, Params};
use crate::scrape;
use crate::template::SettingsTemplate;
use crate::verify;

/// Top-level runner: dispatch on command and go. Input problems abort
/// before anything is written; the output file appears only after a
/// complete pass.
pub fn run(params: &Params) -> Result<(), Box<dyn Error>> {
    let result = match params.command {
        Command::Extract => run_extract(params),
        Command::Verify => run_verify(params),
    };
    if let Err(e) = &result {
        loge!("{:?} run aborted: {e}", params.command);
    }
    result
}

fn run_extract(params: &Params) -> Result<(), Box<dyn Error>> {
    let doc = fs::read_to_string(&params.html)
        .map_err(|e| format!("read {}: {e}", params.html.display()))?;
    let mut template = SettingsTemplate::load(&params.template)?;

    let summary = scrape::collect_settings(&doc, &mut template)?;
    template.save(&params.out)?;

    println!(
        "{}: {} sections ({} missing), {} rows, {} descriptions updated, {} settings added",
        params.out.display(),
        summary.sections_found,
        summary.sections_missing,
        summary.rows_seen,
        summary.updated,
        summary.added,
    );
    Ok(())
}

fn run_verify(params: &Params) -> Result<(), Box<dyn Error>> {
    let template = SettingsTemplate::load(&params.template)?;
    let game_keys = verify::load_keys(&params.game_list)?;
    let gus_keys = verify::load_keys(&params.gus_list)?;

    let report = verify::reconcile(&game_keys, &gus_keys, &template);
    print!("{report}");
    Ok(())
}
