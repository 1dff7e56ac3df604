// src/cli.rs
use std::env;
use std::path::PathBuf;

use crate::params::{Command, Params};
use crate::{runner, specs};

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut params = Params::new();
    parse_cli(&mut params, env::args().skip(1))?;

    if params.list_sections {
        for spec in specs::FILE_SPECS {
            for (anchor, section) in spec.anchors() {
                println!("{}\t{}\t{}", spec.file, section, anchor);
            }
        }
        return Ok(());
    }

    runner::run(&params)
}

fn parse_cli<I>(params: &mut Params, mut args: I) -> Result<(), Box<dyn std::error::Error>>
where
    I: Iterator<Item = String>,
{
    while let Some(a) = args.next() {
        match a.as_str() {
            "extract" => params.command = Command::Extract,
            "verify" => params.command = Command::Verify,
            "--html" => {
                params.html = PathBuf::from(args.next().ok_or("Missing value for --html")?);
            }
            "--template" => {
                params.template = PathBuf::from(args.next().ok_or("Missing value for --template")?);
            }
            "-o" | "--out" => {
                params.out = PathBuf::from(args.next().ok_or("Missing output path")?);
            }
            "--game-list" => {
                params.game_list = PathBuf::from(args.next().ok_or("Missing value for --game-list")?);
            }
            "--gus-list" => {
                params.gus_list = PathBuf::from(args.next().ok_or("Missing value for --gus-list")?);
            }
            "--list-sections" => params.list_sections = true,
            "-h" | "--help" => {
                eprintln!("{}", include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    Ok(())
}
