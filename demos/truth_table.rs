use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

use clap::Parser;

use wff_rs::parse::parse;
use wff_rs::table::TruthTable;

#[derive(Parser, Debug)]
#[command(name = "truth_table")]
#[command(about = "Print a truth table for every formula in a file")]
struct Args {
    /// Path to a file with one formula per line
    path: PathBuf,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    simplelog::TermLogger::init(
        simplelog::LevelFilter::Info,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let args = Args::parse();
    let file = File::open(&args.path)?;

    for line in BufReader::new(file).lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        println!("Truth table for: {}", line);
        // a bad line is skipped, the rest of the file still runs
        let expr = match parse(&line) {
            Ok(expr) => expr,
            Err(e) => {
                log::warn!("skipping {:?}: {}", line, e);
                continue;
            }
        };
        let table = match TruthTable::build(&expr) {
            Ok(table) => table,
            Err(e) => {
                log::warn!("skipping {:?}: {}", line, e);
                continue;
            }
        };
        println!("{}", table);
        println!();
    }

    Ok(())
}
