use log::{info, LevelFilter};
use simplelog::{Config, WriteLogger};
use std::env;
use std::io;
use std::process;
use std::str::FromStr;
use tree_breadth::input;
use tree_breadth::report::BreadthReport;

const LOG_LEVEL_VAR: &str = "TREE_BREADTH_LOG";

fn log_level() -> LevelFilter {
    env::var(LOG_LEVEL_VAR)
        .ok()
        .and_then(|level| LevelFilter::from_str(&level).ok())
        .unwrap_or(LevelFilter::Warn)
}

fn run() -> tree_breadth::Result<i64> {
    let stdin = io::stdin();
    let records = input::read_records(stdin.lock())?;
    let report = BreadthReport::from_records(&records);
    info!(
        "treap width {}, bst width {}",
        report.treap_width, report.bst_width,
    );
    Ok(report.difference())
}

fn main() {
    if let Err(err) = WriteLogger::init(log_level(), Config::default(), io::stderr()) {
        eprintln!("failed to initialize logger: {}", err);
    }

    match run() {
        Ok(difference) => println!("{}", difference),
        Err(err) => {
            eprintln!("error: {}", err);
            process::exit(1);
        },
    }
}
