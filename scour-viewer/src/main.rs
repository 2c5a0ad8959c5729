//! Standalone binary for the scour interactive cleanup tool.
//! Usage:
//!   scour [path]

mod viewer;

use clap::{Arg, Command, ValueHint};
use std::path::PathBuf;

fn main() {
    let matches = Command::new("scour")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Interactive terminal tool for cleaning pasted text")
        .arg(
            Arg::new("path")
                .help("Optional file to preload into the editor")
                .required(false)
                .index(1)
                .value_hint(ValueHint::FilePath),
        )
        .get_matches();

    let path = matches.get_one::<String>("path").map(PathBuf::from);
    if let Err(err) = viewer::viewer::run_viewer(path) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
