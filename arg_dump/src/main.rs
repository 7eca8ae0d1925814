//! # Argument Dump
//!
//! Prints the arguments this process was started with.

use std::env;
use std::io;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args_os()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();

    // Always exits successfully; a closed stdout is only worth a warning.
    let stdout = io::stdout();
    if let Err(err) = arg_dump::dump_arguments(&mut stdout.lock(), &args) {
        log::warn!("failed to write arguments: {}", err);
    }
}
