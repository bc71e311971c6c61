//! Palex - command-line tool for extracting color palettes from texture images

use std::process::ExitCode;

use palex::cli;

fn main() -> ExitCode {
    cli::run()
}
