use std::io;
use std::process::ExitCode;

use clap::Parser;

use pipesay::cli::{run, Args};
use pipesay::error::Exit;
use pipesay::input::stdin_is_tty;

fn main() -> ExitCode {
    pretty_env_logger::init();
    let args = Args::parse();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let stderr = io::stderr();
    let result = run(&args, stdin_is_tty(), stdin.lock(), &mut stdout.lock(), &mut stderr.lock());

    match result {
        Ok(exit) => exit.into(),
        Err(e) => {
            eprintln!("Error: {e:#}");
            Exit::Failure.into()
        }
    }
}
