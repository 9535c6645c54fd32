#![deny(unsafe_code)]

#[path = "client.rs"]
mod client;

use std::{env, io, process::ExitCode};

fn main() -> ExitCode {
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();
    client::run_with(env::args_os(), |name| env::var_os(name), &mut stdout, &mut stderr)
}
