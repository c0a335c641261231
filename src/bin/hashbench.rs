#![deny(unsafe_code)]

use mimalloc::MiMalloc;

/// High-performance memory allocator for the benchmark payloads.
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

use std::{env, io, process::ExitCode};

fn main() -> ExitCode {
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();
    cli::run_with(env::args_os(), &mut stdout, &mut stderr)
}
