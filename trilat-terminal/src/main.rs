/// Trilat - solve a three-sphere scene from the terminal
///
/// Usage:
///   trilat [scene-file] [--scad <out.scad>] [--epsilon <tolerance>] [--reject-containment]
///
/// Without a scene file the built-in three-beacon scene is solved.
/// Set RUST_LOG (e.g. `RUST_LOG=trilat_core=debug`) for diagnostics.

use std::env;
use std::io::{self, stdout};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use trilat_terminal::TrilatApp;

fn main() -> io::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let app = TrilatApp::from_args(&args)?;

    if app.run(&mut stdout())? {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
