//! # CLI Argument Definitions
//!
//! The snapshot tool is deliberately a zero-argument program: the flag
//! catalog, the denylist and the output root are compiled in. `clap` still
//! owns the surface so `--help` and `--version` behave like the rest of the
//! tooling.

use clap::Parser;

/// The main CLI structure parsing command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "cargo snapshot")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Regenerates the playground snapshot projects")]
pub struct Cli {}
