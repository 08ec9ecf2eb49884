#![warn(rust_2018_idioms, unused_lifetimes)]
#![allow(clippy::print_stderr, clippy::print_stdout)]

pub mod handlers;
pub mod models;
pub mod services;

use crate::models::args::Cli;
use crate::services::guard;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let _cli = Cli::parse();

    if let Err(message) = guard::check_invocation(std::env::var("CARGO").ok().as_deref()) {
        anyhow::bail!(message);
    }

    handlers::snapshot::generate_snapshots()
}
