//! Gradewalk - walk a list of grades forward, mark it in place, walk it back.
//!
//! # Usage
//!
//! ```bash
//! gradewalk
//! RUST_LOG=gradewalk=debug gradewalk
//! ```

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;

use gradewalk::config::DEFAULT_LOG_LEVEL;
use gradewalk::walkthrough::Walkthrough;

/// Walk a list of grades forward, mark each one, and walk it back
#[derive(Parser, Debug)]
#[command(name = "gradewalk", version, about, long_about = None)]
struct Cli {}

fn main() -> Result<()> {
    // Initialize logging; stdout is reserved for the walkthrough
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(DEFAULT_LOG_LEVEL.into())
                .from_env_lossy(),
        )
        .init();

    Cli::parse();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    Walkthrough::new()
        .run(&mut out)
        .context("Walkthrough error")?;
    out.flush().context("Failed to flush stdout")
}
