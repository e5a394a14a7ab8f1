//! Entry point.
//!
//! ```text
//! main()
//!   │
//!   ├─> Initialize tracing
//!   │
//!   ├─> Parse CLI arguments (clap)
//!   │
//!   └─> Run the analysis pipeline
//!       load -> profile -> clean -> explore -> charts -> hypotheses
//! ```
//!
//! A missing dataset ends the run early with a message but the process
//! still exits successfully.

#![warn(clippy::all, rust_2018_idioms)]

use clap::Parser as _;
use vgsales::cli::Cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    vgsales::logging::init();

    let cli = Cli::parse();
    vgsales::cli::run(cli)?;
    Ok(())
}
