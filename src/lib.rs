//! # vgsales - Video Game Sales Analysis
//!
//! One-shot exploratory analysis of a video-game sales CSV: profile the raw
//! table, clean it through a fixed rule sequence, print summary statistics,
//! render a chart panel and check a few market hypotheses.
//!
//! ## Quick Start
//!
//! ```no_run
//! use vgsales::analysis;
//! use vgsales::config::RunConfig;
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = RunConfig::resolve(None, None);
//! if let Some(df) = analysis::load_dataset(&config.data_path) {
//!     let (cleaned, stats) = analysis::clean_df(&df, config.reference_year)?;
//!     println!("kept {} of {} rows", stats.rows_out, stats.rows_in);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Core Modules
//!
//! - [`analysis`]: loading, profiling, cleaning, exploration and the
//!   hypothesis checks
//! - [`charts`]: the 2x3 chart panel renderer
//! - [`config`]: path resolution and chart styling
//! - [`report`]: banners and the closing conclusions
//! - [`error`]: loader boundary errors
//!
//! The cleaned frame is derived once from the raw frame and treated as
//! read-only by every reporter.

#![warn(clippy::all, rust_2018_idioms)]

pub mod analysis;
pub mod charts;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod report;
