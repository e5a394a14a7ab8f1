//! Command line interface and pipeline orchestration.
//!
//! The pipeline is a fixed sequence: load, profile, clean, explore, render
//! charts, validate hypotheses, print conclusions. A dataset that cannot be
//! loaded aborts the run after a message; the process still exits normally.

use crate::analysis;
use crate::analysis::cleaning::CleanStats;
use crate::charts;
use crate::config::RunConfig;
use crate::report;
use anyhow::{Context as _, Result};
use chrono::Local;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "vgsales",
    about = "Exploratory analysis of the video game sales dataset"
)]
pub struct Cli {
    /// Path to the sales CSV. Defaults to the container path, then to
    /// data/vgsales.csv.
    #[arg(short, long)]
    pub data: Option<PathBuf>,

    /// Directory the chart panel is written to. Defaults to the container
    /// path, then to output/.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn run(cli: Cli) -> Result<()> {
    let config = RunConfig::resolve(cli.data, cli.output);
    info!(
        "analysing {} (reference year {})",
        config.data_path.display(),
        config.reference_year
    );

    report::banner("VIDEO GAME SALES ANALYSIS");
    println!(
        "Analysis date: {}",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    );

    let Some(df) = analysis::load_dataset(&config.data_path) else {
        println!("\nThe dataset could not be loaded.");
        println!("Download the video game sales dataset and check the path.");
        return Ok(());
    };

    report::banner("INITIAL EXPLORATION");
    let profile = analysis::profile_df(&df).context("profiling failed")?;
    analysis::print_profile(&df, &profile);

    report::banner("DATA CLEANING");
    let (cleaned, stats) =
        analysis::clean_df(&df, config.reference_year).context("cleaning failed")?;
    print_clean_summary(&stats);

    report::banner("EXPLORATORY DATA ANALYSIS");
    analysis::print_exploration(&cleaned, config.top_n)?;

    report::banner("VISUALISATIONS");
    config.ensure_output_dir()?;
    let chart_path = config.chart_path();
    charts::render_panel(&cleaned, &config.chart, &chart_path)?;
    println!("Charts saved to '{}'", chart_path.display());

    report::banner("HYPOTHESIS VALIDATION");
    let verdicts = analysis::validate_all(&cleaned)?;
    analysis::print_verdicts(&verdicts);

    report::print_conclusions();

    println!("\n✓ Analysis finished");
    Ok(())
}

fn print_clean_summary(stats: &CleanStats) {
    println!("✓ Duplicates removed: {}", stats.duplicates_removed);
    println!("✓ Rows with null Year removed: {}", stats.null_year_removed);
    println!(
        "✓ Rows with null Publisher removed: {}",
        stats.null_publisher_removed
    );
    println!(
        "✓ Rows with out-of-range Year removed: {}",
        stats.out_of_range_year_removed
    );
    for (column, count) in &stats.negative_sales_removed {
        println!("✓ Rows with negative {column} removed: {count}");
    }

    println!("\nCLEANING SUMMARY:");
    println!("  Rows in: {}", stats.rows_in);
    println!("  Rows out: {}", stats.rows_out);
    println!(
        "  Rows removed: {} ({:.2}%)",
        stats.rows_removed(),
        stats.removed_pct()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }
}
