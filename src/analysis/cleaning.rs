//! Ordered cleaning rules for the sales table.
//!
//! Each rule either rewrites a column in place or drops offending rows; the
//! rules run in a fixed order because later ones rely on the earlier ones
//! having run (year range checks assume the column is numeric, the final
//! integer cast assumes out-of-range values are gone). The cleaner always
//! produces a new frame and reports how many rows each rule removed.

use super::types::columns;
use anyhow::{Context as _, Result};
use polars::prelude::*;
use serde::Serialize;
use tracing::debug;

/// Oldest release year considered valid.
pub const MIN_VALID_YEAR: i32 = 1980;

/// Which optional cleaning steps the frame's schema supports.
///
/// Checked once up front; steps whose capability is missing are skipped with
/// a log line instead of failing.
#[derive(Debug, Clone, Default)]
pub struct SchemaCapabilities {
    pub text_columns: Vec<String>,
    pub sales_columns: Vec<String>,
    pub has_year: bool,
    pub has_publisher: bool,
}

pub fn inspect_schema(df: &DataFrame) -> SchemaCapabilities {
    let mut caps = SchemaCapabilities::default();
    for col in df.get_columns() {
        let name = col.name().as_str();
        if col.dtype() == &DataType::String {
            caps.text_columns.push(name.to_string());
        }
        if name.contains(columns::SALES_MARKER) {
            caps.sales_columns.push(name.to_string());
        }
        caps.has_year |= name == columns::YEAR;
        caps.has_publisher |= name == columns::PUBLISHER;
    }
    caps
}

/// Row-removal accounting per cleaning rule. Reported for logging only;
/// no later stage branches on it.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CleanStats {
    pub rows_in: usize,
    pub rows_out: usize,
    pub duplicates_removed: usize,
    pub null_year_removed: usize,
    pub null_publisher_removed: usize,
    pub out_of_range_year_removed: usize,
    /// Per sales column, how many rows its negative-value filter dropped.
    pub negative_sales_removed: Vec<(String, usize)>,
}

impl CleanStats {
    pub fn rows_removed(&self) -> usize {
        self.rows_in - self.rows_out
    }

    pub fn removed_pct(&self) -> f64 {
        if self.rows_in == 0 {
            0.0
        } else {
            (self.rows_removed() as f64 / self.rows_in as f64) * 100.0
        }
    }
}

/// Drops exact duplicate rows, keeping the first occurrence and the
/// original row order.
pub(crate) fn dedup_rows(df: &DataFrame) -> Result<DataFrame> {
    df.clone()
        .lazy()
        .unique_stable(None, UniqueKeepStrategy::First)
        .collect()
        .context("failed to drop duplicate rows")
}

/// Runs the full rule sequence and returns the cleaned frame with its
/// removal accounting.
///
/// `reference_year` is the upper bound for valid release years; the caller
/// reads it from the clock so the routine itself is deterministic. A row
/// that violates several rules is counted by the first rule that drops it.
/// An empty frame flows through unchanged.
pub fn clean_df(df: &DataFrame, reference_year: i32) -> Result<(DataFrame, CleanStats)> {
    let caps = inspect_schema(df);
    let mut stats = CleanStats {
        rows_in: df.height(),
        ..Default::default()
    };

    // 1. Exact duplicate rows
    let mut cleaned = dedup_rows(df)?;
    stats.duplicates_removed = stats.rows_in - cleaned.height();

    // 2. Leading/trailing whitespace in text columns
    if caps.text_columns.is_empty() {
        debug!("no text columns, skipping whitespace trim");
    } else {
        let exprs: Vec<Expr> = caps
            .text_columns
            .iter()
            .map(|name| col(name.as_str()).str().strip_chars(lit(NULL)))
            .collect();
        cleaned = cleaned
            .lazy()
            .with_columns(exprs)
            .collect()
            .context("failed to trim whitespace in text columns")?;
    }

    // 3. Year to numeric; unparseable values become null and their rows go
    if caps.has_year {
        let year = cleaned
            .column(columns::YEAR)?
            .as_materialized_series()
            .cast(&DataType::Float64)
            .context("failed to coerce Year to numeric")?;
        cleaned.replace(columns::YEAR, year)?;

        let before = cleaned.height();
        let mask = cleaned
            .column(columns::YEAR)?
            .as_materialized_series()
            .is_not_null();
        cleaned = cleaned.filter(&mask)?;
        stats.null_year_removed = before - cleaned.height();
    } else {
        debug!("no Year column, skipping year coercion");
    }

    // 4. Rows without a publisher
    if caps.has_publisher {
        let before = cleaned.height();
        let mask = cleaned
            .column(columns::PUBLISHER)?
            .as_materialized_series()
            .is_not_null();
        cleaned = cleaned.filter(&mask)?;
        stats.null_publisher_removed = before - cleaned.height();
    } else {
        debug!("no Publisher column, skipping publisher filter");
    }

    // 5. Years outside the valid range
    if caps.has_year {
        let before = cleaned.height();
        let series = cleaned
            .column(columns::YEAR)?
            .as_materialized_series()
            .cast(&DataType::Float64)?;
        let ca = series.f64().map_err(|e| anyhow::anyhow!(e))?;
        let lower = ca.gt_eq(MIN_VALID_YEAR as f64);
        let upper = ca.lt_eq(reference_year as f64);
        let mask = &lower & &upper;
        cleaned = cleaned.filter(&mask)?;
        stats.out_of_range_year_removed = before - cleaned.height();
    } else {
        debug!("no Year column, skipping year range check");
    }

    // 6. Negative sales figures, column by column in schema order. Filtering
    //    is cumulative: a row negative in several sales columns is counted
    //    against the first one scanned.
    for name in &caps.sales_columns {
        let series = cleaned
            .column(name)?
            .as_materialized_series()
            .cast(&DataType::Float64)
            .with_context(|| format!("sales column '{name}' is not numeric"))?;
        let ca = series.f64().map_err(|e| anyhow::anyhow!(e))?;
        let negatives = ca.lt(0.0).sum().unwrap_or(0) as usize;
        if negatives > 0 {
            let before = cleaned.height();
            let mask = ca.gt_eq(0.0);
            cleaned = cleaned.filter(&mask)?;
            // The keep mask also drops rows whose value is null in this
            // column, so record rows dropped rather than the trigger count.
            stats
                .negative_sales_removed
                .push((name.clone(), before - cleaned.height()));
        }
    }

    // 7. Year to integer, safe now that the column is numeric and in range
    if caps.has_year {
        let year = cleaned
            .column(columns::YEAR)?
            .as_materialized_series()
            .cast(&DataType::Int32)
            .context("failed to cast Year to integer")?;
        cleaned.replace(columns::YEAR, year)?;
    }

    stats.rows_out = cleaned.height();
    Ok((cleaned, stats))
}
