//! Read-only quality profiling of the raw table.
//!
//! The profiler reports what the cleaner will later act on: null counts and
//! percentages per column, the number of fully duplicated rows, and
//! descriptive statistics for the numeric columns. It never mutates the
//! frame and holds no state of its own.

use super::cleaning;
use super::types::{ColumnNulls, NumericSummary, ProfileReport};
use anyhow::{Context as _, Result};
use polars::prelude::*;

pub fn profile_df(df: &DataFrame) -> Result<ProfileReport> {
    let rows = df.height();
    let mut null_counts = Vec::new();
    let mut numeric = Vec::new();

    for col in df.get_columns() {
        let name = col.name().to_string();
        let nulls = col.null_count();
        let pct = if rows == 0 {
            0.0
        } else {
            (nulls as f64 / rows as f64) * 100.0
        };
        null_counts.push(ColumnNulls {
            name: name.clone(),
            nulls,
            pct,
        });

        if is_numeric_dtype(col.dtype()) {
            numeric.push(
                summarise_numeric(&name, col)
                    .with_context(|| format!("profiling failed for numeric column '{name}'"))?,
            );
        }
    }

    let duplicate_rows = rows - cleaning::dedup_rows(df)?.height();

    Ok(ProfileReport {
        rows,
        columns: df.width(),
        null_counts,
        duplicate_rows,
        numeric,
    })
}

fn is_numeric_dtype(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
            | DataType::Float32
            | DataType::Float64
    )
}

fn summarise_numeric(name: &str, col: &Column) -> Result<NumericSummary> {
    let series = col
        .as_materialized_series()
        .cast(&DataType::Float64)
        .map_err(|e| anyhow::anyhow!(e))?;
    let ca = series.f64().map_err(|e| anyhow::anyhow!(e))?;

    Ok(NumericSummary {
        name: name.to_string(),
        min: ca.min(),
        q1: ca.quantile(0.25, QuantileMethod::Linear).unwrap_or(None),
        median: ca.median(),
        mean: ca.mean(),
        q3: ca.quantile(0.75, QuantileMethod::Linear).unwrap_or(None),
        max: ca.max(),
        std_dev: ca.std(1),
    })
}

/// Prints the profile along with a preview of the first rows.
pub fn print_profile(df: &DataFrame, report: &ProfileReport) {
    println!("\n--- General information ---");
    println!("{} rows x {} columns", report.rows, report.columns);
    for col in df.get_columns() {
        println!("  {}: {}", col.name(), col.dtype());
    }

    println!("\n--- First 5 rows ---");
    println!("{}", df.head(Some(5)));

    println!("\n--- Descriptive statistics ---");
    for s in &report.numeric {
        println!(
            "  {}: min {} | q1 {} | median {} | mean {} | q3 {} | max {} | std {}",
            s.name,
            fmt_opt(s.min),
            fmt_opt(s.q1),
            fmt_opt(s.median),
            fmt_opt(s.mean),
            fmt_opt(s.q3),
            fmt_opt(s.max),
            fmt_opt(s.std_dev),
        );
    }

    println!("\n--- Null values per column ---");
    let mut any = false;
    for c in report.columns_with_nulls() {
        println!("  {}: {} ({:.2}%)", c.name, c.nulls, c.pct);
        any = true;
    }
    if !any {
        println!("  none");
    }

    println!("\n--- Duplicated rows ---");
    println!("Total duplicates: {}", report.duplicate_rows);
}

fn fmt_opt(v: Option<f64>) -> String {
    v.map(|v| format!("{v:.2}")).unwrap_or_else(|| "-".to_string())
}
