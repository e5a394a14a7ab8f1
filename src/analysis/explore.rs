//! Exploratory aggregates over the cleaned table.
//!
//! Every operation checks for its columns first and returns `None` when they
//! are missing, so the reporter degrades gracefully on partial schemas. The
//! grouped-sum helpers here also feed the chart renderer and the hypothesis
//! checks.

use super::types::{columns, SalesSummary, TopCount, TopGame, YearSpan};
use anyhow::{Context as _, Result};
use polars::prelude::*;

pub fn has_column(df: &DataFrame, name: &str) -> bool {
    df.get_column_names().iter().any(|n| n.as_str() == name)
}

/// Counts occurrences per distinct value, most frequent first. Ties break
/// alphabetically so listings are stable.
pub fn top_value_counts(
    df: &DataFrame,
    column: &str,
    k: usize,
) -> Result<Option<Vec<TopCount>>> {
    if !has_column(df, column) {
        return Ok(None);
    }

    let grouped = df
        .clone()
        .lazy()
        .group_by([col(column)])
        .agg([len().alias("counts")])
        .collect()
        .with_context(|| format!("failed to count values of '{column}'"))?;

    let keys = grouped
        .column(column)?
        .as_materialized_series()
        .cast(&DataType::String)?;
    let keys = keys.str().map_err(|e| anyhow::anyhow!(e))?;
    let counts = grouped
        .column("counts")?
        .as_materialized_series()
        .cast(&DataType::UInt32)?;
    let counts = counts.u32().map_err(|e| anyhow::anyhow!(e))?;

    let mut entries = Vec::with_capacity(grouped.height());
    for i in 0..grouped.height() {
        let Some(value) = keys.get(i) else { continue };
        entries.push(TopCount {
            value: value.to_string(),
            count: counts.get(i).unwrap_or(0) as usize,
        });
    }
    entries.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.value.cmp(&b.value)));
    entries.truncate(k);
    Ok(Some(entries))
}

/// Sums `value` per distinct `key`, largest first. Null keys are skipped.
pub fn sum_by(df: &DataFrame, key: &str, value: &str) -> Result<Option<Vec<(String, f64)>>> {
    if !has_column(df, key) || !has_column(df, value) {
        return Ok(None);
    }

    let grouped = df
        .clone()
        .lazy()
        .group_by([col(key)])
        .agg([col(value).sum()])
        .collect()
        .with_context(|| format!("failed to aggregate '{value}' by '{key}'"))?;

    let keys = grouped
        .column(key)?
        .as_materialized_series()
        .cast(&DataType::String)?;
    let keys = keys.str().map_err(|e| anyhow::anyhow!(e))?;
    let sums = grouped
        .column(value)?
        .as_materialized_series()
        .cast(&DataType::Float64)?;
    let sums = sums.f64().map_err(|e| anyhow::anyhow!(e))?;

    let mut pairs = Vec::with_capacity(grouped.height());
    for i in 0..grouped.height() {
        let Some(k) = keys.get(i) else { continue };
        pairs.push((k.to_string(), sums.get(i).unwrap_or(0.0)));
    }
    pairs.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.0.cmp(&b.0))
    });
    Ok(Some(pairs))
}

/// Global sales summed per release year, in ascending year order.
pub fn sum_by_year(df: &DataFrame) -> Result<Option<Vec<(i32, f64)>>> {
    if !has_column(df, columns::YEAR) || !has_column(df, columns::GLOBAL_SALES) {
        return Ok(None);
    }

    let grouped = df
        .clone()
        .lazy()
        .group_by([col(columns::YEAR)])
        .agg([col(columns::GLOBAL_SALES).sum()])
        .collect()
        .context("failed to aggregate sales by year")?;

    let years = grouped
        .column(columns::YEAR)?
        .as_materialized_series()
        .cast(&DataType::Int32)?;
    let years = years.i32().map_err(|e| anyhow::anyhow!(e))?;
    let sums = grouped
        .column(columns::GLOBAL_SALES)?
        .as_materialized_series()
        .cast(&DataType::Float64)?;
    let sums = sums.f64().map_err(|e| anyhow::anyhow!(e))?;

    let mut pairs = Vec::with_capacity(grouped.height());
    for i in 0..grouped.height() {
        let Some(year) = years.get(i) else { continue };
        pairs.push((year, sums.get(i).unwrap_or(0.0)));
    }
    pairs.sort_by_key(|(year, _)| *year);
    Ok(Some(pairs))
}

pub fn year_span(df: &DataFrame) -> Result<Option<YearSpan>> {
    if !has_column(df, columns::YEAR) {
        return Ok(None);
    }

    let series = df
        .column(columns::YEAR)?
        .as_materialized_series()
        .cast(&DataType::Int32)
        .context("Year column is not numeric")?;
    let ca = series.i32().map_err(|e| anyhow::anyhow!(e))?;
    let (Some(min), Some(max)) = (ca.min(), ca.max()) else {
        return Ok(None);
    };

    let by_year = top_value_counts(df, columns::YEAR, 1)?
        .unwrap_or_default();
    let most_common = by_year
        .first()
        .and_then(|t| t.value.parse::<f64>().ok())
        .map(|v| v as i32)
        .unwrap_or(min);

    Ok(Some(YearSpan {
        min,
        max,
        most_common,
    }))
}

pub fn sales_summary(df: &DataFrame) -> Result<Option<SalesSummary>> {
    if !has_column(df, columns::GLOBAL_SALES) || df.height() == 0 {
        return Ok(None);
    }

    let series = df
        .column(columns::GLOBAL_SALES)?
        .as_materialized_series()
        .cast(&DataType::Float64)?;
    let ca = series.f64().map_err(|e| anyhow::anyhow!(e))?;

    Ok(Some(SalesSummary {
        total: ca.sum().unwrap_or(0.0),
        mean: ca.mean().unwrap_or(0.0),
        median: ca.median().unwrap_or(0.0),
        best: ca.max().unwrap_or(0.0),
    }))
}

/// Best sellers by global sales. Requires the full identifying column set.
pub fn top_games(df: &DataFrame, k: usize) -> Result<Option<Vec<TopGame>>> {
    let needed = [
        columns::NAME,
        columns::PLATFORM,
        columns::YEAR,
        columns::GENRE,
        columns::GLOBAL_SALES,
    ];
    if needed.iter().any(|c| !has_column(df, c)) {
        return Ok(None);
    }

    let names = df.column(columns::NAME)?.as_materialized_series().clone();
    let names = names.str().map_err(|e| anyhow::anyhow!(e))?;
    let platforms = df
        .column(columns::PLATFORM)?
        .as_materialized_series()
        .clone();
    let platforms = platforms.str().map_err(|e| anyhow::anyhow!(e))?;
    let genres = df.column(columns::GENRE)?.as_materialized_series().clone();
    let genres = genres.str().map_err(|e| anyhow::anyhow!(e))?;
    let years = df
        .column(columns::YEAR)?
        .as_materialized_series()
        .cast(&DataType::Int32)?;
    let years = years.i32().map_err(|e| anyhow::anyhow!(e))?;
    let sales = df
        .column(columns::GLOBAL_SALES)?
        .as_materialized_series()
        .cast(&DataType::Float64)?;
    let sales = sales.f64().map_err(|e| anyhow::anyhow!(e))?;

    let mut games = Vec::with_capacity(df.height());
    for i in 0..df.height() {
        games.push(TopGame {
            name: names.get(i).unwrap_or("").to_string(),
            platform: platforms.get(i).unwrap_or("").to_string(),
            year: years.get(i).unwrap_or(0),
            genre: genres.get(i).unwrap_or("").to_string(),
            global_sales: sales.get(i).unwrap_or(0.0),
        });
    }
    games.sort_by(|a, b| {
        b.global_sales
            .partial_cmp(&a.global_sales)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.name.cmp(&b.name))
    });
    games.truncate(k);
    Ok(Some(games))
}

/// Summed sales per region. `None` unless all four region columns exist.
pub fn regional_totals(df: &DataFrame) -> Result<Option<Vec<(String, f64)>>> {
    const REGIONS: [(&str, &str); 4] = [
        (columns::NA_SALES, "North America"),
        (columns::EU_SALES, "Europe"),
        (columns::JP_SALES, "Japan"),
        (columns::OTHER_SALES, "Other"),
    ];
    if REGIONS.iter().any(|(c, _)| !has_column(df, c)) {
        return Ok(None);
    }

    let mut totals = Vec::with_capacity(REGIONS.len());
    for (column, label) in REGIONS {
        let series = df
            .column(column)?
            .as_materialized_series()
            .cast(&DataType::Float64)?;
        let ca = series.f64().map_err(|e| anyhow::anyhow!(e))?;
        totals.push((label.to_string(), ca.sum().unwrap_or(0.0)));
    }
    Ok(Some(totals))
}

/// Global sales values below the 95th percentile, for the distribution
/// panel. The tail is cut so a handful of blockbusters does not flatten
/// the histogram.
pub fn sales_below_p95(df: &DataFrame) -> Result<Option<Vec<f64>>> {
    if !has_column(df, columns::GLOBAL_SALES) {
        return Ok(None);
    }

    let series = df
        .column(columns::GLOBAL_SALES)?
        .as_materialized_series()
        .cast(&DataType::Float64)?;
    let ca = series.f64().map_err(|e| anyhow::anyhow!(e))?;
    let Some(cutoff) = ca.quantile(0.95, QuantileMethod::Linear).unwrap_or(None) else {
        return Ok(Some(Vec::new()));
    };

    Ok(Some(
        ca.into_iter().flatten().filter(|v| *v < cutoff).collect(),
    ))
}

/// Prints the exploratory section of the report.
pub fn print_exploration(df: &DataFrame, top_n: usize) -> Result<()> {
    if let Some(genres) = top_value_counts(df, columns::GENRE, top_n)? {
        println!("\n--- Top {top_n} genres by title count ---");
        for entry in &genres {
            println!("  {:<16} {}", entry.value, entry.count);
        }
    }

    if let Some(platforms) = top_value_counts(df, columns::PLATFORM, top_n)? {
        println!("\n--- Top {top_n} platforms by title count ---");
        for entry in &platforms {
            println!("  {:<16} {}", entry.value, entry.count);
        }
    }

    if let Some(span) = year_span(df)? {
        println!("\n--- Release years ---");
        println!("Earliest year: {}", span.min);
        println!("Latest year: {}", span.max);
        println!("Busiest year: {}", span.most_common);
    }

    if let Some(sales) = sales_summary(df)? {
        println!("\n--- Global sales (millions of units) ---");
        println!("Total: {:.2}M", sales.total);
        println!("Mean per title: {:.2}M", sales.mean);
        println!("Median: {:.2}M", sales.median);
        println!("Best seller: {:.2}M", sales.best);
    }

    if let Some(games) = top_games(df, top_n)? {
        println!("\n--- Top {top_n} best-selling games ---");
        for game in &games {
            println!(
                "  {:<32} {:<6} {:<6} {:<12} {:.2}M",
                game.name, game.platform, game.year, game.genre, game.global_sales
            );
        }
    }

    Ok(())
}
