//! Hypothesis checks against fixed thresholds.
//!
//! Three claims about the market are tested on the cleaned table and each
//! resolves to a binary verdict:
//!
//! - H1: action games outsell every other genre.
//! - H2: global sales trended upwards between 2000 and 2016.
//! - H3: the top publishers hold a concentrated share of the market.
//!
//! A check whose columns are missing is skipped rather than failed.

use super::explore;
use super::types::{columns, HypothesisVerdict};
use anyhow::Result;
use polars::prelude::*;

/// Genre H1 expects on top.
const EXPECTED_TOP_GENRE: &str = "Action";
/// Window for the H2 trend check, inclusive.
const TREND_START: i32 = 2000;
const TREND_END: i32 = 2016;
/// Top-5 publisher share above which H3 calls the market concentrated.
const CONCENTRATION_THRESHOLD_PCT: f64 = 30.0;

/// H1: the leading genre by summed global sales is Action.
pub fn leading_genre(df: &DataFrame) -> Result<Option<HypothesisVerdict>> {
    let Some(by_genre) = explore::sum_by(df, columns::GENRE, columns::GLOBAL_SALES)? else {
        return Ok(None);
    };
    let Some((leader, sales)) = by_genre.first().cloned() else {
        return Ok(None);
    };

    let total: f64 = by_genre.iter().map(|(_, v)| v).sum();
    let share = if total > 0.0 { sales / total * 100.0 } else { 0.0 };

    Ok(Some(HypothesisVerdict {
        label: format!("H1: {EXPECTED_TOP_GENRE} games lead global sales"),
        confirmed: leader == EXPECTED_TOP_GENRE,
        details: vec![
            format!("Leading genre: {leader}"),
            format!("Total sales: {sales:.2}M"),
            format!("Share of all sales: {share:.2}%"),
        ],
    }))
}

/// H2: yearly global sales correlate positively with the year over
/// 2000 to 2016.
pub fn rising_trend(df: &DataFrame) -> Result<Option<HypothesisVerdict>> {
    let Some(yearly) = explore::sum_by_year(df)? else {
        return Ok(None);
    };
    let window: Vec<(i32, f64)> = yearly
        .into_iter()
        .filter(|(year, _)| (TREND_START..=TREND_END).contains(year))
        .collect();

    let label = format!("H2: sales rose between {TREND_START} and {TREND_END}");
    if window.len() < 2 {
        return Ok(Some(HypothesisVerdict {
            label,
            confirmed: false,
            details: vec![format!(
                "Only {} year(s) with data in the window",
                window.len()
            )],
        }));
    }

    let years = Float64Chunked::from_vec(
        "year".into(),
        window.iter().map(|(year, _)| *year as f64).collect(),
    );
    let sales = Float64Chunked::from_vec(
        "sales".into(),
        window.iter().map(|(_, total)| *total).collect(),
    );
    let corr = polars::prelude::cov::pearson_corr(&years, &sales).unwrap_or(0.0);

    Ok(Some(HypothesisVerdict {
        label,
        confirmed: corr > 0.0,
        details: vec![format!("Year-sales correlation: {corr:.3}")],
    }))
}

/// H3: the five largest publishers account for more than 30% of all
/// global sales.
pub fn publisher_concentration(df: &DataFrame) -> Result<Option<HypothesisVerdict>> {
    let Some(by_publisher) = explore::sum_by(df, columns::PUBLISHER, columns::GLOBAL_SALES)?
    else {
        return Ok(None);
    };
    let total: f64 = by_publisher.iter().map(|(_, v)| v).sum();
    if total <= 0.0 {
        return Ok(None);
    }

    let top5: f64 = by_publisher.iter().take(5).map(|(_, v)| v).sum();
    let share = top5 / total * 100.0;

    let mut details = vec![format!("Top 5 publishers hold {share:.2}% of the market")];
    for (rank, (publisher, sales)) in by_publisher.iter().take(5).enumerate() {
        details.push(format!("  {}. {publisher}: {sales:.2}M", rank + 1));
    }

    Ok(Some(HypothesisVerdict {
        label: "H3: a handful of publishers dominates the market".to_string(),
        confirmed: share > CONCENTRATION_THRESHOLD_PCT,
        details,
    }))
}

/// Runs every applicable hypothesis check.
pub fn validate_all(df: &DataFrame) -> Result<Vec<HypothesisVerdict>> {
    let mut verdicts = Vec::new();
    if let Some(v) = leading_genre(df)? {
        verdicts.push(v);
    }
    if let Some(v) = rising_trend(df)? {
        verdicts.push(v);
    }
    if let Some(v) = publisher_concentration(df)? {
        verdicts.push(v);
    }
    Ok(verdicts)
}

pub fn print_verdicts(verdicts: &[HypothesisVerdict]) {
    for verdict in verdicts {
        println!("\n--- {} ---", verdict.label);
        for line in &verdict.details {
            println!("{line}");
        }
        if verdict.confirmed {
            println!("✓ HYPOTHESIS CONFIRMED");
        } else {
            println!("✗ HYPOTHESIS REJECTED");
        }
    }
}
