//! End-to-end run of the analysis pipeline on a fixture dataset.
//!
//! The fixture contains one exact duplicate, two unparseable release years,
//! one missing publisher, two out-of-range years and one row with negative
//! sales, so every cleaning rule fires exactly as accounted below.

use polars::prelude::*;
use std::path::Path;
use vgsales::analysis::{self, columns, explore, hypotheses};

const FIXTURE: &str = "testdata/vgsales_sample.csv";
const REF_YEAR: i32 = 2025;

fn load_fixture() -> DataFrame {
    analysis::load_dataset(Path::new(FIXTURE)).expect("fixture should load")
}

#[test]
fn test_fixture_loads_with_expected_shape() {
    let df = load_fixture();
    assert_eq!(df.height(), 20);
    assert_eq!(df.width(), 10);
    let names: Vec<&str> = df.get_column_names().iter().map(|n| n.as_str()).collect();
    assert_eq!(names[0], columns::NAME);
    assert_eq!(names[9], columns::GLOBAL_SALES);
}

#[test]
fn test_profile_reports_raw_quality_issues() {
    let df = load_fixture();
    let report = analysis::profile_df(&df).expect("profiling succeeds");

    assert_eq!(report.rows, 20);
    assert_eq!(report.duplicate_rows, 1, "Wii Sports appears twice");

    let year = report
        .null_counts
        .iter()
        .find(|c| c.name == columns::YEAR)
        .expect("Year profiled");
    assert_eq!(year.nulls, 1, "only the empty field is null before coercion");

    let publisher = report
        .null_counts
        .iter()
        .find(|c| c.name == columns::PUBLISHER)
        .expect("Publisher profiled");
    assert_eq!(publisher.nulls, 1);

    // Year arrives as text in this fixture, so five numeric columns remain.
    assert_eq!(report.numeric.len(), 5);
}

#[test]
fn test_cleaning_accounts_for_every_removed_row() {
    let df = load_fixture();
    let (cleaned, stats) = analysis::clean_df(&df, REF_YEAR).expect("cleaning succeeds");

    assert_eq!(stats.rows_in, 20);
    assert_eq!(stats.duplicates_removed, 1);
    assert_eq!(stats.null_year_removed, 2, "empty field plus unparseable text");
    assert_eq!(stats.null_publisher_removed, 1);
    assert_eq!(stats.out_of_range_year_removed, 2, "1975 and 2050");
    assert_eq!(
        stats.negative_sales_removed,
        vec![("NA_Sales".to_string(), 1)]
    );
    assert_eq!(stats.rows_out, 13);
    assert_eq!(cleaned.height(), 13);

    // Invariants on the survivors
    assert_eq!(cleaned.column(columns::PUBLISHER).unwrap().null_count(), 0);
    assert_eq!(
        cleaned.column(columns::YEAR).unwrap().dtype(),
        &DataType::Int32
    );
    let years = cleaned
        .column(columns::YEAR)
        .unwrap()
        .as_materialized_series()
        .i32()
        .unwrap()
        .clone();
    assert!(years.into_iter().flatten().all(|y| (1980..=REF_YEAR).contains(&y)));

    let names: Vec<String> = cleaned
        .column(columns::NAME)
        .unwrap()
        .as_materialized_series()
        .str()
        .unwrap()
        .into_iter()
        .flatten()
        .map(str::to_string)
        .collect();
    assert!(names.contains(&"Tetris".to_string()), "whitespace trimmed");
    assert!(!names.contains(&" Tetris ".to_string()));
}

#[test]
fn test_exploration_facts_derive_from_cleaned_table() {
    let df = load_fixture();
    let (cleaned, _) = analysis::clean_df(&df, REF_YEAR).expect("cleaning succeeds");

    let genres = explore::top_value_counts(&cleaned, columns::GENRE, 3)
        .unwrap()
        .unwrap();
    assert_eq!(genres[0].value, "Action");
    assert_eq!(genres[0].count, 4);

    let games = explore::top_games(&cleaned, 3).unwrap().unwrap();
    assert_eq!(games[0].name, "Wii Sports");
    assert_eq!(games[0].year, 2006);
    assert!((games[0].global_sales - 82.74).abs() < 1e-9);

    let span = explore::year_span(&cleaned).unwrap().unwrap();
    assert_eq!(span.min, 1985);
    assert_eq!(span.max, 2013);
    assert_eq!(span.most_common, 2008, "2008 wins the tie against 2013");

    let regions = explore::regional_totals(&cleaned).unwrap().unwrap();
    assert_eq!(regions.len(), 4);
    assert!(regions[0].1 > regions[2].1, "NA outsells Japan in the fixture");
}

#[test]
fn test_hypothesis_verdicts_on_fixture() {
    let df = load_fixture();
    let (cleaned, _) = analysis::clean_df(&df, REF_YEAR).expect("cleaning succeeds");

    let verdicts = hypotheses::validate_all(&cleaned).expect("validation succeeds");
    assert_eq!(verdicts.len(), 3);

    // Sports outsells Action here thanks to Wii Sports.
    assert!(verdicts[0].label.starts_with("H1"));
    assert!(!verdicts[0].confirmed);

    // Nintendo alone guarantees a concentrated market.
    assert!(verdicts[2].label.starts_with("H3"));
    assert!(verdicts[2].confirmed);
}

#[test]
fn test_missing_dataset_is_downgraded_to_absent() {
    assert!(analysis::load_dataset(Path::new("testdata/nope.csv")).is_none());
}
