use serde::Serialize;

/// Column names of the expected dataset schema.
pub mod columns {
    pub const NAME: &str = "Name";
    pub const PLATFORM: &str = "Platform";
    pub const YEAR: &str = "Year";
    pub const GENRE: &str = "Genre";
    pub const PUBLISHER: &str = "Publisher";
    pub const NA_SALES: &str = "NA_Sales";
    pub const EU_SALES: &str = "EU_Sales";
    pub const JP_SALES: &str = "JP_Sales";
    pub const OTHER_SALES: &str = "Other_Sales";
    pub const GLOBAL_SALES: &str = "Global_Sales";

    /// Substring that marks a column as a sales figure.
    pub const SALES_MARKER: &str = "Sales";
}

/// Null accounting for one column.
#[derive(Debug, Clone, Serialize)]
pub struct ColumnNulls {
    pub name: String,
    pub nulls: usize,
    pub pct: f64,
}

/// Descriptive statistics for one numeric column.
#[derive(Debug, Clone, Serialize)]
pub struct NumericSummary {
    pub name: String,
    pub min: Option<f64>,
    pub q1: Option<f64>,
    pub median: Option<f64>,
    pub mean: Option<f64>,
    pub q3: Option<f64>,
    pub max: Option<f64>,
    pub std_dev: Option<f64>,
}

/// Read-only quality report over a raw table.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileReport {
    pub rows: usize,
    pub columns: usize,
    pub null_counts: Vec<ColumnNulls>,
    pub duplicate_rows: usize,
    pub numeric: Vec<NumericSummary>,
}

impl ProfileReport {
    /// Columns that actually contain nulls, in schema order.
    pub fn columns_with_nulls(&self) -> impl Iterator<Item = &ColumnNulls> {
        self.null_counts.iter().filter(|c| c.nulls > 0)
    }
}

/// One entry of a "top N values by count" listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopCount {
    pub value: String,
    pub count: usize,
}

/// Release-year coverage of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearSpan {
    pub min: i32,
    pub max: i32,
    pub most_common: i32,
}

/// Aggregate statistics over global sales, in millions of units.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SalesSummary {
    pub total: f64,
    pub mean: f64,
    pub median: f64,
    pub best: f64,
}

/// One row of the best-seller listing.
#[derive(Debug, Clone, Serialize)]
pub struct TopGame {
    pub name: String,
    pub platform: String,
    pub year: i32,
    pub genre: String,
    pub global_sales: f64,
}

/// Outcome of one hypothesis check against its hard-coded threshold.
#[derive(Debug, Clone, Serialize)]
pub struct HypothesisVerdict {
    pub label: String,
    pub confirmed: bool,
    pub details: Vec<String>,
}
