pub mod cleaning;
pub mod explore;
pub mod hypotheses;
pub mod io;
pub mod profiling;
pub mod types;

pub use cleaning::{clean_df, inspect_schema, CleanStats, SchemaCapabilities, MIN_VALID_YEAR};
pub use explore::print_exploration;
pub use hypotheses::{print_verdicts, validate_all};
pub use io::{load_dataset, read_csv};
pub use profiling::{print_profile, profile_df};
pub use types::{
    columns, ColumnNulls, HypothesisVerdict, NumericSummary, ProfileReport, SalesSummary,
    TopCount, TopGame, YearSpan,
};
