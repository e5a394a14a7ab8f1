use crate::error::LoadError;
use polars::prelude::*;
use std::path::Path;
use tracing::{error, info};

/// Reads the dataset, distinguishing a missing file from any other fault.
pub fn read_csv(path: &Path) -> Result<DataFrame, LoadError> {
    if !path.exists() {
        return Err(LoadError::NotFound(path.to_path_buf()));
    }

    LazyCsvReader::new(path)
        .with_infer_schema_length(Some(10000))
        .with_has_header(true)
        .finish()
        .and_then(LazyFrame::collect)
        .map_err(|source| LoadError::Failed {
            path: path.to_path_buf(),
            source,
        })
}

/// Loads the dataset for the pipeline.
///
/// Both failure kinds are reported to the user and downgraded to `None`;
/// the caller aborts the run on an absent table. On success the table shape
/// and column names are printed.
pub fn load_dataset(path: &Path) -> Option<DataFrame> {
    match read_csv(path) {
        Ok(df) => {
            info!("loaded {}", path.display());
            println!(
                "Dataset loaded: {} rows x {} columns",
                df.height(),
                df.width()
            );
            let names: Vec<&str> = df.get_column_names().iter().map(|n| n.as_str()).collect();
            println!("Columns: {names:?}");
            Some(df)
        }
        Err(err @ LoadError::NotFound(_)) => {
            error!("{err}");
            println!("Error: file not found. Check the dataset path.");
            None
        }
        Err(err) => {
            error!("{err}");
            println!("Error: could not load the dataset ({err}).");
            None
        }
    }
}
