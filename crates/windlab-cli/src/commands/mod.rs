pub(crate) mod ask;
pub(crate) mod chat;
pub(crate) mod info;
pub(crate) mod ping;
pub(crate) mod summary;

use std::path::Path;

use windlab_data::{Dataset, DatasetSummary};

/// Load the dataset and compute its summary, converting failures into
/// user-facing diagnostics. A missing or empty dataset disables every
/// dataset-dependent command, but never crashes the process.
pub(crate) fn load_summary(data_path: &Path) -> miette::Result<DatasetSummary> {
    let dataset = Dataset::load(data_path).map_err(|e| miette::miette!("{}", e))?;
    dataset.summarize().map_err(|e| miette::miette!("{}", e))
}
