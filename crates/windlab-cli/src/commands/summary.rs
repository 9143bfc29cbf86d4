//! Summary command - print the dataset overview.

use std::path::Path;

pub(crate) fn run(data_path: &Path) -> miette::Result<()> {
    let summary = super::load_summary(data_path)?;
    print!("{}", summary.text());
    Ok(())
}
