//! Dataset rows and CSV loading.

use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::error::DataError;
use crate::summary::DatasetSummary;

/// One wind tunnel measurement.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct DataRow {
    /// Angle of attack in degrees.
    #[serde(rename = "AoA (deg)")]
    pub aoa_deg: f64,
    /// Lift force in millinewtons.
    #[serde(rename = "Lift (mN)")]
    pub lift_mn: f64,
    /// Lift coefficient (dimensionless).
    #[serde(rename = "Cl")]
    pub cl: f64,
    /// Drag force in millinewtons.
    #[serde(rename = "Drag (mN)")]
    pub drag_mn: f64,
    /// Drag coefficient (dimensionless).
    #[serde(rename = "Cd")]
    pub cd: f64,
}

/// The full ordered set of measurements, loaded once and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    rows: Vec<DataRow>,
}

impl Dataset {
    /// Load the dataset from a CSV file.
    ///
    /// Fails with [`DataError::NotFound`] if the file is missing; callers
    /// are expected to surface that error and skip all dataset-dependent
    /// features rather than retry.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DataError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(DataError::NotFound(path.to_path_buf()));
        }

        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(path)?;

        let mut rows = Vec::new();
        for (idx, result) in reader.deserialize::<DataRow>().enumerate() {
            // Row numbering is 1-based and counts the header line.
            let row = result.map_err(|e| DataError::Parse {
                row: idx + 2,
                reason: e.to_string(),
            })?;
            rows.push(row);
        }

        info!("loaded {} measurements from {}", rows.len(), path.display());
        Ok(Self { rows })
    }

    /// Build a dataset from in-memory rows (fixtures, tests).
    pub fn from_rows(rows: Vec<DataRow>) -> Self {
        Self { rows }
    }

    /// The measurements, in file order.
    pub fn rows(&self) -> &[DataRow] {
        &self.rows
    }

    /// Number of measurements.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the dataset has no measurements.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Compute the descriptive summary. Pure and deterministic; fails only
    /// for an empty dataset.
    pub fn summarize(&self) -> Result<DatasetSummary, DataError> {
        DatasetSummary::compute(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE_CSV: &str = "\
AoA (deg),Lift (mN),Cl,Drag (mN),Cd
0,10.0,0.100,2.0,0.020
5,25.0,0.250,3.0,0.030
";

    fn write_csv(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_sample_csv() {
        let file = write_csv(SAMPLE_CSV);
        let dataset = Dataset::load(file.path()).unwrap();

        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.rows()[0].aoa_deg, 0.0);
        assert_eq!(dataset.rows()[1].lift_mn, 25.0);
        assert_eq!(dataset.rows()[1].cd, 0.03);
    }

    #[test]
    fn test_load_missing_file() {
        let err = Dataset::load("no/such/wind_tunnel_test_data.csv").unwrap_err();
        assert!(matches!(err, DataError::NotFound(_)));
    }

    #[test]
    fn test_load_bad_numeric_cell() {
        let file = write_csv(
            "AoA (deg),Lift (mN),Cl,Drag (mN),Cd\n0,10.0,0.100,2.0,0.020\n5,not-a-number,0.250,3.0,0.030\n",
        );
        let err = Dataset::load(file.path()).unwrap_err();
        match err {
            DataError::Parse { row, .. } => assert_eq!(row, 3),
            other => panic!("expected parse error, got {other}"),
        }
    }

    #[test]
    fn test_load_empty_file_gives_empty_dataset() {
        let file = write_csv("AoA (deg),Lift (mN),Cl,Drag (mN),Cd\n");
        let dataset = Dataset::load(file.path()).unwrap();
        assert!(dataset.is_empty());
    }
}
