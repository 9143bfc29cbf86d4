//! Descriptive statistics and the serialized summary text.

use std::fmt::Write;

use crate::error::DataError;
use crate::model::{DataRow, Dataset};

/// Min/max of a single measurement field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldRange {
    pub min: f64,
    pub max: f64,
}

impl FieldRange {
    fn fold(values: impl Iterator<Item = f64>) -> Option<Self> {
        values.fold(None, |acc, v| match acc {
            None => Some(Self { min: v, max: v }),
            Some(r) => Some(Self {
                min: r.min.min(v),
                max: r.max.max(v),
            }),
        })
    }
}

/// Derived view of a [`Dataset`]: row count, per-field ranges, and the full
/// textual rendering sent verbatim to the inference model and the UI.
///
/// Pure and deterministic given the same dataset; recomputed on demand.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetSummary {
    pub count: usize,
    pub aoa: FieldRange,
    pub lift: FieldRange,
    pub drag: FieldRange,
    pub cl: FieldRange,
    pub cd: FieldRange,
    text: String,
}

impl DatasetSummary {
    pub(crate) fn compute(dataset: &Dataset) -> Result<Self, DataError> {
        let rows = dataset.rows();
        if rows.is_empty() {
            return Err(DataError::EmptyDataset);
        }

        // fold() always yields Some here since rows is non-empty
        let range = |f: fn(&DataRow) -> f64| {
            FieldRange::fold(rows.iter().map(f)).ok_or(DataError::EmptyDataset)
        };

        let aoa = range(|r| r.aoa_deg)?;
        let lift = range(|r| r.lift_mn)?;
        let drag = range(|r| r.drag_mn)?;
        let cl = range(|r| r.cl)?;
        let cd = range(|r| r.cd)?;

        let text = render_text(rows, rows.len(), aoa, lift, drag, cl, cd);

        Ok(Self {
            count: rows.len(),
            aoa,
            lift,
            drag,
            cl,
            cd,
            text,
        })
    }

    /// The serialized summary, exactly as it is sent to the model.
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Formatting contract: counts as integers, force ranges (mN) to one decimal,
/// coefficient ranges to three decimals, AoA in its minimal form ("0 to 5").
fn render_text(
    rows: &[DataRow],
    count: usize,
    aoa: FieldRange,
    lift: FieldRange,
    drag: FieldRange,
    cl: FieldRange,
    cd: FieldRange,
) -> String {
    let mut text = String::new();
    let _ = writeln!(text, "Wind Tunnel Test Data Summary:");
    let _ = writeln!(text, "- Data Points: {count}");
    let _ = writeln!(
        text,
        "- Angle of Attack Range: {}\u{b0} to {}\u{b0}",
        aoa.min, aoa.max
    );
    let _ = writeln!(text, "- Lift Range: {:.1} to {:.1} mN", lift.min, lift.max);
    let _ = writeln!(text, "- Drag Range: {:.1} to {:.1} mN", drag.min, drag.max);
    let _ = writeln!(
        text,
        "- Lift Coefficient Range: {:.3} to {:.3}",
        cl.min, cl.max
    );
    let _ = writeln!(
        text,
        "- Drag Coefficient Range: {:.3} to {:.3}",
        cd.min, cd.max
    );
    let _ = writeln!(text);
    let _ = writeln!(text, "Key Data Points:");
    let _ = writeln!(
        text,
        "{:>9}  {:>9}  {:>6}  {:>9}  {:>6}",
        "AoA (deg)", "Lift (mN)", "Cl", "Drag (mN)", "Cd"
    );
    for row in rows {
        let _ = writeln!(
            text,
            "{:>9}  {:>9.1}  {:>6.3}  {:>9.1}  {:>6.3}",
            row.aoa_deg, row.lift_mn, row.cl, row.drag_mn, row.cd
        );
    }
    text
}
