//! # Windlab Data
//!
//! Loading and summarization of wind tunnel test measurements.
//!
//! The dataset is a fixed five-column CSV (`AoA (deg)`, `Lift (mN)`, `Cl`,
//! `Drag (mN)`, `Cd`), loaded once at startup and treated as immutable for
//! the rest of the process. [`Dataset::summarize`] derives the descriptive
//! statistics and the exact summary text that gets sent to the inference
//! model.

mod error;
mod model;
mod summary;

pub use error::DataError;
pub use model::{DataRow, Dataset};
pub use summary::{DatasetSummary, FieldRange};
