//! Export core modules shared by the CLI report writers.

pub mod sheet;

#[cfg(feature = "excel")]
pub mod excel_core;

pub use sheet::{Cell, ReportSheet};
