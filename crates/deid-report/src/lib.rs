//! DEID audit report generation.
//!
//! Builds per-table report matrices from an extracted [`deid_model::DeidInfo`]
//! and renders the reviewer workbook: a catalog sheet of known operations
//! followed by one read-only sheet per table.

mod matrix;
mod xlsx;

pub use matrix::{ReportMatrix, ReportRow, build_matrices, build_matrix};
pub use xlsx::write_report;
