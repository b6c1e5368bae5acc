//! Reconstruction of logical records from physical rows
//!
//! Crime logs scraped from PDFs and HTML tables spread one incident over
//! several rows: the first carries the case number, the following rows
//! carry overflow text for the location, the description or the end of a
//! date range. Page breaks repeat the header row and add banners.
//!
//! # Stages
//!
//! - [`header_filter`] - Drops repeated headers, banners and blank rows
//! - [`boundary`] - Opens a record at each key row, merges the rest
//! - [`merge`] - Per-role merge policies for continuation values
//! - [`assembler`] - Runs the stages over a whole source
//! - [`stats`] - Row accounting

pub mod assembler;
pub mod boundary;
pub mod header_filter;
pub mod merge;
pub mod stats;

#[cfg(test)]
mod tests;

pub use assembler::RecordAssembler;
pub use boundary::{Assembly, BoundaryDetector};
pub use header_filter::{RowFilter, RowKind};
pub use merge::{MergePolicy, merge_into};
pub use stats::AssemblyStats;
