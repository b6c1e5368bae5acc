//! Crime log reconstruction pipeline
//!
//! Ties the stages together for one source at a time:
//!
//! 1. **Row filtering**: repeated headers, banners and blank rows are dropped
//! 2. **Classification**: headers (or sampled values) bind columns to roles
//! 3. **Assembly**: key rows open records, continuation rows are merged
//! 4. **Date/time folding**: configured time columns join their date column
//! 5. **Normalization**: every value is normalized according to its role
//! 6. **Schema shaping**: the output columns are chosen
//!
//! # Example Usage
//!
//! ```rust
//! use crimelog_processor::{Config, Pipeline, SourceTable};
//!
//! # fn example() -> crimelog_processor::Result<()> {
//! let pipeline = Pipeline::new(Config::default())?;
//! let source = SourceTable::from_values(
//!     "campus",
//!     &["Case#", "Location", "Occurred"],
//!     &[
//!         vec!["K1", "Lobby", "0836-0917"],
//!         vec!["", "Hall", ""],
//!     ],
//! );
//!
//! let result = pipeline.process(&source);
//! assert_eq!(result.records[0].get("Location"), Some("Lobby, Hall"));
//! println!("{}", result.summary());
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod orchestrator;
pub mod schema;
pub mod stats;

#[cfg(test)]
mod tests;

pub use orchestrator::Pipeline;
pub use schema::OutputSchema;
pub use stats::{PipelineResult, PipelineStats};
