//! Consistency checks for generated demo datasets.

pub mod engine;
pub mod errors;
pub mod model;

pub use engine::EvaluationEngine;
pub use errors::EvalError;
pub use model::{CheckStats, EvaluateOptions, EvaluationReport, RowCounts, Violation};
