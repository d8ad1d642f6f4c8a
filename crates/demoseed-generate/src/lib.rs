//! Demo dataset generator for demoseed.
//!
//! Builds clients, orders and order items with consistent foreign keys from
//! a `SeedConfig`, then writes one CSV file per entity.

pub mod clients;
pub mod engine;
pub mod errors;
pub mod model;
pub mod orders;
pub mod output;
pub mod providers;
pub mod sampling;

pub use engine::{GenerationEngine, GenerationResult};
pub use errors::GenerationError;
pub use model::{Dataset, FileReport, GenerateOptions, GenerationReport};
pub use providers::{LocaleKey, PersonaProvider, provider_for};
