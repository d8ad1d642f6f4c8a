//! Core contracts for demoseed.
//!
//! This crate defines the demo record types (clients, orders, order items),
//! the static product catalog, and the generation config shared by the
//! generator, the evaluator, and the CLI.

pub mod catalog;
pub mod config;
pub mod error;
pub mod model;
pub mod validation;

pub use catalog::{DEMO_COMPANY_ID, default_catalog};
pub use config::{CountRange, DayWindow, OutputConfig, SeedConfig, load_config, parse_config};
pub use error::{Error, Result};
pub use model::{Client, Order, OrderItem, Product};
pub use validation::validate_config;
