use std::collections::BTreeMap;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use demoseed_core::{Client, Order, OrderItem};

/// Options for the generation engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateOptions {
    /// Write the run report as JSON to this path.
    pub report_path: Option<PathBuf>,
}

/// In-memory result of one generation pass.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub seed: u64,
    pub generated_at: DateTime<Utc>,
    pub clients: Vec<Client>,
    pub orders: Vec<Order>,
    pub items: Vec<OrderItem>,
}

impl Dataset {
    /// Sum of all order totals.
    pub fn revenue(&self) -> i64 {
        self.orders.iter().map(|order| order.total).sum()
    }

    pub fn payment_type_counts(&self) -> BTreeMap<String, u64> {
        let mut counts = BTreeMap::new();
        for order in &self.orders {
            *counts.entry(order.payment_type.clone()).or_insert(0) += 1;
        }
        counts
    }
}

/// Summary of a written CSV file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileReport {
    pub entity: String,
    pub path: PathBuf,
    pub rows: u64,
    pub bytes: u64,
}

/// Report for a generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
    pub run_id: String,
    pub seed: u64,
    pub generated_at: DateTime<Utc>,
    pub locale: String,
    pub clients: u64,
    pub orders: u64,
    pub items: u64,
    pub revenue_total: i64,
    pub payment_types: BTreeMap<String, u64>,
    pub files: Vec<FileReport>,
    pub bytes_written: u64,
    pub duration_ms: u64,
}

impl GenerationReport {
    pub fn new(run_id: String, dataset: &Dataset, locale: &str) -> Self {
        Self {
            run_id,
            seed: dataset.seed,
            generated_at: dataset.generated_at,
            locale: locale.to_string(),
            clients: dataset.clients.len() as u64,
            orders: dataset.orders.len() as u64,
            items: dataset.items.len() as u64,
            revenue_total: dataset.revenue(),
            payment_types: dataset.payment_type_counts(),
            files: Vec::new(),
            bytes_written: 0,
            duration_ms: 0,
        }
    }

    pub fn record_file(&mut self, file: FileReport) {
        self.bytes_written = self.bytes_written.saturating_add(file.bytes);
        self.files.push(file);
    }
}
