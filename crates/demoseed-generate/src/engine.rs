use std::path::{Path, PathBuf};
use std::time::Instant;

use chrono::{DateTime, SubsecRound, Utc};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use tracing::{debug, info};

use demoseed_core::{Client, Order, OrderItem, SeedConfig, validate_config};

use crate::clients::generate_clients;
use crate::errors::GenerationError;
use crate::model::{Dataset, FileReport, GenerateOptions, GenerationReport};
use crate::orders::generate_orders;
use crate::output::csv::write_records_csv;
use crate::providers::provider_for;
use crate::sampling::hash_seed;

/// Result of a generation run.
#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub dataset: Dataset,
    pub report: GenerationReport,
}

/// Entry point for generating the demo dataset from a `SeedConfig`.
#[derive(Debug, Clone, Default)]
pub struct GenerationEngine {
    options: GenerateOptions,
}

impl GenerationEngine {
    pub fn new(options: GenerateOptions) -> Self {
        Self { options }
    }

    /// Build the dataset in memory.
    ///
    /// Validates `config` first, so an empty catalog or client pool fails
    /// before anything is generated. The same seed and `now` always produce
    /// the same dataset.
    pub fn generate(
        &self,
        config: &SeedConfig,
        now: DateTime<Utc>,
    ) -> Result<Dataset, GenerationError> {
        validate_config(config)?;
        let provider = provider_for(&config.locale)?;
        let seed = config.seed.unwrap_or_else(|| rand::rng().random());

        let mut client_rng = ChaCha8Rng::seed_from_u64(hash_seed(seed, "clients"));
        let clients = generate_clients(config, provider.as_ref(), now, &mut client_rng)?;
        debug!(clients = clients.len(), locale = %provider.locale(), "clients generated");

        let mut order_rng = ChaCha8Rng::seed_from_u64(hash_seed(seed, "orders"));
        let batch = generate_orders(config, &clients, now, &mut order_rng)?;
        debug!(
            orders = batch.orders.len(),
            items = batch.items.len(),
            "orders generated"
        );

        Ok(Dataset {
            seed,
            generated_at: now,
            clients,
            orders: batch.orders,
            items: batch.items,
        })
    }

    /// Generate with the current time and write the three CSV files.
    pub fn run(&self, config: &SeedConfig) -> Result<GenerationResult, GenerationError> {
        let start = Instant::now();
        let run_id = uuid::Uuid::new_v4().to_string();
        let now = Utc::now().trunc_subsecs(6);

        info!(
            run_id = %run_id,
            clients = config.client_count,
            orders = config.order_count,
            locale = %config.locale,
            "generation started"
        );

        let dataset = self.generate(config, now)?;
        info!(run_id = %run_id, seed = dataset.seed, "dataset generated");

        let output = &config.output;
        std::fs::create_dir_all(&output.dir)?;

        let mut report = GenerationReport::new(run_id.clone(), &dataset, &config.locale);
        report.record_file(write_entity(
            "clients",
            &output.clients_path(),
            Client::COLUMNS,
            &dataset.clients,
        )?);
        report.record_file(write_entity(
            "orders",
            &output.orders_path(),
            Order::COLUMNS,
            &dataset.orders,
        )?);
        report.record_file(write_entity(
            "order_items",
            &output.items_path(),
            OrderItem::COLUMNS,
            &dataset.items,
        )?);
        report.duration_ms = start.elapsed().as_millis() as u64;

        if let Some(report_path) = &self.options.report_path {
            std::fs::write(report_path, serde_json::to_vec_pretty(&report)?)?;
            info!(path = %report_path.display(), "report written");
        }

        info!(
            run_id = %run_id,
            orders = report.orders,
            items = report.items,
            revenue_total = report.revenue_total,
            bytes_written = report.bytes_written,
            duration_ms = report.duration_ms,
            "generation completed"
        );

        Ok(GenerationResult { dataset, report })
    }
}

fn write_entity<T: Serialize>(
    entity: &str,
    path: &Path,
    header: &[&str],
    rows: &[T],
) -> Result<FileReport, GenerationError> {
    let bytes = write_records_csv(path, header, rows)?;
    info!(entity, path = %path.display(), rows = rows.len(), bytes, "csv written");
    Ok(FileReport {
        entity: entity.to_string(),
        path: PathBuf::from(path),
        rows: rows.len() as u64,
        bytes,
    })
}
