use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::{DEMO_COMPANY_ID, default_catalog};
use crate::error::Result;
use crate::model::Product;

/// Inclusive integer range used for item counts and quantities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountRange {
    pub min: u32,
    pub max: u32,
}

impl CountRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: u32) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// Backdating window in days: timestamps fall in `[now - max, now - min)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayWindow {
    pub min_days: i64,
    pub max_days: i64,
}

/// Where the CSV files go.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub dir: PathBuf,
    pub clients_file: String,
    pub orders_file: String,
    pub items_file: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            clients_file: "datos_clientes.csv".to_string(),
            orders_file: "datos_pedidos.csv".to_string(),
            items_file: "datos_detalles.csv".to_string(),
        }
    }
}

impl OutputConfig {
    pub fn clients_path(&self) -> PathBuf {
        self.dir.join(&self.clients_file)
    }

    pub fn orders_path(&self) -> PathBuf {
        self.dir.join(&self.orders_file)
    }

    pub fn items_path(&self) -> PathBuf {
        self.dir.join(&self.items_file)
    }
}

/// Parameters of one generation run.
///
/// `Default` reproduces the demo tenant seed: 20 clients, 100 orders with
/// 1-3 items of quantity 1-2, clients backdated 60-120 days and orders
/// spread over the last 30 days.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    pub company_id: Uuid,
    pub client_count: usize,
    pub order_count: usize,
    pub items_per_order: CountRange,
    pub quantity: CountRange,
    pub client_age_days: DayWindow,
    pub order_window_days: i64,
    pub status: String,
    pub payment_types: Vec<String>,
    /// Fake-data locale for client names, phones, and addresses.
    pub locale: String,
    pub catalog: Vec<Product>,
    /// RNG seed. A random one is drawn and reported when absent.
    pub seed: Option<u64>,
    pub output: OutputConfig,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            company_id: DEMO_COMPANY_ID,
            client_count: 20,
            order_count: 100,
            items_per_order: CountRange::new(1, 3),
            quantity: CountRange::new(1, 2),
            client_age_days: DayWindow {
                min_days: 60,
                max_days: 120,
            },
            order_window_days: 30,
            status: "completado".to_string(),
            payment_types: vec![
                "Efectivo".to_string(),
                "Transferencia".to_string(),
                "Tarjeta".to_string(),
            ],
            locale: "es_AR".to_string(),
            catalog: default_catalog(),
            seed: None,
            output: OutputConfig::default(),
        }
    }
}

/// Load a `SeedConfig` from a TOML file. Missing keys keep their defaults.
pub fn load_config(path: &Path) -> Result<SeedConfig> {
    let contents = std::fs::read_to_string(path)?;
    parse_config(&contents)
}

pub fn parse_config(contents: &str) -> Result<SeedConfig> {
    Ok(toml::from_str(contents)?)
}
