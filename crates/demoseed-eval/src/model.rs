use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Options for dataset evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluateOptions {
    /// Cap on violations kept in the report; counters are never capped.
    pub max_violations: usize,
}

impl Default for EvaluateOptions {
    fn default() -> Self {
        Self {
            max_violations: 100,
        }
    }
}

/// Rows found per file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowCounts {
    pub clients: u64,
    pub orders: u64,
    pub items: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckStats {
    pub checked: u64,
    pub violations: u64,
}

/// A single failed check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Violation {
    pub check: String,
    pub entity: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub message: String,
}

/// Machine-readable result of a dataset evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationReport {
    pub dataset_dir: PathBuf,
    pub rows: RowCounts,
    pub checks: BTreeMap<String, CheckStats>,
    pub violations_total: u64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub violations: Vec<Violation>,
}

impl EvaluationReport {
    pub fn new(dataset_dir: PathBuf) -> Self {
        Self {
            dataset_dir,
            rows: RowCounts::default(),
            checks: BTreeMap::new(),
            violations_total: 0,
            violations: Vec::new(),
        }
    }

    pub fn is_clean(&self) -> bool {
        self.violations_total == 0
    }
}
