use crate::model::Result;
use serde::{Deserialize, Deserializer};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::info;

/// Environment variable that overrides the config file location.
pub const CONFIG_PATH_ENV: &str = "MONSOON_REPORT_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "config.json";

/// Settings for one daily-metric analysis (cash-on-hand or profit-and-loss).
#[derive(Debug, Clone, PartialEq)]
pub struct MetricConfig {
    pub path: PathBuf,
    /// Zero-based CSV column holding the metric value. Column 0 is always the day.
    pub value_column: usize,
    /// Short label used inside brackets, e.g. `CASH` in `[CASH DEFICIT]`.
    pub label: String,
    /// Field name used in the trend header lines, e.g. `CASH-ON-HAND`.
    pub field_name: String,
}

impl MetricConfig {
    fn cash_on_hand() -> Self {
        Self {
            path: PathBuf::from("csv_reports/Cash-on-Hand.csv"),
            value_column: 1,
            label: "CASH".into(),
            field_name: "CASH-ON-HAND".into(),
        }
    }

    fn profit_and_loss() -> Self {
        Self {
            path: PathBuf::from("csv_reports/Profit-and-Loss.csv"),
            value_column: 4,
            label: "PROFIT".into(),
            field_name: "NET PROFIT".into(),
        }
    }
}

/// Metric block as written in `config.json`. Missing fields keep the metric's own defaults.
#[derive(Debug, Deserialize)]
struct MetricOverrides {
    path: Option<PathBuf>,
    value_column: Option<usize>,
    label: Option<String>,
    field_name: Option<String>,
}

impl MetricOverrides {
    fn apply(self, base: MetricConfig) -> MetricConfig {
        MetricConfig {
            path: self.path.unwrap_or(base.path),
            value_column: self.value_column.unwrap_or(base.value_column),
            label: self.label.unwrap_or(base.label),
            field_name: self.field_name.unwrap_or(base.field_name),
        }
    }
}

fn cash_on_hand_block<'de, D: Deserializer<'de>>(d: D) -> std::result::Result<MetricConfig, D::Error> {
    Ok(MetricOverrides::deserialize(d)?.apply(MetricConfig::cash_on_hand()))
}

fn profit_and_loss_block<'de, D: Deserializer<'de>>(d: D) -> std::result::Result<MetricConfig, D::Error> {
    Ok(MetricOverrides::deserialize(d)?.apply(MetricConfig::profit_and_loss()))
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub report_path: PathBuf,
    pub currency: String,
    pub overheads: PathBuf,
    #[serde(deserialize_with = "cash_on_hand_block")]
    pub cash_on_hand: MetricConfig,
    #[serde(deserialize_with = "profit_and_loss_block")]
    pub profit_and_loss: MetricConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            report_path: PathBuf::from("summary_report.txt"),
            currency: "SGD".into(),
            overheads: PathBuf::from("csv_reports/Overheads.csv"),
            cash_on_hand: MetricConfig::cash_on_hand(),
            profit_and_loss: MetricConfig::profit_and_loss(),
        }
    }
}

/// Path of the config file: `$MONSOON_REPORT_CONFIG` if set, `config.json` otherwise.
pub fn config_path() -> PathBuf {
    std::env::var_os(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}

/// Loads the config file. A missing file yields the defaults; a malformed one is an error.
pub fn load_config(path: &Path) -> Result<AppConfig> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            info!("No config at {}, using defaults", path.display());
            return Ok(AppConfig::default());
        }
        Err(e) => return Err(e.into()),
    };
    let config: AppConfig = serde_json::from_str(&content)?;
    Ok(config)
}
