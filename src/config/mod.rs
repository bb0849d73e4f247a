use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use tracing::{debug, info};

use crate::{
    core::{
        services::InsightThresholds,
        utils::{ensure_dir, PathResolver},
    },
    errors::{FinanceError, Result},
};

const TMP_SUFFIX: &str = "tmp";

/// Keys accepted by [`ConfigManager::set`].
pub const CONFIG_KEYS: [&str; 6] = [
    "locale",
    "currency",
    "emergency_fund_months",
    "debt_to_income_percent",
    "savings_rate_percent",
    "upcoming_bill_days",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub locale: String,
    pub currency: String,
    pub thresholds: InsightThresholds,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: "en-US".into(),
            currency: "USD".into(),
            thresholds: InsightThresholds::default(),
        }
    }
}

impl Config {
    /// Applies a single `key = value` change, validating the value first.
    pub fn apply(&mut self, key: &str, value: &str) -> Result<()> {
        let value = value.trim();
        match key {
            "locale" => self.locale = non_empty(key, value)?,
            "currency" => self.currency = non_empty(key, value)?.to_ascii_uppercase(),
            "emergency_fund_months" => {
                self.thresholds.emergency_fund_months = non_negative(key, value)?
            }
            "debt_to_income_percent" => {
                self.thresholds.debt_to_income_percent = non_negative(key, value)?
            }
            "savings_rate_percent" => {
                self.thresholds.savings_rate_percent = non_negative(key, value)?
            }
            "upcoming_bill_days" => {
                self.thresholds.upcoming_bill_days = value.parse().map_err(|_| {
                    FinanceError::Config(format!("`{key}` expects a whole number of days"))
                })?
            }
            other => {
                return Err(FinanceError::Config(format!(
                    "unknown key `{other}` (expected one of: {})",
                    CONFIG_KEYS.join(", ")
                )))
            }
        }
        Ok(())
    }
}

fn non_empty(key: &str, value: &str) -> Result<String> {
    if value.is_empty() {
        Err(FinanceError::Config(format!("`{key}` cannot be empty")))
    } else {
        Ok(value.to_string())
    }
}

fn non_negative(key: &str, value: &str) -> Result<f64> {
    match value.parse::<f64>() {
        Ok(number) if number.is_finite() && number >= 0.0 => Ok(number),
        _ => Err(FinanceError::Config(format!(
            "`{key}` expects a non-negative number"
        ))),
    }
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self> {
        Self::from_base(PathResolver::base_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self> {
        Self::from_base(base)
    }

    fn from_base(base: PathBuf) -> Result<Self> {
        ensure_dir(&base)?;
        ensure_dir(&PathResolver::config_dir_in(&base))?;
        Ok(Self {
            path: PathResolver::config_file_in(&base),
        })
    }

    /// Reads the stored configuration, falling back to defaults when none exists.
    pub fn load(&self) -> Result<Config> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            let config = serde_json::from_str(&data)?;
            debug!(path = %self.path.display(), "loaded configuration");
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        info!(path = %self.path.display(), "saved configuration");
        Ok(())
    }

    /// Loads, updates one key and persists the result.
    pub fn set(&self, key: &str, value: &str) -> Result<Config> {
        let mut config = self.load()?;
        config.apply(key, value)?;
        self.save(&config)?;
        Ok(config)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
