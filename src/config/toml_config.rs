use crate::config::DEFAULT_FILENAME;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub pipeline: PipelineConfig,
    pub grid: GridConfig,
    pub load: LoadConfig,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub name: String,
    pub description: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridConfig {
    pub start: f64,
    pub stop: f64,
    pub increment: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadConfig {
    pub output_path: String,
    pub filename: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
    pub log_level: Option<String>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: TomlConfig = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }
}

impl ConfigProvider for TomlConfig {
    fn start(&self) -> f64 {
        self.grid.start
    }

    fn stop(&self) -> f64 {
        self.grid.stop
    }

    fn increment(&self) -> f64 {
        self.grid.increment
    }

    fn output_path(&self) -> &str {
        &self.load.output_path
    }

    fn filename(&self) -> &str {
        self.load.filename.as_deref().unwrap_or(DEFAULT_FILENAME)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("pipeline.name", &self.pipeline.name)?;
        validation::validate_ascending_bounds("grid.start", self.grid.start, self.grid.stop)?;
        validation::validate_positive_increment("grid.increment", self.grid.increment)?;
        validation::validate_path("load.output_path", &self.load.output_path)?;
        if let Some(filename) = &self.load.filename {
            validation::validate_non_empty_string("load.filename", filename)?;
            validation::validate_path("load.filename", filename)?;
        }
        Ok(())
    }
}
