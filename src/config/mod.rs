pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

pub const DEFAULT_FILENAME: &str = "for_two_dimensional_interpolation_sequential.txt";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "grid-sampler")]
#[command(about = "Generates sample data for two-dimensional interpolation testing")]
pub struct CliConfig {
    /// First sample value
    #[arg(long, default_value_t = -1.0, allow_hyphen_values = true)]
    pub start: f64,

    /// Exclusive upper bound for the sample sequence
    #[arg(long, default_value_t = 1.0001, allow_hyphen_values = true)]
    pub stop: f64,

    /// Step between consecutive samples
    #[arg(long, default_value_t = 1.0)]
    pub increment: f64,

    #[arg(long, default_value = ".")]
    pub output_path: String,

    #[arg(long, default_value = DEFAULT_FILENAME)]
    pub filename: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Enable system monitoring")]
    pub monitor: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn start(&self) -> f64 {
        self.start
    }

    fn stop(&self) -> f64 {
        self.stop
    }

    fn increment(&self) -> f64 {
        self.increment
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn filename(&self) -> &str {
        &self.filename
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_ascending_bounds("start", self.start, self.stop)?;
        validation::validate_positive_increment("increment", self.increment)?;
        validation::validate_path("output_path", &self.output_path)?;
        validation::validate_non_empty_string("filename", &self.filename)?;
        validation::validate_path("filename", &self.filename)?;
        Ok(())
    }
}
