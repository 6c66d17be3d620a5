use crate::config::{default_inventory, DEFAULT_CSV_PATH};
use crate::core::{ConfigProvider, Device};
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "electro-store")]
#[command(about = "Toggle a small device inventory and round-trip it through CSV")]
pub struct CliConfig {
    /// CSV file to save to and load from
    #[arg(long)]
    pub csv_path: Option<String>,

    /// TOML file describing the store and its devices
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

impl ConfigProvider for CliConfig {
    fn csv_path(&self) -> &str {
        self.csv_path.as_deref().unwrap_or(DEFAULT_CSV_PATH)
    }

    fn inventory(&self) -> Vec<Device> {
        default_inventory()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("--csv-path", self.csv_path())
    }
}
