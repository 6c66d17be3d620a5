#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use toml_config::TomlConfig;

use crate::core::Device;

/// Used when neither the command line nor a config file names a CSV path.
pub const DEFAULT_CSV_PATH: &str = "dispositivos.csv";

/// The showroom stand: two phones and two laptops, first and last switched on.
pub fn default_inventory() -> Vec<Device> {
    let mut iphone = Device::phone("iPhone X");
    let galaxy = Device::phone("Samsung Galaxy S21");
    let xps = Device::laptop("Dell XPS 13");
    let mut spectre = Device::laptop("HP Spectre x360");

    iphone.turn_on();
    spectre.turn_on();

    vec![iphone, galaxy, xps, spectre]
}
