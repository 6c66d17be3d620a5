use clap::Parser;
use electro_store::utils::logger::{self, LogFormat};
use electro_store::utils::validation::Validate;
use electro_store::{CliConfig, LocalStorage, RunReport, StoreEngine, TomlConfig};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_logger(LogFormat::from_json_flag(cli.json_logs), cli.verbose);

    tracing::info!("Starting electro-store");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let storage = LocalStorage::default();
    let report = match cli.config.clone() {
        Some(config_path) => {
            tracing::info!("📁 Loading configuration from: {}", config_path);
            let mut config = match TomlConfig::from_file(&config_path) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("❌ Failed to load config file '{}': {}", config_path, e);
                    eprintln!("💡 {}", e.recovery_suggestion());
                    std::process::exit(1);
                }
            };

            if let Some(csv_path) = &cli.csv_path {
                config.store.csv_path = Some(csv_path.clone());
                tracing::info!("🔧 CSV path overridden to: {}", csv_path);
            }

            exit_if_invalid(&config);
            StoreEngine::new(storage, config).run()
        }
        None => {
            exit_if_invalid(&cli);
            StoreEngine::new(storage, cli).run()
        }
    };

    print!("{}", report.render());
    log_warnings(&report);

    // CSV I/O failures are reported above and never change the exit status.
    Ok(())
}

fn exit_if_invalid(config: &impl Validate) {
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }
}

fn log_warnings(report: &RunReport) {
    if report.warnings.is_empty() {
        tracing::info!("✅ Completed without warnings");
        return;
    }

    tracing::info!("Completed with {} warnings", report.warnings.len());
    for warning in &report.warnings {
        tracing::debug!("{}", warning);
    }
}
