use clap::Parser;
use port_catalog::config::TomlConfig;
use port_catalog::utils::{logger, timezone, validation::Validate};
use port_catalog::{CatalogError, CliConfig, Dataset, PortCatalog, PortView};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting port-catalog CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
        let offset = *chrono::Local::now().offset();
        if let Ok(tz) = timezone::format_fixed_offset(offset) {
            tracing::debug!("Local UTC offset: {}", tz);
        }
    }

    if let Err(e) = run(&mut config).await {
        tracing::error!("❌ port-catalog failed: {}", e);
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    Ok(())
}

async fn run(config: &mut CliConfig) -> Result<(), CatalogError> {
    if let Some(path) = config.config.clone() {
        let file = TomlConfig::from_path(&path)?;
        config.apply_file(&file);
        tracing::debug!("Merged config file {}", path);
    }

    config.validate()?;

    let dataset = match &config.dataset {
        Some(path) => Dataset::from_path(path)?,
        None => Dataset::bundled()?,
    };
    tracing::info!(
        "Loaded {} countries with {} ports",
        dataset.countries.len(),
        dataset.port_count()
    );

    let catalog = PortCatalog::with_delay(dataset, config.delay());

    let ports = catalog.ports_deferred(config.pager()).await;
    let ports: Vec<PortView> = match &config.filter {
        Some(text) => PortCatalog::filter_ports(&ports, text),
        None => ports.as_ref().clone(),
    };

    println!("{:<6} {:<20} COUNTRY", "ID", "PORT");
    for view in &ports {
        println!("{:<6} {:<20} {}", view.port.id, view.port.name, view.country.name);
    }
    println!("✅ {} ports listed", ports.len());

    Ok(())
}
