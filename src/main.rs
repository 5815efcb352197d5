use log::LevelFilter;

use alphanex::{init_logger, AppConfig};

fn main() -> anyhow::Result<()> {
    init_logger(LevelFilter::Info);

    let config = AppConfig::load_or_default();
    log::info!(
        "Starting Alpha Nex client against {}",
        config.api_base_url
    );

    alphanex::run_ui(config).map_err(|e| anyhow::anyhow!("failed to launch UI: {}", e))?;
    Ok(())
}
