use anyhow::Result;
use rollcall::config::Config;
use rollcall::logger::Logger;

#[tokio::main]
async fn main() -> Result<()> {
    if std::env::args().skip(1).any(|arg| arg == "--generate-config") {
        let path = Config::get_default_config_path()?;
        Config::generate_default_config(&path)?;
        return Ok(());
    }

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Error: {:#}", e);
            eprintln!("\n💡 Run `rollcall --generate-config` to write a default configuration file.");
            return Ok(());
        }
    };

    let logger = Logger::from_config(&config.logging)?;
    logger.install()?;
    log::info!("Rollcall {} starting", env!("CARGO_PKG_VERSION"));

    // Run the TUI application
    rollcall::ui::run_app(config, logger).await?;

    Ok(())
}
