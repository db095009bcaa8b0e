use anyhow::Result;

use eventist::config::Config;
use eventist::logger::{init_logging, Logger};
use eventist::storage::StateStore;
use eventist::ui;

#[tokio::main]
async fn main() -> Result<()> {
    // Handle --generate-config before anything touches the terminal
    if std::env::args().any(|arg| arg == "--generate-config") {
        let path = Config::get_default_config_path()?;
        Config::generate_default_config(path)?;
        return Ok(());
    }

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Error: invalid configuration: {e:#}");
            eprintln!("\n💡 To fix this:");
            eprintln!("1. Edit eventist.toml (or the file under your XDG config directory)");
            eprintln!("2. Or run `eventist --generate-config` for a fresh default");
            return Ok(());
        }
    };

    let logger = Logger::new();
    init_logging(&config.logging, logger.clone())?;

    let store = StateStore::load(StateStore::default_path()?);

    // Run the TUI application
    ui::run_app(config, store, logger).await?;

    Ok(())
}
