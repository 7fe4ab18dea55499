use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the storage directory for saved rosters
pub fn handle(cli: &Cli) -> AppResult<()> {
    println!("⚙️  Initializing rPlantao…");

    let cfg = Config::init_all(cli.store.clone(), cli.test)?;

    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗂️  Storage     : {}", cfg.storage_path().display());
    println!("🎉 rPlantao initialization completed!");
    Ok(())
}
