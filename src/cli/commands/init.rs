use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// This creates:
///  - the config directory (if missing)
///  - the configuration file with default values
///  - the data directory the CSV files are read from
pub fn handle(cli: &Cli) -> AppResult<()> {
    let force = matches!(cli.command, Commands::Init { force: true });
    let path = cli.config_path();

    println!("⚙️  Initializing Venue Intel…");
    let cfg = Config::init_at(&path, force, cli.data.as_deref())?;

    println!("📄 Config file : {}", path.display());
    println!("📁 Data dir    : {}", cfg.data_path().display());

    info(format!(
        "Copy {}, {}, {} and {} into the data directory.",
        cfg.venues_file, cfg.events_file, cfg.tickets_file, cfg.transactions_file
    ));
    success("Venue Intel initialization completed!");
    Ok(())
}
