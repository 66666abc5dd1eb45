use crate::cli::commands::open_snapshot;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        report,
        format,
        file,
        filters,
        force,
    } = cmd
    {
        let spec = filters.to_spec()?;
        let snapshot = open_snapshot(cfg)?;
        ExportLogic::export(&snapshot, &spec, *report, *format, file, *force, cfg)?;
    }
    Ok(())
}
