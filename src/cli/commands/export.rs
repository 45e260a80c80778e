use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::export::ExportLogic;
use crate::core::session_log::SessionLogger;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        force,
    } = cmd
    {
        let logger = SessionLogger::new(cfg.sessions_path());
        ExportLogic::export(&logger, format, file, range, *force)?;
    }
    Ok(())
}
