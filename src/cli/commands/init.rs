use crate::config::Config;
use crate::errors::AppResult;

use crate::cli::parser::Cli;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file
///  - the tasks and sessions directories (prod or test mode)
pub fn handle(cli: &Cli) -> AppResult<()> {
    //
    // 1️⃣ PREPARA CONFIGURAZIONE
    //
    // Config::init_all crea:
    //   ~/.rpomodoro/
    //   ~/.rpomodoro/rpomodoro.conf
    //   ~/.rpomodoro/tasks/
    //   ~/.rpomodoro/sessions/
    // rispettando gli override --tasks-dir / --sessions-dir.
    //

    println!("⚙️  Initializing rpomodoro…");

    Config::init_all(cli.tasks_dir.as_deref(), cli.sessions_dir.as_deref(), cli.test)?;

    //
    // 2️⃣ RIEPILOGO
    //
    let path = Config::config_file();
    println!("📄 Config file : {}", path.display());

    println!("🎉 rpomodoro initialization completed!");
    Ok(())
}
