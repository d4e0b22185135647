use crate::config::Config;
use crate::errors::AppResult;
use crate::store::CalendarStore;
use crate::ui::messages;

use crate::cli::parser::Cli;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file
///  - the JSON calendar document (written immediately, even when empty)
pub fn handle(cli: &Cli) -> AppResult<()> {
    let storage_path = if let Some(custom) = &cli.file {
        Config::init_all(Some(custom.clone()), cli.test)?
    } else {
        Config::init_all(None, cli.test)?
    };

    println!("⚙️  Initializing rCalTrack…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗓️  Calendar    : {}", storage_path.display());

    let (store, warning) = CalendarStore::open(&storage_path.to_string_lossy())?;
    if let Some(w) = warning {
        messages::warning(w);
    }

    println!("✅ Calendar document ready at {}", store.path().display());
    println!("🎉 rCalTrack initialization completed!");
    Ok(())
}
