use clap::Parser;
use std::path::PathBuf;

use crate::loader::LoadOptions;
use crate::models::open_dock_settings;
use crate::platform::SystemWorkspace;
use crate::utils::AppResult;

pub async fn cli() -> AppResult<()> {
    Cli::parse().execute().await
}

/// Print the macOS Dock preferences as JSON.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Read this plist instead of ~/Library/Preferences/com.apple.dock.plist
    #[arg(long, env = "DOCKPREFS_PATH")]
    path: Option<PathBuf>,

    /// Give up after this many seconds
    #[arg(long, default_value_t = 10)]
    timeout: u64,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    /// Open the Dock pane of System Settings after printing
    #[arg(long)]
    open_settings: bool,
}

impl Cli {
    fn options(&self) -> LoadOptions {
        LoadOptions {
            path: self.path.clone(),
            timeout_secs: self.timeout,
        }
    }

    async fn execute(self) -> AppResult<()> {
        let options = self.options();
        log::debug!("Loading Dock preferences with {:?}", options);
        let prefs = crate::load_async(options).await?;

        let json = if self.pretty {
            serde_json::to_string_pretty(&prefs)?
        } else {
            serde_json::to_string(&prefs)?
        };
        println!("{}", json);

        if self.open_settings {
            open_dock_settings(&SystemWorkspace::new());
        }
        Ok(())
    }
}
