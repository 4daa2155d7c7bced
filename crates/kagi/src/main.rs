use std::io;
use std::path::{Path, PathBuf};

use clap::Parser;
use kagi::app::chooser::resolve_startup_directory;
use kagi::app::{App, AppConfig, LOG_FILE, SelectionPolicy, kagi_home};
use kagi::infra::log;

/// Terminal directory browser that previews HTML files and refreshes live.
#[derive(Debug, Parser)]
#[command(name = "kagi", version, about)]
struct Cli {
    /// Directory to open at startup.
    directory: Option<PathBuf>,

    /// Keep the selected file selected across refreshes while it still
    /// exists.
    #[arg(long)]
    preserve_selection: bool,

    /// Log file location. Defaults to `~/.kagi/kagi.log`.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn app_config(&self, working_dir: &Path) -> AppConfig {
        let selection_policy = if self.preserve_selection {
            SelectionPolicy::PreserveIfPresent
        } else {
            SelectionPolicy::ClearOnRefresh
        };

        AppConfig {
            initial_directory: self
                .directory
                .as_ref()
                .map(|directory| resolve_startup_directory(directory, working_dir)),
            selection_policy,
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> io::Result<()> {
    let cli = Cli::parse();
    let log_path = cli
        .log_file
        .clone()
        .unwrap_or_else(|| kagi_home().join(LOG_FILE));
    log::init(&log_path)?;

    let working_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("/"));
    let mut app = App::new(cli.app_config(&working_dir), working_dir);

    kagi::runtime::run(&mut app).await
}
