use clap::Parser;
use folio::Theme;
use folio::core::config::{self, CliOverrides, FolioConfig};
use log::{info, warn};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "folio", about = "Personal portfolio in the terminal")]
struct Args {
    /// Color theme (overrides config file and FOLIO_THEME)
    #[arg(short, long, value_enum)]
    theme: Option<Theme>,

    /// Config file to use instead of ~/.folio/config.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Quiet period after the last wheel event before it navigates
    #[arg(long, value_name = "MS")]
    debounce_ms: Option<u64>,

    /// Lock held after each section change
    #[arg(long, value_name = "MS")]
    cooldown_ms: Option<u64>,

    /// Where to write the debug log
    #[arg(long, default_value = "folio.log")]
    log_file: PathBuf,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger (the terminal belongs to the UI)
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create(&args.log_file) {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = match config::load_config(args.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            warn!("{}; falling back to defaults", e);
            FolioConfig::default()
        }
    };
    let overrides = CliOverrides {
        theme: args.theme,
        debounce_ms: args.debounce_ms,
        cooldown_ms: args.cooldown_ms,
    };
    let resolved = config::resolve(&file_config, &overrides);

    info!(
        "Folio starting up (theme: {}, debounce: {:?}, cooldown: {:?})",
        resolved.theme.label(),
        resolved.timing.debounce,
        resolved.timing.cooldown
    );

    folio::tui::run(resolved)
}
