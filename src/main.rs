mod core;
mod fs;
#[cfg(test)]
mod test_support;
mod tui;

use std::fs::File;
use std::path::PathBuf;

use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

#[derive(Parser)]
#[command(name = "tripane", about = "Three-pane terminal directory browser")]
struct Args {
    /// Directory to start in (defaults to the current directory)
    path: Option<PathBuf>,

    /// Show dotfiles on startup
    #[arg(long)]
    hidden: bool,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // Initialize file logger - writes to ~/.tripane/tripane.log so the log
    // never clutters the directory being browsed
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Some(dir) = core::config::config_dir() {
        let _ = std::fs::create_dir_all(&dir);
        if let Ok(log_file) = File::create(dir.join("tripane.log")) {
            let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
        }
    }

    let config = match core::config::load_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("tripane: {e}");
            std::process::exit(1);
        }
    };
    let resolved = core::config::resolve(&config, args.hidden);

    let start = match args.path {
        Some(p) => match p.canonicalize() {
            Ok(abs) => abs,
            Err(e) => {
                eprintln!("tripane: {}: {e}", p.display());
                std::process::exit(1);
            }
        },
        None => std::env::current_dir()?,
    };

    log::info!("Tripane starting up in {}", start.display());

    tui::run(start, resolved)
}
