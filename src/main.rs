use anyhow::Result;
use directories::ProjectDirs;
use log::warn;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::env;
use std::fs;
use std::io;

use task_list::config::Config;
use task_list::storage::Storage;
use task_list::ui;

fn main() -> Result<()> {
    init_logging();

    let config = match Config::load() {
        Ok(config) => config,
        Err(err) => {
            warn!("ignoring unreadable config: {err:#}");
            Config::default()
        }
    };

    let mut storage = match &config.data_file {
        Some(path) => Storage::open(path)?,
        None => Storage::open_default()?,
    };
    let tasks = storage.read()?;

    let args: Vec<String> = env::args().collect();
    if args.len() == 2 && args[1] == "print" {
        ui::print_tasks(&tasks, &mut io::stdout())?;
        return Ok(());
    }

    let stdin = io::stdin();
    ui::run(&mut storage, tasks, &mut stdin.lock(), &mut io::stdout())
}

/// File logger in the data directory; the terminal belongs to the UI.
/// Logging is best-effort and never fatal.
fn init_logging() {
    let Some(proj) = ProjectDirs::from("", "", "task-list") else {
        return;
    };
    let dir = proj.data_dir();
    if !dir.exists() {
        let _ = fs::create_dir_all(dir);
    }

    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join("task-list.log"))
    {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }
}
