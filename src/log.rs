// src/log.rs
//
// File sink for the `log` facade. Lines look like
//   [00:00:01.234][INFO] Feed: parsed 120 row(s), 97 available
// where the timestamp is time since start.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};
use std::time::Instant;

pub use ::log::LevelFilter;
use ::log::{Level, Log, Metadata, Record, SetLoggerError};

use crate::config::consts::{LOG_FILE, STORE_DIR};

static START: OnceLock<Instant> = OnceLock::new();

fn start() -> Instant {
    *START.get_or_init(Instant::now)
}

fn fmt_elapsed(ms: u128) -> String {
    let total_ms = ms as u64;
    let h = total_ms / 3_600_000;
    let m = (total_ms % 3_600_000) / 60_000;
    let s = (total_ms % 60_000) / 1_000;
    let ms = total_ms % 1_000;
    format!("{h:02}:{m:02}:{s:02}.{ms:03}")
}

struct FileLogger {
    path: PathBuf,
    lock: Mutex<()>,
    /// Mirror warnings and errors to stderr (CLI)
    echo: bool,
}

impl Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= ::log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let elapsed = fmt_elapsed(start().elapsed().as_millis());
        let line = format!("[{elapsed}][{}] {}\n", record.level(), record.args());

        if let Ok(_guard) = self.lock.lock() {
            if let Ok(mut file) = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.path)
            {
                let _ = file.write_all(line.as_bytes());
            }
        }

        if self.echo && record.level() <= Level::Warn {
            eprint!("{line}");
        }
    }

    fn flush(&self) {}
}

/// Install the file logger. Call once, early in `main`.
pub fn init(level: LevelFilter, echo: bool) -> Result<(), SetLoggerError> {
    start();
    let _ = fs::create_dir_all(STORE_DIR);

    let logger = FileLogger {
        path: PathBuf::from(STORE_DIR).join(LOG_FILE),
        lock: Mutex::new(()),
        echo,
    };
    ::log::set_boxed_logger(Box::new(logger))?;
    ::log::set_max_level(level);
    Ok(())
}
