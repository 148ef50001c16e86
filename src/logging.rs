//! Debug-build file logging
//!
//! The TUI owns the terminal, so log output goes to
//! `<cache_dir>/pickbox/debug.log`. Release builds install no logger and the
//! `log` macros compile down to no-ops at runtime.

#[cfg(debug_assertions)]
use std::fs::{self, OpenOptions};
#[cfg(debug_assertions)]
use std::io::Write;
use std::path::PathBuf;

pub fn log_file_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("pickbox").join("debug.log"))
}

/// Install the file logger (debug builds only); `RUST_LOG` sets the filter
pub fn init() {
    #[cfg(debug_assertions)]
    {
        if let Err(e) = init_file_logger() {
            eprintln!("pickbox: logging disabled: {}", e);
        }
    }
}

#[cfg(debug_assertions)]
fn init_file_logger() -> std::io::Result<()> {
    let Some(path) = log_file_path() else {
        return Ok(());
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("pickbox=debug"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} {}: {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init()
        .map_err(std::io::Error::other)
}
