//! Logger initialization
//!
//! `RUST_LOG` seeds the filter; the level passed in (from `--log-level`)
//! overrides it for this crate. Logs go to stderr so exported documents
//! printed to stdout stay clean.

use std::io::Write;

use log::LevelFilter;

/// Initialize `env_logger` with a compact single-line format.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init_logger(level: LevelFilter) {
    let mut builder = env_logger::Builder::from_default_env();
    builder.filter_module("assetdesk", level);
    builder.format(|buf, record| {
        writeln!(
            buf,
            "{} [{}] {}: {}",
            chrono::Local::now().format("%H:%M:%S"),
            record.level(),
            record.target(),
            record.args()
        )
    });
    builder.target(env_logger::Target::Stderr);

    if builder.try_init().is_err() {
        log::debug!("Logger already initialized");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_is_harmless() {
        init_logger(LevelFilter::Debug);
        init_logger(LevelFilter::Warn);
        log::info!("still logging");
    }
}
