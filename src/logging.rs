//! Structured logging for the Alpha Nex client
//!
//! Sets up the `log` facade with a chrono-stamped format. Poll failures and
//! clipboard fallbacks report through this channel only, so the format keeps
//! the target visible to make those silent degradations findable.

use std::io::Write;
use std::sync::Once;

use chrono::Local;
use env_logger::Env;
use log::LevelFilter;

/// Timestamp format for log entries
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Global initialization guard
static INIT_LOGGER: Once = Once::new();

/// Initialize the logger once for the whole process.
///
/// The level can be overridden with the `ALPHANEX_LOG` environment variable;
/// `filter` is the fallback when the variable is unset.
pub fn init_logger(filter: LevelFilter) {
    INIT_LOGGER.call_once(|| {
        env_logger::Builder::from_env(
            Env::default()
                .filter("ALPHANEX_LOG")
                .default_filter_or(filter.as_str()),
        )
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {:5} [{}] {}",
                Local::now().format(TIMESTAMP_FORMAT),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
    });
}
