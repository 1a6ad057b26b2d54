//! This module provides the logging bootstrap for the library.
//!
//! The codec itself only talks to the `log` facade (`debug!` per block,
//! `info!` per batch, `trace!` for buffer mutations). Applications that do not
//! install their own logger can call [`enable_verbose_logging`] to get a
//! minimal `env_logger` backend writing to stderr or to a file.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Once;

use log::LevelFilter;

use crate::error::ArtcError;

static INIT_LOGGER: Once = Once::new();

/// Installs an `Info`-level `env_logger` backend, once per process.
///
/// With `log_file` set, records are appended to that file instead of stderr.
/// Later calls are no-ops, as is the first call if another logger is already
/// installed.
pub fn enable_verbose_logging(log_file: Option<&Path>) -> Result<(), ArtcError> {
    // Open the file before entering the `Once`, so an I/O failure is reported
    // to the caller instead of consuming the one-time initialisation.
    let file = match log_file {
        Some(path) => Some(OpenOptions::new().append(true).create(true).open(path)?),
        None => None,
    };

    INIT_LOGGER.call_once(|| {
        let mut builder = env_logger::Builder::new();

        builder.is_test(false);
        builder.filter_level(LevelFilter::Info);

        // Custom formatter: just print the level and message
        builder.format(|buf, record| {
            use std::io::Write;
            writeln!(buf, "[{}] {}", record.level(), record.args())?;
            buf.flush()?;
            Ok(())
        });

        if let Some(file) = file {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }

        let _ = builder.try_init();
    });
    Ok(())
}
