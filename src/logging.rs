use log::LevelFilter;

/// Environment variable read by [`init_logging`].
pub const LOG_ENV_VAR: &str = "ZSCORE_LOG";

/// Install an `env_logger` backend for the `log` macros used in this crate.
///
/// The filter comes from `ZSCORE_LOG` (same syntax as `RUST_LOG`), falling back
/// to `error,zscore_scaler=info`. Calling this more than once is harmless; the
/// first logger installed wins.
pub fn init_logging() {
    let _ = env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or(LOG_ENV_VAR, "error,zscore_scaler=info"))
        .try_init();
}
