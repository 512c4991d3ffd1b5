const DEFAULT_LOG_LEVEL: tracing::Level = tracing::Level::INFO;

/// Pick the log level from `--verbose`, else from the `LOG_LEVEL`
/// environment variable.
///
/// An unrecognized `LOG_LEVEL` falls back to the default level; the returned
/// warning is logged once the subscriber is installed.
pub(crate) fn resolve_log_level(
    verbose: bool,
    env_val: Option<&str>,
) -> (tracing::Level, Option<String>) {
    if verbose {
        return (tracing::Level::DEBUG, None);
    }

    match env_val.map(str::trim) {
        Some("DEBUG" | "debug") => (tracing::Level::DEBUG, None),
        Some("INFO" | "info") => (tracing::Level::INFO, None),
        Some("TRACE" | "trace") => (tracing::Level::TRACE, None),
        Some("VERBOSE" | "verbose") => (tracing::Level::DEBUG, None),
        Some(other) => (
            DEFAULT_LOG_LEVEL,
            Some(format!(
                "Invalid `LOG_LEVEL` environment variable value: `{other}`"
            )),
        ),
        None => (DEFAULT_LOG_LEVEL, None),
    }
}

pub(crate) fn setup_logger(verbose: bool) {
    let env_val = std::env::var("LOG_LEVEL").ok();
    let (log_level, warning) = resolve_log_level(verbose, env_val.as_deref());

    // Rendered documents go to stdout, so diagnostics stay on stderr.
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();
    log::trace!("Initial logging level set to `{log_level}`.");

    if let Some(warning) = warning {
        log::warn!("{warning}");
    }
}
