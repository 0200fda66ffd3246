use tracing_subscriber::EnvFilter;

/// Install the fmt subscriber; `verbose` forces debug level over `RUST_LOG`
///
/// A subscriber that is already installed is left in place.
pub fn init(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(atty::is(atty::Stream::Stderr))
        .with_target(false)
        .try_init()
    {
        tracing::debug!("Logging already initialized: {}", e);
    }
}
