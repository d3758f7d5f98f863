use tracing_subscriber::EnvFilter;

/// Stderr logging. `RUST_LOG` wins over `--debug`; default is warnings only.
pub fn init(debug: bool) {
    let fallback = if debug { "content_gen=debug" } else { "content_gen=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
