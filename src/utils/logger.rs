use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the console subscriber. Output goes to stderr so it stays out of the menus.
///
/// `RUST_LOG` wins over `filter`, which wins over the verbosity default.
pub fn init_cli_logger(verbose: bool, filter: Option<&str>) {
    let fallback = match filter {
        Some(directives) => directives.to_string(),
        None if verbose => "league_roster=debug,info".to_string(),
        None => "league_roster=warn".to_string(),
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init();

    // a second call (tests, embedding) keeps the subscriber already in place
    if let Err(e) = installed {
        tracing::debug!("Logger already initialized: {}", e);
    }
}
