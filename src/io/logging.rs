use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::model::config::LogConfig;

/// Directives used when `RUST_LOG` is unset.
///
/// `verbose` raises this crate to debug regardless of the configured filter.
pub fn filter_directives(config: &LogConfig, verbose: bool) -> String {
    if verbose {
        format!("{},tasklist=debug", config.filter)
    } else {
        config.filter.clone()
    }
}

/// Install the global subscriber. Logs go to stderr so they never mix with
/// the rows printed on stdout.
pub fn init(config: &LogConfig, verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directives(config, verbose)));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_directives() {
        let config = LogConfig::default();
        assert_eq!(filter_directives(&config, false), "warn");
        assert_eq!(filter_directives(&config, true), "warn,tasklist=debug");
    }
}
