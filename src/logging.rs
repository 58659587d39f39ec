//! Tracing subscriber setup.
//!
//! The subscriber is installed before the config file is read so config
//! loading is logged too. Its filter starts from `RUST_LOG` (or
//! [`DEFAULT_LOG_FILTER`]) and is swapped for the configured filter once the
//! config is known, unless `RUST_LOG` was set.

use crate::config::SolverConfig;
use tracing::{debug, Subscriber};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{reload, EnvFilter, Registry};

/// Filter used until the config has been read.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Handle for replacing the active filter.
pub type FilterHandle = reload::Handle<EnvFilter, Registry>;

/// Returns `RUST_LOG` as a filter, or [`DEFAULT_LOG_FILTER`] when unset or invalid.
pub fn initial_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Builds a formatting subscriber writing to `make_writer` behind a reloadable filter.
pub fn subscriber<W>(
    filter: EnvFilter,
    make_writer: W,
) -> (impl Subscriber + Send + Sync + 'static, FilterHandle)
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let (filter, handle) = reload::Layer::new(filter);
    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(make_writer));
    (subscriber, handle)
}

/// Switches to the configured filter unless `RUST_LOG` takes precedence.
pub fn apply_config_filter(
    handle: &FilterHandle,
    config: &SolverConfig,
) -> Result<(), reload::Error> {
    if std::env::var_os(EnvFilter::DEFAULT_ENV).is_some() {
        debug!("RUST_LOG is set, keeping it over the configured filter");
        return Ok(());
    }
    handle.reload(EnvFilter::new(config.log_filter()))
}
