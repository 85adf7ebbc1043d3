//! Tracing setup for hosts that want to see layout diagnostics.
//!
//! The layout crates only emit events; nothing is printed until a
//! subscriber is installed. [`install_tracing`] installs a plain `fmt`
//! subscriber once per process. `RUST_LOG` takes precedence over the level
//! passed in, e.g. `RUST_LOG=flowlayout_layout=trace` shows every line break.

use std::sync::Once;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

static TRACING_INSTALLED: Once = Once::new();

/// Install the console subscriber (idempotent).
///
/// Does nothing if another global subscriber was already set by the host.
pub fn install_tracing(level: LevelFilter) {
    TRACING_INSTALLED.call_once(|| {
        let filter = EnvFilter::builder()
            .with_default_directive(level.into())
            .from_env_lossy();

        let console = fmt::layer().with_target(true).with_filter(filter);

        if tracing_subscriber::registry().with(console).try_init().is_err() {
            tracing::debug!("global subscriber already set, keeping it");
        }
    });
}

/// Whether [`install_tracing`] has run in this process.
#[must_use]
pub fn is_installed() -> bool {
    TRACING_INSTALLED.is_completed()
}
