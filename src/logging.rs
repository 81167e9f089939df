//
//  geoserver-client
//  logging.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the log filter, e.g. `GEOSERVER_DEBUG=debug`.
pub const LOG_ENV: &str = "GEOSERVER_DEBUG";

/// Installs a `tracing` subscriber filtered by `GEOSERVER_DEBUG`.
///
/// Defaults to `warn`. Every request is logged at `debug`; unexpected status
/// codes at `warn`. Calling this again, or after another subscriber was
/// installed, does nothing.
pub fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .try_init();
}
