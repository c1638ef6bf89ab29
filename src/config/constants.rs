//! Configuration constants.
//!
//! This module defines the operational constants used throughout the
//! application: probe concurrency, timeouts, and the default User-Agent.

use std::time::Duration;

/// Maximum number of link probes in flight at once (admission gate width).
///
/// Probes beyond this limit wait for a semaphore permit. Raising this speeds
/// up pages with many links at the cost of hammering the target hosts harder.
pub const MAX_CONCURRENT_PROBES: usize = 10;

/// Per-request timeout for the page fetch, in seconds.
pub const FETCH_TIMEOUT_SECS: u64 = 10;

/// Per-request timeout for each link probe, in seconds.
///
/// Probes are lightweight HEAD requests; a link that cannot answer within
/// this window is counted as unreachable.
pub const PROBE_TIMEOUT_SECS: u64 = 10;

/// Per-request timeout for the page fetch.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(FETCH_TIMEOUT_SECS);

/// Per-request timeout for each link probe.
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(PROBE_TIMEOUT_SECS);

/// Default User-Agent string for HTTP requests.
///
/// Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str = concat!("page_audit/", env!("CARGO_PKG_VERSION"));
