//! Bounded-concurrency link reachability checks.
//!
//! Every classified link gets one lightweight existence probe (a HEAD
//! request). At most `width` probes are in flight at once, gated by a
//! counting semaphore; the rest wait for a permit. Probe tasks only ever
//! emit an outcome into a channel — the tally is owned exclusively by the
//! single consumer that drains it, so no probe result is dropped, counted
//! twice, or raced over.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use log::{debug, warn};
use strum::IntoEnumIterator;
use strum_macros::EnumIter;
use tokio::sync::{mpsc, Semaphore};

use super::links::ClassifiedLink;
use crate::transport::{Transport, TransportError};

/// Why a probe counted as unreachable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub(crate) enum ProbeFailure {
    /// The target answered with a status >= 400.
    ErrorStatus,
    /// The probe timed out.
    Timeout,
    /// The connection could not be established.
    Connect,
    /// Any other transport failure, including request construction errors.
    Transport,
}

impl ProbeFailure {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            ProbeFailure::ErrorStatus => "error status",
            ProbeFailure::Timeout => "timeout",
            ProbeFailure::Connect => "connection failure",
            ProbeFailure::Transport => "transport failure",
        }
    }
}

/// Outcome of one probe, as emitted by a probe task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ProbeOutcome {
    Reachable,
    Unreachable(ProbeFailure),
}

/// Probes every classified link and returns how many were unreachable.
///
/// Spawns one task per link; each acquires a semaphore permit, issues the
/// probe with the fixed per-request timeout, and sends exactly one outcome.
/// The call returns only once every outstanding probe has been drained, so
/// the number of outcomes collected always equals the number of links
/// submitted. Zero links means zero probes.
pub(crate) async fn check_links(
    transport: Arc<dyn Transport>,
    links: &[ClassifiedLink],
    width: usize,
    timeout: Duration,
) -> usize {
    if links.is_empty() {
        return 0;
    }

    let semaphore = Arc::new(Semaphore::new(width.max(1)));
    let (outcome_tx, mut outcome_rx) = mpsc::channel(links.len());

    for link in links {
        let transport = Arc::clone(&transport);
        let semaphore = Arc::clone(&semaphore);
        let outcome_tx = outcome_tx.clone();
        let target = link.resolved.to_string();
        tokio::spawn(async move {
            let outcome = match semaphore.acquire_owned().await {
                Ok(_permit) => probe(transport.as_ref(), &target, timeout).await,
                // The semaphore is never closed while probes run; if it were,
                // the link still owes the consumer an outcome.
                Err(_) => ProbeOutcome::Unreachable(ProbeFailure::Transport),
            };
            let _ = outcome_tx.send(outcome).await;
        });
    }
    drop(outcome_tx);

    // Single consumer: exclusively owns the tally and drains to completion.
    let mut inaccessible = 0usize;
    let mut received = 0usize;
    let mut failure_counts: HashMap<ProbeFailure, usize> = HashMap::new();
    while let Some(outcome) = outcome_rx.recv().await {
        received += 1;
        if let ProbeOutcome::Unreachable(failure) = outcome {
            inaccessible += 1;
            *failure_counts.entry(failure).or_insert(0) += 1;
        }
    }
    debug_assert_eq!(received, links.len());

    for failure in ProbeFailure::iter() {
        if let Some(count) = failure_counts.get(&failure) {
            debug!("{count} probe(s) unreachable: {}", failure.as_str());
        }
    }

    inaccessible
}

/// Issues one existence probe and classifies the outcome.
async fn probe(transport: &dyn Transport, url: &str, timeout: Duration) -> ProbeOutcome {
    match transport.head(url, timeout).await {
        Ok(status) if status < 400 => ProbeOutcome::Reachable,
        Ok(status) => {
            warn!("Link {url} returned error status {status}");
            ProbeOutcome::Unreachable(ProbeFailure::ErrorStatus)
        }
        Err(e) => {
            warn!("Probe failed for {url}: {e}");
            ProbeOutcome::Unreachable(match e {
                TransportError::Timeout => ProbeFailure::Timeout,
                TransportError::Connect(_) => ProbeFailure::Connect,
                TransportError::Request(_) => ProbeFailure::Transport,
            })
        }
    }
}
