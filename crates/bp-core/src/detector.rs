//! Detection entry point
//!
//! Gate, probe, aggregate. The result is either the sorted list of active
//! filter-list names (possibly empty) or `Unsupported` when the environment
//! can't produce a reliable signal. An empty list does not prove that no
//! blocker is installed: a user can disable blockers per page.

use std::time::Duration;

use log::{debug, info};
use serde::Serialize;

use crate::aggregate::{active_lists, DebugReport};
use crate::catalog::{Catalog, CatalogSelector};
use crate::gate::Applicability;
use crate::probe::{probe_selectors, DetectError, ProbeHost, Sleep, BODY_POLL_INTERVAL};

/// Outcome of a detection call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Detection {
    /// The environment does not keep blockers active reliably.
    Unsupported,
    /// Active filter lists, sorted alphabetically.
    Detected(Vec<String>),
}

impl Detection {
    pub fn is_supported(&self) -> bool {
        matches!(self, Detection::Detected(_))
    }

    pub fn active_lists(&self) -> Option<&[String]> {
        match self {
            Detection::Unsupported => None,
            Detection::Detected(lists) => Some(lists),
        }
    }
}

/// Options for a detection call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectOptions {
    /// Log the raw per-selector measurements
    pub debug: bool,
    /// Delay between checks for the document body
    pub poll_interval: Duration,
}

impl Default for DetectOptions {
    fn default() -> Self {
        Self {
            debug: false,
            poll_interval: BODY_POLL_INTERVAL,
        }
    }
}

/// Detect which catalog filter lists are active in `host`.
pub async fn detect<G, H, S>(
    catalog: &Catalog,
    gate: &G,
    host: &mut H,
    sleeper: &S,
    options: &DetectOptions,
) -> Result<Detection, DetectError>
where
    G: Applicability + ?Sized,
    H: ProbeHost,
    S: Sleep,
{
    if !gate.is_applicable() {
        debug!("content blocker detection is not applicable here");
        return Ok(Detection::Unsupported);
    }

    let selectors: Vec<&CatalogSelector> = catalog.selectors().collect();
    let result = probe_selectors(host, sleeper, &selectors, options.poll_interval).await?;

    if options.debug {
        info!("{}", DebugReport::new(catalog, &result));
    }

    Ok(Detection::Detected(active_lists(catalog, &result)))
}

/// Stand-in for environments where touching the document is not allowed.
/// Always reports no signal.
pub fn detect_restricted(options: &DetectOptions) -> Detection {
    if options.debug {
        debug!("using restricted content blocker detection, no probes are run");
    }
    Detection::Unsupported
}
