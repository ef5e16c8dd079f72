//! BlockerProbe Core Library
//!
//! Detects which content-blocker filter lists are active in a document by
//! probing it with elements that the lists would hide.
//!
//! # Architecture
//!
//! A [`Catalog`] maps filter-list names to simple CSS selectors. Each call to
//! [`detect`] first asks an [`Applicability`] gate whether the environment
//! keeps blockers active reliably, then builds one probe element per selector
//! through a [`ProbeHost`], attaches the whole tree once, and reads which
//! probes lost their layout box. A list is active when a strict majority of
//! its probes were hidden.
//!
//! # Modules
//!
//! - `selector`: simple-selector parser and element synthesis
//! - `catalog`: validated, read-only filter-list catalog
//! - `gate`: engine-family applicability gate
//! - `probe`: host traits and the probe engine
//! - `aggregate`: majority verdicts and the debug report
//! - `detector`: detection entry points
//! - `dom`: in-memory host for tests and simulation

pub mod aggregate;
pub mod catalog;
pub mod detector;
pub mod dom;
pub mod gate;
pub mod probe;
pub mod selector;

// Re-export commonly used types
pub use aggregate::{active_lists, is_majority, DebugReport};
pub use catalog::{Catalog, CatalogError, CatalogSelector, FilterList};
pub use detector::{detect, detect_restricted, DetectOptions, Detection};
pub use dom::MemoryDom;
pub use gate::{Applicability, EngineSignals};
pub use probe::{probe_selectors, DetectError, HostError, ProbeHost, ProbeResult, Sleep, BODY_POLL_INTERVAL};
pub use selector::{parse_selector, ElementSpec, ParsedSelector, SelectorError};
