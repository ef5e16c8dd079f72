//! Probe engine
//!
//! Builds one hidden-proof element per selector, attaches them to the
//! document in a single mutation, and reads which of them ended up without a
//! layout box. Content blockers hide elements by injecting `display: none`
//! rules for the selectors on their lists, so a probe without a box means the
//! host applied one of those rules.

use std::collections::HashSet;
use std::future::Future;
use std::time::Duration;

use log::{debug, warn};

use crate::catalog::CatalogSelector;
use crate::selector::ElementSpec;

/// Delay between two checks for the document body.
pub const BODY_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Error type for host primitives.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HostError {
    #[error("Failed to create <{tag}>: {reason}")]
    CreateElement { tag: String, reason: String },
    #[error("Failed to set attribute '{name}': {reason}")]
    SetAttribute { name: String, reason: String },
    #[error("Failed to force element display: {0}")]
    Style(String),
    #[error("Failed to append child: {0}")]
    Append(String),
    #[error("Failed to attach probe tree to body: {0}")]
    Attach(String),
    #[error("Failed to read layout state: {0}")]
    Layout(String),
}

/// Error type for a detection call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DetectError {
    #[error("Failed to build probe tree: {0}")]
    Build(#[source] HostError),
    #[error("Failed to attach probe tree: {0}")]
    Attach(#[source] HostError),
    #[error("Another detection call is already probing this document")]
    Busy,
}

/// Document and rendering primitives the probe engine runs against.
pub trait ProbeHost {
    type Node;

    /// Create a detached element.
    fn create_element(&mut self, tag: &str) -> Result<Self::Node, HostError>;

    fn set_attribute(&mut self, node: &Self::Node, name: &str, value: &str) -> Result<(), HostError>;

    /// Apply `display: block !important` inline.
    fn force_show(&mut self, node: &Self::Node) -> Result<(), HostError>;

    fn append_child(&mut self, parent: &Self::Node, child: &Self::Node) -> Result<(), HostError>;

    /// Whether the document body exists yet.
    fn has_body(&mut self) -> bool;

    fn attach_to_body(&mut self, node: &Self::Node) -> Result<(), HostError>;

    /// True when the element or one of its ancestors is not rendered.
    fn has_no_layout_box(&self, node: &Self::Node) -> Result<bool, HostError>;

    /// Remove the node from its parent. No-op when it has none.
    fn detach(&mut self, node: &Self::Node);
}

/// Cooperative sleep used while waiting for the document body.
pub trait Sleep {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()>;
}

/// Selectors found suppressed by one probe run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProbeResult {
    blocked: HashSet<String>,
}

impl ProbeResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark_blocked(&mut self, selector: &str) {
        self.blocked.insert(selector.to_string());
    }

    pub fn is_blocked(&self, selector: &str) -> bool {
        self.blocked.contains(selector)
    }

    pub fn blocked_count(&self) -> usize {
        self.blocked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocked.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for ProbeResult {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self {
            blocked: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Attached probe tree. Dropping it detaches the tree, on every exit path.
struct AttachedTree<'h, H: ProbeHost> {
    host: &'h mut H,
    root: H::Node,
}

impl<H: ProbeHost> Drop for AttachedTree<'_, H> {
    fn drop(&mut self) {
        self.host.detach(&self.root);
    }
}

fn build_element<H: ProbeHost>(host: &mut H, spec: &ElementSpec) -> Result<H::Node, HostError> {
    let element = host.create_element(&spec.tag)?;
    for (name, value) in &spec.attributes {
        host.set_attribute(&element, name, value)?;
    }
    Ok(element)
}

/// Probe every selector and report which ones the host suppressed.
///
/// All elements are built before the tree touches the document, so the host
/// sees one mutation followed by one layout pass. The wait for the body has
/// no upper bound.
pub async fn probe_selectors<H, S>(
    host: &mut H,
    sleeper: &S,
    selectors: &[&CatalogSelector],
    poll_interval: Duration,
) -> Result<ProbeResult, DetectError>
where
    H: ProbeHost,
    S: Sleep,
{
    let root = host.create_element("div").map_err(DetectError::Build)?;
    host.force_show(&root).map_err(DetectError::Build)?;

    let mut elements = Vec::with_capacity(selectors.len());
    for selector in selectors {
        let element = build_element(host, selector.element()).map_err(DetectError::Build)?;
        // Each probe gets its own parent so `+` and `~` rules can't reach a neighbour
        let holder = host.create_element("div").map_err(DetectError::Build)?;
        host.force_show(&holder).map_err(DetectError::Build)?;
        host.append_child(&holder, &element).map_err(DetectError::Build)?;
        host.append_child(&root, &holder).map_err(DetectError::Build)?;
        elements.push(element);
    }

    let mut polls = 0u32;
    while !host.has_body() {
        sleeper.sleep(poll_interval).await;
        polls += 1;
    }
    if polls > 0 {
        debug!("document body available after {} polls", polls);
    }

    let tree = AttachedTree { host, root };
    tree.host.attach_to_body(&tree.root).map_err(DetectError::Attach)?;

    let mut result = ProbeResult::new();
    for (selector, element) in selectors.iter().zip(&elements) {
        match tree.host.has_no_layout_box(element) {
            Ok(true) => result.mark_blocked(selector.text()),
            Ok(false) => {}
            Err(e) => warn!("skipping selector '{}': {}", selector.text(), e),
        }
    }
    drop(tree);

    debug!("probed {} selectors, {} blocked", selectors.len(), result.blocked_count());
    Ok(result)
}

#[cfg(test)]
mod tests {
    use std::future::{ready, Future};

    use super::*;
    use crate::catalog::Catalog;
    use crate::dom::{MemoryDom, NodeId};

    struct NoopSleeper;

    impl Sleep for NoopSleeper {
        fn sleep(&self, _duration: Duration) -> impl Future<Output = ()> {
            ready(())
        }
    }

    /// Remembers the attached root so the tree can be inspected afterwards.
    struct SnapshotHost {
        dom: MemoryDom,
        root: Option<NodeId>,
    }

    impl ProbeHost for SnapshotHost {
        type Node = NodeId;

        fn create_element(&mut self, tag: &str) -> Result<NodeId, HostError> {
            self.dom.create_element(tag)
        }

        fn set_attribute(&mut self, node: &NodeId, name: &str, value: &str) -> Result<(), HostError> {
            self.dom.set_attribute(node, name, value)
        }

        fn force_show(&mut self, node: &NodeId) -> Result<(), HostError> {
            self.dom.force_show(node)
        }

        fn append_child(&mut self, parent: &NodeId, child: &NodeId) -> Result<(), HostError> {
            self.dom.append_child(parent, child)
        }

        fn has_body(&mut self) -> bool {
            self.dom.has_body()
        }

        fn attach_to_body(&mut self, node: &NodeId) -> Result<(), HostError> {
            assert_eq!(self.dom.body_children(), 0, "probe tree attached twice");
            self.root = Some(*node);
            self.dom.attach_to_body(node)
        }

        fn has_no_layout_box(&self, node: &NodeId) -> Result<bool, HostError> {
            self.dom.has_no_layout_box(node)
        }

        fn detach(&mut self, node: &NodeId) {
            self.dom.detach(node)
        }
    }

    #[tokio::test]
    async fn test_probe_tree_shape() {
        let catalog = Catalog::new([
            ("one", vec!["#a", "div.b.c"]),
            ("two", vec!["a[href^=\"http://x/\"][title=\"T\" i]"]),
        ])
        .expect("catalog should build");
        let selectors: Vec<&CatalogSelector> = catalog.selectors().collect();
        let mut host = SnapshotHost { dom: MemoryDom::new(), root: None };

        let result = probe_selectors(&mut host, &NoopSleeper, &selectors, BODY_POLL_INTERVAL)
            .await
            .expect("probe");
        assert!(result.is_empty());

        let dom = &host.dom;
        let root = host.root.expect("tree was attached");
        assert!(dom.is_forced_shown(root));
        assert_eq!(dom.children(root).len(), 3);

        let mut probes = Vec::new();
        for &holder in dom.children(root) {
            assert!(dom.is_forced_shown(holder));
            assert_eq!(dom.children(holder).len(), 1);
            let probe = dom.children(holder)[0];
            assert!(!dom.is_forced_shown(probe));
            probes.push(probe);
        }

        assert_eq!(dom.attribute(probes[0], "id"), Some("a"));
        assert_eq!(dom.tag(probes[1]), "div");
        assert_eq!(dom.attribute(probes[1], "class"), Some("b c"));
        assert_eq!(dom.tag(probes[2]), "a");
        assert_eq!(dom.attribute(probes[2], "href"), Some("http://x/"));
        assert_eq!(dom.attribute(probes[2], "title"), Some("T"));

        assert_eq!(dom.body_children(), 0);
    }

    #[tokio::test]
    async fn test_probe_marks_only_hidden_selectors() {
        let catalog = Catalog::new([("one", vec!["#a", "#b", "[data-ad]"])]).expect("catalog should build");
        let selectors: Vec<&CatalogSelector> = catalog.selectors().collect();
        let mut dom = MemoryDom::new();
        dom.hide_all(["#b", "div[data-ad]"]).expect("valid selectors");

        let result = probe_selectors(&mut dom, &NoopSleeper, &selectors, BODY_POLL_INTERVAL)
            .await
            .expect("probe");

        assert!(!result.is_blocked("#a"));
        assert!(result.is_blocked("#b"));
        assert!(result.is_blocked("[data-ad]"));
        assert_eq!(result.blocked_count(), 2);
    }
}
