//! In-memory document host
//!
//! A small arena-backed document with a "stylesheet" of hiding rules. It
//! stands in for a rendering engine wherever a real browser is not available:
//! unit tests, the CLI simulator and benchmarks.

use crate::probe::{HostError, ProbeHost};
use crate::selector::{parse_selector, ParsedSelector, SelectorError};

/// Handle to a node in a [`MemoryDom`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RuleScope {
    /// `selector { display: none }`
    Element,
    /// `selector ~ * { display: none }`
    FollowingSiblings,
}

#[derive(Debug, Clone)]
struct HidingRule {
    selector: ParsedSelector,
    scope: RuleScope,
}

#[derive(Debug, Clone)]
struct NodeData {
    tag: String,
    attributes: Vec<(String, String)>,
    forced_shown: bool,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl NodeData {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            attributes: Vec::new(),
            forced_shown: false,
            parent: None,
            children: Vec::new(),
        }
    }
}

/// Arena document with a configurable hiding stylesheet.
#[derive(Debug, Clone)]
pub struct MemoryDom {
    nodes: Vec<NodeData>,
    body: NodeId,
    body_after_polls: u32,
    body_checks: u32,
    rules: Vec<HidingRule>,
    failing: Vec<ParsedSelector>,
    attach_count: usize,
    detach_count: usize,
}

impl Default for MemoryDom {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDom {
    /// Document whose body is available from the start.
    pub fn new() -> Self {
        Self {
            nodes: vec![NodeData::new("body")],
            body: NodeId(0),
            body_after_polls: 0,
            body_checks: 0,
            rules: Vec::new(),
            failing: Vec::new(),
            attach_count: 0,
            detach_count: 0,
        }
    }

    /// Report no body for the first `polls` checks.
    pub fn with_body_after(mut self, polls: u32) -> Self {
        self.body_after_polls = polls;
        self
    }

    /// Hide every element matching `selector`, the way a blocker's
    /// element-hiding rule does.
    pub fn hide(&mut self, selector: &str) -> Result<(), SelectorError> {
        self.add_rule(selector, RuleScope::Element)
    }

    pub fn hide_all<'a>(&mut self, selectors: impl IntoIterator<Item = &'a str>) -> Result<(), SelectorError> {
        for selector in selectors {
            self.hide(selector)?;
        }
        Ok(())
    }

    /// Hide every later sibling of an element matching `selector`.
    pub fn hide_following_siblings(&mut self, selector: &str) -> Result<(), SelectorError> {
        self.add_rule(selector, RuleScope::FollowingSiblings)
    }

    /// Make layout reads fail for elements matching `selector`.
    pub fn fail_layout_for(&mut self, selector: &str) -> Result<(), SelectorError> {
        self.failing.push(parse_selector(selector)?);
        Ok(())
    }

    fn add_rule(&mut self, selector: &str, scope: RuleScope) -> Result<(), SelectorError> {
        let selector = parse_selector(selector)?;
        self.rules.push(HidingRule { selector, scope });
        Ok(())
    }

    pub fn body(&self) -> NodeId {
        self.body
    }

    /// Number of times the body was checked for.
    pub fn body_checks(&self) -> u32 {
        self.body_checks
    }

    /// Nodes currently attached directly under the body.
    pub fn body_children(&self) -> usize {
        self.nodes[self.body.0].children.len()
    }

    pub fn attach_count(&self) -> usize {
        self.attach_count
    }

    pub fn detach_count(&self) -> usize {
        self.detach_count
    }

    /// Total nodes ever created, body included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        &self.nodes[node.0].children
    }

    pub fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.nodes[node.0]
            .attributes
            .iter()
            .find(|(attr, _)| attr == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn tag(&self, node: NodeId) -> &str {
        &self.nodes[node.0].tag
    }

    pub fn is_forced_shown(&self, node: NodeId) -> bool {
        self.nodes[node.0].forced_shown
    }

    fn node(&self, node: &NodeId) -> Result<&NodeData, HostError> {
        self.nodes
            .get(node.0)
            .ok_or_else(|| HostError::Layout(format!("unknown node {}", node.0)))
    }

    fn matches(&self, selector: &ParsedSelector, node: NodeId) -> bool {
        let data = &self.nodes[node.0];
        node != self.body && selector.matches(&data.tag, &data.attributes)
    }

    fn is_hidden(&self, node: NodeId) -> bool {
        let data = &self.nodes[node.0];
        if data.forced_shown {
            return false;
        }

        let preceding: &[NodeId] = match data.parent {
            Some(parent) => {
                let siblings = &self.nodes[parent.0].children;
                let position = siblings.iter().position(|&id| id == node).unwrap_or(0);
                &siblings[..position]
            }
            None => &[],
        };

        self.rules.iter().any(|rule| match rule.scope {
            RuleScope::Element => self.matches(&rule.selector, node),
            RuleScope::FollowingSiblings => preceding
                .iter()
                .any(|&sibling| self.matches(&rule.selector, sibling)),
        })
    }
}

impl ProbeHost for MemoryDom {
    type Node = NodeId;

    fn create_element(&mut self, tag: &str) -> Result<NodeId, HostError> {
        if tag.is_empty() {
            return Err(HostError::CreateElement {
                tag: tag.to_string(),
                reason: "empty tag name".to_string(),
            });
        }
        self.nodes.push(NodeData::new(tag));
        Ok(NodeId(self.nodes.len() - 1))
    }

    fn set_attribute(&mut self, node: &NodeId, name: &str, value: &str) -> Result<(), HostError> {
        let data = self.nodes.get_mut(node.0).ok_or_else(|| HostError::SetAttribute {
            name: name.to_string(),
            reason: format!("unknown node {}", node.0),
        })?;

        match data.attributes.iter_mut().find(|(attr, _)| attr == name) {
            Some((_, existing)) => *existing = value.to_string(),
            None => data.attributes.push((name.to_string(), value.to_string())),
        }
        Ok(())
    }

    fn force_show(&mut self, node: &NodeId) -> Result<(), HostError> {
        let data = self
            .nodes
            .get_mut(node.0)
            .ok_or_else(|| HostError::Style(format!("unknown node {}", node.0)))?;
        data.forced_shown = true;
        Ok(())
    }

    fn append_child(&mut self, parent: &NodeId, child: &NodeId) -> Result<(), HostError> {
        if parent.0 >= self.nodes.len() || child.0 >= self.nodes.len() {
            return Err(HostError::Append("unknown node".to_string()));
        }
        if self.nodes[child.0].parent.is_some() {
            return Err(HostError::Append(format!("node {} already has a parent", child.0)));
        }
        self.nodes[child.0].parent = Some(*parent);
        self.nodes[parent.0].children.push(*child);
        Ok(())
    }

    fn has_body(&mut self) -> bool {
        self.body_checks += 1;
        self.body_checks > self.body_after_polls
    }

    fn attach_to_body(&mut self, node: &NodeId) -> Result<(), HostError> {
        if self.body_checks <= self.body_after_polls {
            return Err(HostError::Attach("document has no body".to_string()));
        }
        let body = self.body;
        self.append_child(&body, node)
            .map_err(|e| HostError::Attach(e.to_string()))?;
        self.attach_count += 1;
        Ok(())
    }

    fn has_no_layout_box(&self, node: &NodeId) -> Result<bool, HostError> {
        let data = self.node(node)?;
        if self.failing.iter().any(|selector| self.matches(selector, *node)) {
            return Err(HostError::Layout(format!("layout unavailable for <{}>", data.tag)));
        }

        let mut current = Some(*node);
        while let Some(id) = current {
            if id == self.body {
                return Ok(false);
            }
            if self.is_hidden(id) {
                return Ok(true);
            }
            current = self.nodes[id.0].parent;
        }

        // Not connected to the document
        Ok(true)
    }

    fn detach(&mut self, node: &NodeId) {
        let Some(parent) = self.nodes.get(node.0).and_then(|data| data.parent) else {
            return;
        };
        self.nodes[parent.0].children.retain(|&id| id != *node);
        self.nodes[node.0].parent = None;
        self.detach_count += 1;
    }
}
