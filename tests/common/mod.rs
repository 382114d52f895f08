//! In-memory page fixture implementing the `Host` capability.
//!
//! Hit testing approximates a browser: elements are "painted" in document
//! order, so the last element in document order whose box contains the point
//! wins. Selector resolution implements exactly the grammar the engine
//! generates (`#id`, `tag.c1.c2`, `a > b`, `tag:nth-child(n)`).

#![allow(dead_code)]

use dommark::{
  ComputedStyle, Display, Host, HostError, Marker, NodeId, NodeKind, Point, Rect, Size,
  Visibility,
};
use std::cell::Cell;
use std::collections::HashMap;

#[derive(Debug)]
struct FixtureNode {
  kind: NodeKind,
  tag: Option<String>,
  attrs: Vec<(String, String)>,
  parent: Option<NodeId>,
  children: Vec<NodeId>,
  text: Option<String>,
  rect: Rect,
  text_rect: Option<Rect>,
  style: ComputedStyle,
  scroll: Point,
  disabled: bool,
  readonly: bool,
  inert: bool,
  value: Option<String>,
  in_primary: bool,
  detached: bool,
}

impl FixtureNode {
  fn element(tag: &str, parent: Option<NodeId>) -> Self {
    Self {
      kind: NodeKind::Element,
      tag: Some(tag.to_owned()),
      attrs: Vec::new(),
      parent,
      children: Vec::new(),
      text: None,
      rect: Rect::ZERO,
      text_rect: None,
      style: ComputedStyle::default(),
      scroll: Point::ZERO,
      disabled: false,
      readonly: false,
      inert: false,
      value: None,
      in_primary: true,
      detached: false,
    }
  }

  fn text(content: &str, parent: NodeId) -> Self {
    Self {
      kind: NodeKind::Text,
      tag: None,
      attrs: Vec::new(),
      parent: Some(parent),
      children: Vec::new(),
      text: Some(content.to_owned()),
      rect: Rect::ZERO,
      text_rect: None,
      style: ComputedStyle::default(),
      scroll: Point::ZERO,
      disabled: false,
      readonly: false,
      inert: false,
      value: None,
      in_primary: true,
      detached: false,
    }
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MarkerRecord {
  pub rect: Rect,
  pub label: usize,
  pub border: String,
  pub background: String,
}

pub struct FixtureHost {
  nodes: Vec<FixtureNode>,
  viewport: Size,
  html: NodeId,
  body: NodeId,

  // Failure/capability knobs.
  pub fail_hit_tests: bool,
  pub check_visibility_supported: bool,

  // Host query counters (queries actually issued, not cache hits).
  pub box_queries: Cell<usize>,
  pub style_queries: Cell<usize>,

  // Marker surface log.
  pub markers: HashMap<String, MarkerRecord>,
  pub marker_order: Vec<String>,
  pub container_clears: usize,
  pub focused: Vec<String>,
  pub scrolled: Vec<String>,
}

impl FixtureHost {
  pub fn new(width: f32, height: f32) -> Self {
    let viewport_rect = Rect::new(0.0, 0.0, width, height);
    let mut html = FixtureNode::element("html", None);
    html.rect = viewport_rect;
    html.style.display = Display::Block;
    let mut body = FixtureNode::element("body", Some(NodeId(0)));
    body.rect = viewport_rect;
    body.style.display = Display::Block;
    html.children.push(NodeId(1));
    Self {
      nodes: vec![html, body],
      viewport: Size::new(width, height),
      html: NodeId(0),
      body: NodeId(1),
      fail_hit_tests: false,
      check_visibility_supported: false,
      box_queries: Cell::new(0),
      style_queries: Cell::new(0),
      markers: HashMap::new(),
      marker_order: Vec::new(),
      container_clears: 0,
      focused: Vec::new(),
      scrolled: Vec::new(),
    }
  }

  pub fn body_node(&self) -> NodeId {
    self.body
  }

  pub fn html_node(&self) -> NodeId {
    self.html
  }

  fn node(&self, id: NodeId) -> &FixtureNode {
    &self.nodes[id.0 as usize]
  }

  fn node_mut(&mut self, id: NodeId) -> &mut FixtureNode {
    &mut self.nodes[id.0 as usize]
  }

  pub fn element(&mut self, parent: NodeId, tag: &str) -> NodeId {
    let id = NodeId(self.nodes.len() as u64);
    let in_primary = self.node(parent).in_primary;
    let mut node = FixtureNode::element(tag, Some(parent));
    node.in_primary = in_primary;
    self.nodes.push(node);
    self.node_mut(parent).children.push(id);
    id
  }

  pub fn text(&mut self, parent: NodeId, content: &str) -> NodeId {
    let id = NodeId(self.nodes.len() as u64);
    let in_primary = self.node(parent).in_primary;
    let mut node = FixtureNode::text(content, parent);
    node.in_primary = in_primary;
    self.nodes.push(node);
    self.node_mut(parent).children.push(id);
    id
  }

  pub fn set_attr(&mut self, node: NodeId, name: &str, value: &str) {
    let attrs = &mut self.node_mut(node).attrs;
    if let Some(entry) = attrs.iter_mut().find(|(n, _)| n == name) {
      entry.1 = value.to_owned();
    } else {
      attrs.push((name.to_owned(), value.to_owned()));
    }
  }

  pub fn remove_attr(&mut self, node: NodeId, name: &str) {
    self.node_mut(node).attrs.retain(|(n, _)| n != name);
  }

  pub fn set_rect(&mut self, node: NodeId, rect: Rect) {
    self.node_mut(node).rect = rect;
  }

  pub fn set_text_rect(&mut self, node: NodeId, rect: Rect) {
    self.node_mut(node).text_rect = Some(rect);
  }

  pub fn style_mut(&mut self, node: NodeId) -> &mut ComputedStyle {
    &mut self.node_mut(node).style
  }

  pub fn set_scroll(&mut self, node: NodeId, x: f32, y: f32) {
    self.node_mut(node).scroll = Point::new(x, y);
  }

  pub fn set_disabled(&mut self, node: NodeId, disabled: bool) {
    self.node_mut(node).disabled = disabled;
  }

  pub fn set_readonly(&mut self, node: NodeId, readonly: bool) {
    self.node_mut(node).readonly = readonly;
  }

  pub fn set_inert(&mut self, node: NodeId, inert: bool) {
    self.node_mut(node).inert = inert;
  }

  pub fn set_value(&mut self, node: NodeId, value: &str) {
    self.node_mut(node).value = Some(value.to_owned());
  }

  /// Marks the node (and, implicitly, nodes created under it afterwards) as
  /// belonging to a nested frame document.
  pub fn set_in_frame(&mut self, node: NodeId) {
    self.node_mut(node).in_primary = false;
  }

  /// Simulates a node detaching mid-scan: geometry and style queries fail.
  pub fn detach(&mut self, node: NodeId) {
    self.node_mut(node).detached = true;
  }

  /// A visible element helper: tag + rect in one call.
  pub fn visible_element(&mut self, parent: NodeId, tag: &str, rect: Rect) -> NodeId {
    let id = self.element(parent, tag);
    self.set_rect(id, rect);
    id
  }

  pub fn marker_record(&self, id: &str) -> Option<&MarkerRecord> {
    self.markers.get(id)
  }

  // Paint-order hit testing: the last element in document order whose box
  // contains the point wins.
  fn hit_test(&self, point: Point) -> Option<NodeId> {
    let mut last = None;
    let mut order = Vec::new();
    self.document_order(self.html, &mut order);
    for id in order {
      let node = self.node(id);
      if node.kind != NodeKind::Element
        || node.detached
        || !node.in_primary
        || node.style.display == Display::None
        || node.style.visibility != Visibility::Visible
      {
        continue;
      }
      if !node.rect.is_empty() && node.rect.contains(point) {
        last = Some(id);
      }
    }
    last
  }

  fn document_order(&self, id: NodeId, out: &mut Vec<NodeId>) {
    let node = self.node(id);
    if node.kind == NodeKind::Element && node.style.display == Display::None {
      return;
    }
    out.push(id);
    for &child in &node.children {
      self.document_order(child, out);
    }
  }

  // --- Selector matching for the generated grammar ---

  fn matches_compound(&self, id: NodeId, part: &str) -> bool {
    let node = self.node(id);
    if node.kind != NodeKind::Element {
      return false;
    }
    if let Some(wanted) = part.strip_prefix('#') {
      return self
        .attr_of(id, "id")
        .is_some_and(|v| v == unescape(wanted));
    }

    let (head, nth) = match part.split_once(":nth-child(") {
      Some((head, rest)) => {
        let n = rest.strip_suffix(')').and_then(|n| n.parse::<usize>().ok());
        (head, n)
      }
      None => (part, None),
    };

    let mut segments = head.split('.');
    let tag = segments.next().unwrap_or_default();
    if !tag.is_empty() {
      let node_tag = node.tag.as_deref().unwrap_or_default();
      if !node_tag.eq_ignore_ascii_case(tag) {
        return false;
      }
    }
    for class in segments {
      let class = unescape(class);
      let has = self
        .attr_of(id, "class")
        .is_some_and(|v| v.split_whitespace().any(|c| c == class));
      if !has {
        return false;
      }
    }
    if let Some(n) = nth {
      let Some(parent) = node.parent else {
        return false;
      };
      let position = self
        .node(parent)
        .children
        .iter()
        .filter(|&&c| self.node(c).kind == NodeKind::Element)
        .position(|&c| c == id);
      match position {
        Some(index) => {
          if index + 1 != n {
            return false;
          }
        }
        None => return false,
      }
    }
    true
  }

  fn matches_chain(&self, id: NodeId, parts: &[&str]) -> bool {
    let Some((last, ancestors)) = parts.split_last() else {
      return false;
    };
    if !self.matches_compound(id, last) {
      return false;
    }
    match ancestors.split_last() {
      None => true,
      Some(_) => match self.node(id).parent {
        Some(parent) => self.matches_chain(parent, ancestors),
        None => false,
      },
    }
  }

  fn attr_of(&self, id: NodeId, name: &str) -> Option<String> {
    self
      .node(id)
      .attrs
      .iter()
      .find(|(n, _)| n == name)
      .map(|(_, v)| v.clone())
  }
}

// Drops simple `\x` escapes the way a selector engine would.
fn unescape(ident: &str) -> String {
  let mut out = String::with_capacity(ident.len());
  let mut chars = ident.chars();
  while let Some(c) = chars.next() {
    if c == '\\' {
      if let Some(next) = chars.next() {
        out.push(next);
      }
    } else {
      out.push(c);
    }
  }
  out
}

impl Host for FixtureHost {
  fn document_element(&self) -> NodeId {
    self.html
  }

  fn body(&self) -> Option<NodeId> {
    Some(self.body)
  }

  fn node_kind(&self, node: NodeId) -> NodeKind {
    self.node(node).kind
  }

  fn tag_name(&self, node: NodeId) -> Option<String> {
    self.node(node).tag.clone()
  }

  fn attribute(&self, node: NodeId, name: &str) -> Option<String> {
    self.attr_of(node, name)
  }

  fn attribute_names(&self, node: NodeId) -> Vec<String> {
    self.node(node).attrs.iter().map(|(n, _)| n.clone()).collect()
  }

  fn parent(&self, node: NodeId) -> Option<NodeId> {
    self.node(node).parent
  }

  fn children(&self, node: NodeId) -> Vec<NodeId> {
    self.node(node).children.clone()
  }

  fn text_content(&self, node: NodeId) -> Option<String> {
    self.node(node).text.clone()
  }

  fn in_primary_document(&self, node: NodeId) -> bool {
    self.node(node).in_primary
  }

  fn bounding_box_of(&self, node: NodeId) -> dommark::Result<Rect> {
    if self.node(node).detached {
      return Err(HostError::Geometry {
        node,
        message: "node is detached".to_owned(),
      });
    }
    self.box_queries.set(self.box_queries.get() + 1);
    Ok(self.node(node).rect)
  }

  fn resolved_style_of(&self, node: NodeId) -> dommark::Result<ComputedStyle> {
    if self.node(node).detached {
      return Err(HostError::Style {
        node,
        message: "node is detached".to_owned(),
      });
    }
    self.style_queries.set(self.style_queries.get() + 1);
    Ok(self.node(node).style)
  }

  fn text_box_of(&self, node: NodeId) -> dommark::Result<Rect> {
    let data = self.node(node);
    if data.detached {
      return Err(HostError::Geometry {
        node,
        message: "text node is detached".to_owned(),
      });
    }
    if let Some(rect) = data.text_rect {
      return Ok(rect);
    }
    // Default: the run fills the parent's box.
    match data.parent {
      Some(parent) => Ok(self.node(parent).rect),
      None => Ok(Rect::ZERO),
    }
  }

  fn topmost_node_at(&self, point: Point) -> dommark::Result<Option<NodeId>> {
    if self.fail_hit_tests {
      return Err(HostError::HitTest("hit testing disabled".to_owned()));
    }
    Ok(self.hit_test(point))
  }

  fn check_visibility(&self, node: NodeId) -> Option<bool> {
    if !self.check_visibility_supported {
      return None;
    }
    let style = self.node(node).style;
    Some(
      style.display != Display::None
        && style.visibility == Visibility::Visible
        && style.opacity > 0.0,
    )
  }

  fn viewport_size(&self) -> Size {
    self.viewport
  }

  fn scroll_offset_of(&self, node: NodeId) -> Point {
    self.node(node).scroll
  }

  fn disabled_property(&self, node: NodeId) -> bool {
    self.node(node).disabled
  }

  fn readonly_property(&self, node: NodeId) -> bool {
    self.node(node).readonly
  }

  fn inert_property(&self, node: NodeId) -> bool {
    self.node(node).inert
  }

  fn value_property(&self, node: NodeId) -> Option<String> {
    self.node(node).value.clone()
  }

  fn query_selector_count(&self, selector: &str) -> dommark::Result<usize> {
    let parts: Vec<&str> = selector.split(" > ").collect();
    let count = (0..self.nodes.len())
      .map(|i| NodeId(i as u64))
      .filter(|&id| self.matches_chain(id, &parts))
      .count();
    Ok(count)
  }

  fn insert_marker(&mut self, marker: &Marker) -> dommark::Result<()> {
    self.markers.insert(
      marker.id.clone(),
      MarkerRecord {
        rect: marker.rect,
        label: marker.label,
        border: marker.color.border.to_owned(),
        background: marker.color.background.to_owned(),
      },
    );
    self.marker_order.push(marker.id.clone());
    Ok(())
  }

  fn update_marker(&mut self, id: &str, rect: Rect) {
    if let Some(record) = self.markers.get_mut(id) {
      record.rect = rect;
    }
  }

  fn remove_marker(&mut self, id: &str) {
    self.markers.remove(id);
    self.marker_order.retain(|m| m != id);
  }

  fn clear_markers(&mut self) {
    self.markers.clear();
    self.marker_order.clear();
    self.container_clears += 1;
  }

  fn restyle_marker(&mut self, id: &str, background: &str, border: &str) {
    if let Some(record) = self.markers.get_mut(id) {
      record.background = background.to_owned();
      record.border = border.to_owned();
    }
    self.focused.push(id.to_owned());
  }

  fn scroll_marker_into_view(&mut self, id: &str) {
    self.scrolled.push(id.to_owned());
  }
}
