//! Per-invocation geometry and style cache
//!
//! Layout-box and resolved-style queries are the dominant cost on a large
//! tree, and every stage of the pipeline reads them. The cache bounds each
//! node's cost to one underlying host query per kind per invocation.
//!
//! Entries are keyed by node identity and never outlive the invocation that
//! created them: [`GeometryCache::clear`] runs at the start of every scan and
//! again on explicit overlay clear. Failed queries are logged and reported as
//! `None`; callers treat absent geometry as "cannot evaluate, not visible".
//! Failures are not cached, so a transiently detached node gets re-queried
//! on its next use.

use crate::geometry::Rect;
use crate::host::{Host, NodeId};
use crate::style::ComputedStyle;
use rustc_hash::FxHashMap;
use tracing::warn;

/// Memoized layout-box and resolved-style lookups, one table per kind.
#[derive(Debug, Default)]
pub struct GeometryCache {
  boxes: FxHashMap<NodeId, Rect>,
  styles: FxHashMap<NodeId, ComputedStyle>,
}

impl GeometryCache {
  pub fn new() -> Self {
    Self::default()
  }

  /// The node's bounding box, computed through the host on first use.
  pub fn bounding_box<H: Host>(&mut self, host: &H, node: NodeId) -> Option<Rect> {
    if let Some(rect) = self.boxes.get(&node) {
      return Some(*rect);
    }
    match host.bounding_box_of(node) {
      Ok(rect) => {
        self.boxes.insert(node, rect);
        Some(rect)
      }
      Err(e) => {
        warn!(node = node.0, error = %e, "bounding box query failed");
        None
      }
    }
  }

  /// The node's resolved style, computed through the host on first use.
  pub fn style<H: Host>(&mut self, host: &H, node: NodeId) -> Option<ComputedStyle> {
    if let Some(style) = self.styles.get(&node) {
      return Some(*style);
    }
    match host.resolved_style_of(node) {
      Ok(style) => {
        self.styles.insert(node, style);
        Some(style)
      }
      Err(e) => {
        warn!(node = node.0, error = %e, "resolved style query failed");
        None
      }
    }
  }

  /// Discards both tables.
  pub fn clear(&mut self) {
    self.boxes.clear();
    self.styles.clear();
  }

  /// Number of cached entries across both tables.
  pub fn len(&self) -> usize {
    self.boxes.len() + self.styles.len()
  }

  pub fn is_empty(&self) -> bool {
    self.boxes.is_empty() && self.styles.is_empty()
  }
}
