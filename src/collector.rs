//! Tree collection: one traversal, then a filtering pass
//!
//! The walk is a single pre-order DFS over the body's element descendants.
//! It collects every node passing the candidate-acceptance filter and the
//! viewport-intersection filter, the "all visible-ish elements" set. Denied
//! leaf subtrees (`svg`, `script`, ...) are pruned outright: nothing under
//! them can be actionable.
//!
//! The second pass never touches the tree again. It runs the interactivity
//! classifier, the occlusion test, and the viewport filter over the candidate
//! set, preserving document order, which is what makes overlay indices
//! deterministic for an unmutated page.

use crate::cache::GeometryCache;
use crate::geometry::Viewport;
use crate::host::{Host, NodeId, NodeKind};
use crate::interactivity;
use crate::occlusion;
use crate::visibility;

/// Collects candidate elements: body descendants passing the acceptance and
/// viewport filters, in document order. The body itself is not a candidate.
pub fn collect_candidates<H: Host>(
  cache: &mut GeometryCache,
  host: &H,
  viewport: &Viewport,
) -> Vec<NodeId> {
  let mut candidates = Vec::new();
  let Some(body) = host.body() else {
    return candidates;
  };

  let mut stack: Vec<NodeId> = Vec::new();
  push_element_children(host, body, &mut stack);

  while let Some(node) = stack.pop() {
    if visibility::is_traversal_denied(host, node) {
      continue;
    }
    if visibility::is_element_accepted(host, node) {
      if let Some(rect) = cache.bounding_box(host, node) {
        if viewport.intersects(&rect) {
          candidates.push(node);
        }
      }
    }
    push_element_children(host, node, &mut stack);
  }
  candidates
}

/// Filters candidates down to the final ordered interactive set.
pub fn filter_interactive<H: Host>(
  cache: &mut GeometryCache,
  host: &H,
  candidates: &[NodeId],
  viewport: &Viewport,
) -> Vec<NodeId> {
  candidates
    .iter()
    .copied()
    .filter(|&node| {
      interactivity::is_interactive(cache, host, node)
        && occlusion::is_top_element(cache, host, node, viewport)
        && cache
          .bounding_box(host, node)
          .is_some_and(|rect| viewport.intersects(&rect))
    })
    .collect()
}

// Children are pushed reversed so the stack pops them in document order.
fn push_element_children<H: Host>(host: &H, node: NodeId, stack: &mut Vec<NodeId>) {
  let mut children: Vec<NodeId> = host
    .children(node)
    .into_iter()
    .filter(|&child| host.node_kind(child) == NodeKind::Element)
    .collect();
  children.reverse();
  stack.append(&mut children);
}
