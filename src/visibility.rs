//! Visibility predicates and the candidate-acceptance filter
//!
//! Two distinct questions live here. "Is this element rendered at all"
//! (positive box, not `display: none`, not `visibility: hidden`) and "is this
//! text run actually readable" (non-empty run box, inside the expanded
//! viewport, owner element visible). The tree-walk acceptance filter is also
//! here because it is a visibility-shaped decision: structural containers are
//! always worth descending into, known non-rendering leaves never are.

use crate::cache::GeometryCache;
use crate::geometry::Viewport;
use crate::host::{Host, NodeId, NodeKind};
use crate::style::{Display, Visibility};
use tracing::warn;

/// Structural tags that bypass the leaf-deny filter during collection.
pub const ALWAYS_ACCEPT_TAGS: &[&str] = &[
  "body", "div", "main", "article", "section", "nav", "header", "footer",
];

/// Tags excluded from traversal entirely; nothing under them can render
/// actionable content.
pub const LEAF_DENY_TAGS: &[&str] = &[
  "svg", "script", "style", "link", "meta", "noscript", "template",
];

/// Candidate-acceptance filter for the tree walk.
///
/// Distinct from interactivity: this only decides whether a node is worth
/// keeping as a candidate at all.
pub fn is_element_accepted<H: Host>(host: &H, node: NodeId) -> bool {
  let Some(tag) = host.tag_name(node) else {
    return false;
  };
  let tag = tag.to_ascii_lowercase();
  if ALWAYS_ACCEPT_TAGS.contains(&tag.as_str()) {
    return true;
  }
  !LEAF_DENY_TAGS.contains(&tag.as_str())
}

/// True when the subtree rooted at this element should not be descended into.
pub fn is_traversal_denied<H: Host>(host: &H, node: NodeId) -> bool {
  match host.tag_name(node) {
    Some(tag) => LEAF_DENY_TAGS.contains(&tag.to_ascii_lowercase().as_str()),
    None => false,
  }
}

/// Element visibility: positive rendered box, `visibility` not hidden,
/// `display` not none.
///
/// Absent geometry or style (failed host query) counts as not visible.
pub fn is_element_visible<H: Host>(
  cache: &mut GeometryCache,
  host: &H,
  node: NodeId,
) -> bool {
  let Some(rect) = cache.bounding_box(host, node) else {
    return false;
  };
  if rect.width <= 0.0 || rect.height <= 0.0 {
    return false;
  }
  let Some(style) = cache.style(host, node) else {
    return false;
  };
  style.visibility != Visibility::Hidden && style.display != Display::None
}

/// Text-run visibility.
///
/// The run box must be non-empty and intersect the expanded viewport, and the
/// owning element must pass the host's rich visibility primitive when it has
/// one, or the style approximation (`display`/`visibility`/`opacity`) when it
/// does not.
pub fn is_text_visible<H: Host>(
  cache: &mut GeometryCache,
  host: &H,
  text: NodeId,
  viewport: &Viewport,
) -> bool {
  if host.node_kind(text) != NodeKind::Text {
    return false;
  }
  let rect = match host.text_box_of(text) {
    Ok(rect) => rect,
    Err(e) => {
      warn!(node = text.0, error = %e, "text run box query failed");
      return false;
    }
  };
  if rect.width == 0.0 || rect.height == 0.0 {
    return false;
  }
  if !viewport.intersects(&rect) {
    return false;
  }
  let Some(parent) = host.parent(text) else {
    return false;
  };
  match host.check_visibility(parent) {
    Some(visible) => visible,
    None => match cache.style(host, parent) {
      Some(style) => {
        style.display != Display::None
          && style.visibility != Visibility::Hidden
          && style.opacity > 0.0
      }
      None => false,
    },
  }
}
