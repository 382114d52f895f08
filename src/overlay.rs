//! Overlay markers: placement, bookkeeping, palette
//!
//! The overlay manager owns the node→marker mapping and hands the host a
//! stream of marker mutations to apply inside its dedicated container.
//! Indices are assigned 0-based in placement order (the index is simply the
//! mapping size before insertion), colors rotate through an 8-entry palette,
//! and a node can hold at most one marker.
//!
//! Placement positions each marker at the node's largest unobstructed visible
//! rectangle (see [`largest_visible_rect`]), not its raw border box, so a row
//! half-scrolled out of its list still gets a marker over the readable part.

use crate::cache::GeometryCache;
use crate::geometry::{Rect, Viewport};
use crate::host::{Host, NodeId};
use rustc_hash::FxHashMap;
use tracing::warn;

/// Border/fill pair for one marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightColor {
  pub border: &'static str,
  pub background: &'static str,
}

/// The rotating marker palette; entry = `index % 8`.
pub const HIGHLIGHT_PALETTE: [HighlightColor; 8] = [
  // Tomato
  HighlightColor {
    border: "rgba(255, 99, 71, 1)",
    background: "rgba(255, 99, 71, 0.3)",
  },
  // MediumSeaGreen
  HighlightColor {
    border: "rgba(60, 179, 113, 1)",
    background: "rgba(60, 179, 113, 0.3)",
  },
  // CornflowerBlue
  HighlightColor {
    border: "rgba(100, 149, 237, 1)",
    background: "rgba(100, 149, 237, 0.3)",
  },
  // Orange
  HighlightColor {
    border: "rgba(255, 165, 0, 1)",
    background: "rgba(255, 165, 0, 0.3)",
  },
  // DarkOrchid
  HighlightColor {
    border: "rgba(153, 50, 204, 1)",
    background: "rgba(153, 50, 204, 0.3)",
  },
  // DeepSkyBlue
  HighlightColor {
    border: "rgba(0, 191, 255, 1)",
    background: "rgba(0, 191, 255, 0.3)",
  },
  // Orchid
  HighlightColor {
    border: "rgba(218, 112, 214, 1)",
    background: "rgba(218, 112, 214, 0.3)",
  },
  // Chartreuse
  HighlightColor {
    border: "rgba(127, 255, 0, 1)",
    background: "rgba(127, 255, 0, 0.3)",
  },
];

/// Fill applied to a focused marker.
pub const FOCUS_BACKGROUND: &str = "rgba(255, 255, 0, 0.5)";
/// Border color applied to a focused marker.
pub const FOCUS_BORDER: &str = "yellow";

/// One placed marker: a bordered, non-interactive box over the element plus
/// an index label.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
  /// Generated marker id, unique within the engine instance.
  pub id: String,
  /// Current marker rectangle in viewport coordinates.
  pub rect: Rect,
  /// Label text = the assigned 0-based index.
  pub label: usize,
  /// Palette colors for border and fill.
  pub color: HighlightColor,
}

/// Owns the node→marker mapping, index assignment, and the marker id
/// counter.
#[derive(Debug, Default)]
pub struct OverlayManager {
  markers: FxHashMap<NodeId, Marker>,
  order: Vec<NodeId>,
  next_id: u64,
}

impl OverlayManager {
  pub fn new() -> Self {
    Self::default()
  }

  /// Number of placed markers.
  pub fn len(&self) -> usize {
    self.markers.len()
  }

  pub fn is_empty(&self) -> bool {
    self.markers.is_empty()
  }

  /// Placed nodes in placement order.
  pub fn placed(&self) -> &[NodeId] {
    &self.order
  }

  /// The marker currently covering a node, if any.
  pub fn marker(&self, node: NodeId) -> Option<&Marker> {
    self.markers.get(&node)
  }

  /// Wipes the host's marker container and this manager's mapping at the
  /// start of an invocation. Idempotent; the id counter is not reset, so
  /// marker ids stay unique across re-runs.
  pub fn begin_invocation<H: Host>(&mut self, host: &mut H) {
    host.clear_markers();
    self.markers.clear();
    self.order.clear();
  }

  /// Places a marker over the node and returns its assigned index.
  ///
  /// No-op (`None`) if the node already has a marker or has no visible
  /// rectangle under the active viewport rule. A host insertion failure is
  /// logged and the marker is not recorded, which keeps descriptors and
  /// placed markers in lockstep.
  pub fn place<H: Host>(
    &mut self,
    host: &mut H,
    cache: &mut GeometryCache,
    node: NodeId,
    viewport: &Viewport,
  ) -> Option<usize> {
    if self.markers.contains_key(&node) {
      return None;
    }
    let rect = largest_visible_rect(cache, host, node, viewport)?;

    let index = self.markers.len();
    self.next_id += 1;
    let marker = Marker {
      id: format!("id-{}", self.next_id),
      rect,
      label: index,
      color: HIGHLIGHT_PALETTE[index % HIGHLIGHT_PALETTE.len()],
    };
    if let Err(e) = host.insert_marker(&marker) {
      warn!(node = node.0, error = %e, "marker insertion failed");
      return None;
    }
    self.markers.insert(node, marker);
    self.order.push(node);
    Some(index)
  }

  /// Recomputes a marker's rectangle; evicts the marker if the node is no
  /// longer visible.
  pub fn update<H: Host>(
    &mut self,
    host: &mut H,
    cache: &mut GeometryCache,
    node: NodeId,
    viewport: &Viewport,
  ) {
    if !self.markers.contains_key(&node) {
      return;
    }
    match largest_visible_rect(cache, host, node, viewport) {
      Some(rect) => {
        if let Some(marker) = self.markers.get_mut(&node) {
          marker.rect = rect;
          host.update_marker(&marker.id, rect);
        }
      }
      None => self.remove(host, node),
    }
  }

  /// Removes a node's marker and drops the mapping entry.
  pub fn remove<H: Host>(&mut self, host: &mut H, node: NodeId) {
    if let Some(marker) = self.markers.remove(&node) {
      host.remove_marker(&marker.id);
      self.order.retain(|&n| n != node);
    }
  }

  /// Empties the container, clears the mapping, and clears the geometry
  /// cache.
  pub fn clear_all<H: Host>(&mut self, host: &mut H, cache: &mut GeometryCache) {
    host.clear_markers();
    self.markers.clear();
    self.order.clear();
    cache.clear();
  }

  /// Restyles the marker at the given 0-based placement position with the
  /// focus colors and requests a smooth centering scroll to it. Out-of-range
  /// indices are a no-op.
  pub fn focus<H: Host>(&mut self, host: &mut H, index: usize) {
    let Some(&node) = self.order.get(index) else {
      return;
    };
    if let Some(marker) = self.markers.get(&node) {
      host.restyle_marker(&marker.id, FOCUS_BACKGROUND, FOCUS_BORDER);
      host.scroll_marker_into_view(&marker.id);
    }
  }
}

/// Largest unobstructed visible rectangle for a node.
///
/// The node's box is rejected outright when it lies fully outside the
/// effective viewport, then clipped to the (possibly expanded) viewport
/// bounds. When the node's own overflow clips an axis, that axis is further
/// clipped to the node's scrolled content box using its own scroll offset.
/// Ancestor overflow/clip chains are deliberately not walked; this is an
/// approximation of true visible area, not an ancestor intersection.
pub fn largest_visible_rect<H: Host>(
  cache: &mut GeometryCache,
  host: &H,
  node: NodeId,
  viewport: &Viewport,
) -> Option<Rect> {
  let rect = cache.bounding_box(host, node)?;
  if !viewport.intersects(&rect) {
    return None;
  }
  let mut visible = viewport.clip(&rect);

  if let Some(style) = cache.style(host, node) {
    if style.overflow_x.clips() || style.overflow_y.clips() {
      let scroll = host.scroll_offset_of(node);
      if style.overflow_x.clips() {
        let left = visible.left().max(rect.left() - scroll.x);
        let right = visible.right().min(rect.right() - scroll.x).max(left);
        visible.x = left;
        visible.width = right - left;
      }
      if style.overflow_y.clips() {
        let top = visible.top().max(rect.top() - scroll.y);
        let bottom = visible.bottom().min(rect.bottom() - scroll.y).max(top);
        visible.y = top;
        visible.height = bottom - top;
      }
    }
  }

  (visible.width > 0.0 && visible.height > 0.0).then_some(visible)
}
