//! Occlusion testing: is this node the topmost rendered thing at its own
//! center point
//!
//! A classified-interactive element that is fully covered by a modal scrim or
//! a sticky header cannot be acted on, so the pipeline hit-tests each
//! survivor's box center and walks the hit node's ancestor chain looking for
//! the target.
//!
//! Two deliberate asymmetries of trust: nodes in nested frame documents are
//! always treated as topmost (point hit tests cannot cross frame boundaries),
//! and a failed or unsupported hit test fails open rather than dropping a
//! potentially valid element.

use crate::cache::GeometryCache;
use crate::geometry::Viewport;
use crate::host::{Host, NodeId};
use tracing::debug;

/// Returns true iff the node is the topmost rendered content at the center of
/// its own bounding box.
pub fn is_top_element<H: Host>(
  cache: &mut GeometryCache,
  host: &H,
  node: NodeId,
  viewport: &Viewport,
) -> bool {
  let Some(rect) = cache.bounding_box(host, node) else {
    return false;
  };

  // Cheap bounds rejection before paying for a hit test.
  if !viewport.intersects(&rect) {
    return false;
  }

  if !host.in_primary_document(node) {
    return true;
  }

  let center = rect.center();
  let top = match host.topmost_node_at(center) {
    Ok(Some(top)) => top,
    Ok(None) => return false,
    Err(e) => {
      debug!(node = node.0, error = %e, "hit test unavailable, assuming topmost");
      return true;
    }
  };

  // Walk from the hit node up to (but excluding) the document root.
  let root = host.document_element();
  let mut current = Some(top);
  while let Some(cur) = current {
    if cur == root {
      break;
    }
    if cur == node {
      return true;
    }
    current = host.parent(cur);
  }
  false
}
