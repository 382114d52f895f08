//! The injected host capability interface
//!
//! The engine never talks to a rendering engine directly. Everything it needs
//! from the live page (tree structure, attributes, layout boxes, resolved
//! styles, point hit tests, selector resolution, and the marker surface the
//! overlays draw through) comes in through the [`Host`] trait. Any
//! remote-control or automation protocol (CDP, WebDriver, an in-process
//! engine, a test fixture) can bind it.
//!
//! Nodes are referenced by opaque [`NodeId`] handles owned by the host. The
//! engine never keeps a handle alive beyond the invocation that observed it,
//! and treats any failed query as "this node cannot be evaluated" rather than
//! an invariant violation; the page can mutate under us at any time.

use crate::error::Result;
use crate::geometry::{Point, Rect, Size};
use crate::overlay::Marker;
use crate::style::ComputedStyle;

/// Opaque handle to a node in the host's render tree.
///
/// Identity-comparable and hashable; carries no lifetime and does not keep
/// the underlying node alive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u64);

/// The node kinds the engine distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
  Element,
  Text,
}

/// Host capability surface.
///
/// Structural queries (`tag_name`, `attribute`, `parent`, ...) are assumed
/// cheap and infallible aside from returning "nothing". The expensive or
/// engine-backed queries (`bounding_box_of`, `resolved_style_of`,
/// `topmost_node_at`, `query_selector_count`) return [`Result`] so hosts can
/// report detached nodes and protocol errors; the engine degrades per query,
/// it never aborts an invocation.
pub trait Host {
  // --- Tree structure ---

  /// The document root element (`html`).
  fn document_element(&self) -> NodeId;

  /// The document body, if the document has one.
  fn body(&self) -> Option<NodeId>;

  fn node_kind(&self, node: NodeId) -> NodeKind;

  /// Tag name of an element node, `None` for text nodes. Any letter case is
  /// accepted; the engine normalizes.
  fn tag_name(&self, node: NodeId) -> Option<String>;

  /// Attribute value by name. `Some("")` means present-but-empty, which is
  /// distinct from absent.
  fn attribute(&self, node: NodeId, name: &str) -> Option<String>;

  /// Names of all attributes present on the node.
  fn attribute_names(&self, node: NodeId) -> Vec<String>;

  fn parent(&self, node: NodeId) -> Option<NodeId>;

  fn children(&self, node: NodeId) -> Vec<NodeId>;

  /// Text content of a text node.
  fn text_content(&self, node: NodeId) -> Option<String>;

  /// True when the node belongs to the primary (top-level) document rather
  /// than a nested frame. Hit tests cannot cross frame boundaries, so frame
  /// content is trusted to be on top within its frame.
  fn in_primary_document(&self, _node: NodeId) -> bool {
    true
  }

  // --- Geometry and style ---

  /// Viewport-relative border box of an element.
  fn bounding_box_of(&self, node: NodeId) -> Result<Rect>;

  /// Resolved style slice for an element.
  fn resolved_style_of(&self, node: NodeId) -> Result<ComputedStyle>;

  /// Bounding box of a text node's rendered run (the equivalent of a range
  /// selecting the node's contents).
  fn text_box_of(&self, node: NodeId) -> Result<Rect>;

  /// The topmost rendered node at a viewport point, if any.
  fn topmost_node_at(&self, point: Point) -> Result<Option<NodeId>>;

  /// Rich visibility primitive (opacity plus CSS visibility, the equivalent
  /// of `checkVisibility`). `None` means unsupported; the engine then falls
  /// back to a style-property approximation.
  fn check_visibility(&self, _node: NodeId) -> Option<bool> {
    None
  }

  /// Size of the visual viewport.
  fn viewport_size(&self) -> Size;

  /// The element's own scroll offset (`scrollLeft`/`scrollTop`).
  fn scroll_offset_of(&self, _node: NodeId) -> Point {
    Point::ZERO
  }

  // --- Element properties (reflected state, not attributes) ---

  fn disabled_property(&self, _node: NodeId) -> bool {
    false
  }

  fn readonly_property(&self, _node: NodeId) -> bool {
    false
  }

  fn inert_property(&self, _node: NodeId) -> bool {
    false
  }

  /// Current value of a form control, if the node has one.
  fn value_property(&self, _node: NodeId) -> Option<String> {
    None
  }

  // --- Selector resolution ---

  /// Number of nodes the selector resolves to in the current document.
  fn query_selector_count(&self, selector: &str) -> Result<usize>;

  // --- Marker surface ---
  //
  // The engine's only page mutation. Markers live in a dedicated host-owned
  // container, are non-interactive (no pointer events), and carry a border
  // and translucent fill in the marker's palette color plus an index label.

  /// Inserts a new marker box into the marker container.
  fn insert_marker(&mut self, marker: &Marker) -> Result<()>;

  /// Moves/resizes an existing marker.
  fn update_marker(&mut self, id: &str, rect: Rect);

  /// Removes one marker.
  fn remove_marker(&mut self, id: &str);

  /// Empties the marker container.
  fn clear_markers(&mut self);

  /// Restyles a marker with an emphasis fill and border color.
  fn restyle_marker(&mut self, id: &str, background: &str, border: &str);

  /// Requests a smooth scroll centering the marker in the viewport.
  fn scroll_marker_into_view(&mut self, id: &str);
}
