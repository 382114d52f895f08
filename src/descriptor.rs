//! Output payload: element descriptors and the invocation result
//!
//! One descriptor is captured per successfully placed marker, in placement
//! order, so `elements_data.len()` always equals `highlight_count`. The
//! serialized field names (`highlightCount`, `elementsData`, `tagName`,
//! `aria-label`, ...) are the wire contract consumed by the automation agent
//! on the other side; absent attributes serialize as `null`, not as missing
//! keys.

use crate::cache::GeometryCache;
use crate::geometry::Viewport;
use crate::host::{Host, NodeId, NodeKind};
use crate::visibility;
use serde::Serialize;

/// Longest text excerpt captured per element.
pub const MAX_TEXT_LENGTH: usize = 150;
/// Longest form-control value captured per element.
pub const MAX_VALUE_LENGTH: usize = 50;

/// The fixed attribute subset captured for the agent.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ElementAttributes {
  pub id: Option<String>,
  pub class: Option<String>,
  pub role: Option<String>,
  #[serde(rename = "aria-label")]
  pub aria_label: Option<String>,
  #[serde(rename = "aria-hidden")]
  pub aria_hidden: Option<String>,
  pub placeholder: Option<String>,
  pub name: Option<String>,
  /// Current control value, truncated to [`MAX_VALUE_LENGTH`] characters.
  /// Present-but-empty is preserved (an emptied text input is `Some("")`).
  pub value: Option<String>,
  /// Captured for anchors only.
  pub href: Option<String>,
}

/// Structured record for one successfully overlaid element. Immutable once
/// produced; owned by the caller after the scan returns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ElementDescriptor {
  /// Sequential 0-based index matching the marker label.
  pub index: usize,
  /// Uppercase tag name, as the DOM reports it.
  #[serde(rename = "tagName")]
  pub tag_name: String,
  /// Visible text, whitespace-collapsed, at most [`MAX_TEXT_LENGTH`] chars.
  pub text: String,
  /// Generated locator for re-targeting the element.
  pub selector: String,
  pub attributes: ElementAttributes,
}

/// Result of one engine invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanResult {
  #[serde(rename = "highlightCount")]
  pub highlight_count: usize,
  #[serde(rename = "elementsData")]
  pub elements_data: Vec<ElementDescriptor>,
}

/// Builds the descriptor for one placed element.
pub fn describe<H: Host>(
  cache: &mut GeometryCache,
  host: &H,
  node: NodeId,
  index: usize,
  selector: String,
  viewport: &Viewport,
) -> ElementDescriptor {
  let tag_name = host
    .tag_name(node)
    .map(|t| t.to_ascii_uppercase())
    .unwrap_or_default();
  let text = normalize_text(&visible_text(cache, host, node, viewport));

  let attributes = ElementAttributes {
    id: non_empty(host.attribute(node, "id")),
    class: non_empty(host.attribute(node, "class")),
    role: non_empty(host.attribute(node, "role")),
    aria_label: non_empty(host.attribute(node, "aria-label")),
    aria_hidden: non_empty(host.attribute(node, "aria-hidden")),
    placeholder: non_empty(host.attribute(node, "placeholder")),
    name: non_empty(host.attribute(node, "name")),
    value: host
      .value_property(node)
      .map(|v| truncate_chars(&v, MAX_VALUE_LENGTH)),
    href: if tag_name == "A" {
      non_empty(host.attribute(node, "href"))
    } else {
      None
    },
  };

  ElementDescriptor {
    index,
    tag_name,
    text,
    selector,
    attributes,
  }
}

/// Visible text under a node: a depth-first walk over descendant text nodes,
/// keeping only runs that pass the text-visibility predicate, space-joined.
pub fn visible_text<H: Host>(
  cache: &mut GeometryCache,
  host: &H,
  node: NodeId,
  viewport: &Viewport,
) -> String {
  if host.node_kind(node) == NodeKind::Text {
    return host
      .text_content(node)
      .map(|t| t.trim().to_owned())
      .unwrap_or_default();
  }

  let mut parts: Vec<String> = Vec::new();
  let mut stack: Vec<NodeId> = {
    let mut children = host.children(node);
    children.reverse();
    children
  };
  while let Some(current) = stack.pop() {
    match host.node_kind(current) {
      NodeKind::Text => {
        if visibility::is_text_visible(cache, host, current, viewport) {
          if let Some(text) = host.text_content(current) {
            let trimmed = text.trim();
            if !trimmed.is_empty() {
              parts.push(trimmed.to_owned());
            }
          }
        }
      }
      NodeKind::Element => {
        let mut children = host.children(current);
        children.reverse();
        stack.append(&mut children);
      }
    }
  }
  parts.join(" ")
}

/// Truncates to [`MAX_TEXT_LENGTH`] characters, then collapses whitespace
/// runs to single spaces and trims.
fn normalize_text(text: &str) -> String {
  let truncated = truncate_chars(text, MAX_TEXT_LENGTH);
  truncated.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn truncate_chars(text: &str, max: usize) -> String {
  text.chars().take(max).collect()
}

fn non_empty(value: Option<String>) -> Option<String> {
  value.filter(|v| !v.is_empty())
}
