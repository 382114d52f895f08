//! Locator generation
//!
//! Builds a short CSS selector for a node, preferring the shortest
//! unambiguous form: an id selector, then `tag.class1.class2`, then a
//! recursive `parent > tag:nth-child(n)` chain, and finally the bare tag
//! name. Every candidate except the id form is validated against a length
//! bound and a uniqueness check ("resolves to exactly one node right now")
//! before being returned.
//!
//! Identifiers are escaped with the `CSS.escape` algorithm from CSSOM so ids
//! and classes containing metacharacters still produce valid selectors.

use crate::host::{Host, NodeId, NodeKind};
use tracing::debug;

/// Maximum length for a generated selector string.
pub const MAX_SELECTOR_LENGTH: usize = 120;

/// Generates a locator for the node. Never fails: when no branch produces a
/// unique, length-bounded selector the bare tag name comes back.
pub fn css_selector<H: Host>(host: &H, node: NodeId) -> String {
  let Some(tag) = host.tag_name(node) else {
    return String::new();
  };
  let tag = tag.to_ascii_lowercase();

  if let Some(id) = host.attribute(node, "id") {
    if !id.is_empty() {
      return format!("#{}", css_escape(&id));
    }
  }

  if let Some(class) = host.attribute(node, "class") {
    let classes: String = class
      .split_whitespace()
      .map(|c| format!(".{}", css_escape(c)))
      .collect();
    if !classes.is_empty() {
      let selector = format!("{tag}{classes}");
      if is_unique_and_short(host, &selector) {
        return selector;
      }
    }
  }

  if let Some(parent) = host.parent(node) {
    let parent_selector = css_selector(host, parent);
    if !parent_selector.is_empty() {
      if let Some(position) = child_position(host, parent, node) {
        let selector = format!("{parent_selector} > {tag}:nth-child({position})");
        if is_unique_and_short(host, &selector) {
          return selector;
        }
      }
    }
  }

  tag
}

fn is_unique_and_short<H: Host>(host: &H, selector: &str) -> bool {
  if selector.len() > MAX_SELECTOR_LENGTH {
    return false;
  }
  match host.query_selector_count(selector) {
    Ok(count) => count == 1,
    Err(e) => {
      debug!(selector, error = %e, "selector resolution failed");
      false
    }
  }
}

/// 1-based position of the node among its parent's element children, as
/// `:nth-child` counts them.
fn child_position<H: Host>(host: &H, parent: NodeId, node: NodeId) -> Option<usize> {
  host
    .children(parent)
    .into_iter()
    .filter(|&child| host.node_kind(child) == NodeKind::Element)
    .position(|child| child == node)
    .map(|index| index + 1)
}

/// `CSS.escape` from CSSOM: serializes an arbitrary string as a CSS
/// identifier.
pub fn css_escape(ident: &str) -> String {
  let chars: Vec<char> = ident.chars().collect();
  let mut out = String::with_capacity(ident.len());
  for (i, &c) in chars.iter().enumerate() {
    let code = c as u32;
    if code == 0 {
      out.push('\u{FFFD}');
    } else if code < 0x20 || code == 0x7f {
      out.push_str(&format!("\\{code:x} "));
    } else if c.is_ascii_digit() && (i == 0 || (i == 1 && chars[0] == '-')) {
      out.push_str(&format!("\\{code:x} "));
    } else if c == '-' && i == 0 && chars.len() == 1 {
      out.push_str("\\-");
    } else if code >= 0x80 || c == '-' || c == '_' || c.is_ascii_alphanumeric() {
      out.push(c);
    } else {
      out.push('\\');
      out.push(c);
    }
  }
  out
}
