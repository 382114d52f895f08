//! Interactivity classification
//!
//! Ordered rules, first match wins:
//!
//! 1. cursor heuristic: a resolved cursor from the interactive set is strong
//!    evidence of clickability for anything but the root element,
//! 2. native interactive tags, minus controls carrying an explicit disable
//!    signal (disable attribute, reflected property, inert) or a
//!    non-interactive cursor,
//! 3. class/attribute heuristics for the common framework patterns
//!    (`button`/`dropdown-toggle` classes, `data-index`,
//!    `data-toggle="dropdown"`, `aria-haspopup="true"`),
//! 4. widget roles via tag name, `role`, or `aria-role`.
//!
//! [`is_interactive_candidate`] is the cheap pre-filter for large trees. It
//! is allowed to over-admit but must never reject a node the full classifier
//! would accept, so it unions every positive signal the rules above look at
//! (including the cursor heuristic, which is the one signal that needs a
//! style query) without evaluating any of the disable signals.

use crate::cache::GeometryCache;
use crate::host::{Host, NodeId};

/// Tags that are actionable by nature.
pub const NATIVE_INTERACTIVE_TAGS: &[&str] = &[
  "a", "button", "input", "select", "textarea", "details", "summary", "label",
  "option", "optgroup", "fieldset", "legend",
];

/// ARIA widget roles treated as interactive.
pub const INTERACTIVE_ROLES: &[&str] = &[
  "button",
  "menuitem",
  "menuitemradio",
  "menuitemcheckbox",
  "radio",
  "checkbox",
  "tab",
  "switch",
  "slider",
  "spinbutton",
  "combobox",
  "searchbox",
  "textbox",
  "listbox",
  "option",
  "scrollbar",
];

/// Attributes whose presence (empty or `"true"`) marks a native control as
/// explicitly disabled.
const EXPLICIT_DISABLE_ATTRIBUTES: &[&str] = &["disabled", "readonly"];

fn class_list(host: &impl Host, node: NodeId) -> Vec<String> {
  host
    .attribute(node, "class")
    .map(|classes| classes.split_whitespace().map(str::to_owned).collect())
    .unwrap_or_default()
}

fn has_disable_signal<H: Host>(host: &H, node: NodeId) -> bool {
  for attr in EXPLICIT_DISABLE_ATTRIBUTES {
    if let Some(value) = host.attribute(node, attr) {
      if value.is_empty() || value == "true" {
        return true;
      }
    }
  }
  host.disabled_property(node) || host.readonly_property(node) || host.inert_property(node)
}

fn has_class_or_data_signal<H: Host>(host: &H, node: NodeId) -> bool {
  let classes = class_list(host, node);
  if classes.iter().any(|c| c == "button" || c == "dropdown-toggle") {
    return true;
  }
  if host
    .attribute(node, "data-index")
    .is_some_and(|v| !v.is_empty())
  {
    return true;
  }
  if host.attribute(node, "data-toggle").as_deref() == Some("dropdown") {
    return true;
  }
  host.attribute(node, "aria-haspopup").as_deref() == Some("true")
}

fn has_widget_role<H: Host>(host: &H, node: NodeId, tag: &str) -> bool {
  if NATIVE_INTERACTIVE_TAGS.contains(&tag) {
    return true;
  }
  let role = host.attribute(node, "role");
  let aria_role = host.attribute(node, "aria-role");
  role.is_some_and(|r| INTERACTIVE_ROLES.contains(&r.as_str()))
    || aria_role.is_some_and(|r| INTERACTIVE_ROLES.contains(&r.as_str()))
}

/// Full classifier: is this node an actionable control.
pub fn is_interactive<H: Host>(cache: &mut GeometryCache, host: &H, node: NodeId) -> bool {
  let Some(tag) = host.tag_name(node) else {
    return false;
  };
  let tag = tag.to_ascii_lowercase();

  // Rule 1: cursor heuristic. The root element styles the page default and
  // never counts.
  if tag != "html" {
    if let Some(style) = cache.style(host, node) {
      if style.cursor.is_interactive() {
        return true;
      }
    }
  }

  // Rule 2: native interactive tags, unless explicitly disabled.
  if NATIVE_INTERACTIVE_TAGS.contains(&tag.as_str()) {
    if let Some(style) = cache.style(host, node) {
      if style.cursor.is_non_interactive() {
        return false;
      }
    }
    return !has_disable_signal(host, node);
  }

  // Rule 3: class/attribute heuristics.
  if has_class_or_data_signal(host, node) {
    return true;
  }

  // Rule 4: widget roles.
  has_widget_role(host, node, &tag)
}

/// Lightweight candidate pre-check.
///
/// May over-admit (a disabled button still passes), never under-admits
/// relative to [`is_interactive`].
pub fn is_interactive_candidate<H: Host>(
  cache: &mut GeometryCache,
  host: &H,
  node: NodeId,
) -> bool {
  let Some(tag) = host.tag_name(node) else {
    return false;
  };
  let tag = tag.to_ascii_lowercase();

  if NATIVE_INTERACTIVE_TAGS.contains(&tag.as_str()) {
    return true;
  }

  let has_quick_attr = host.attribute(node, "onclick").is_some()
    || host.attribute(node, "role").is_some()
    || host.attribute(node, "aria-role").is_some()
    || host.attribute(node, "tabindex").is_some()
    || host.attribute(node, "data-action").is_some()
    || host.attribute(node, "contenteditable").as_deref() == Some("true")
    || host
      .attribute_names(node)
      .iter()
      .any(|name| name.starts_with("aria-") || name.starts_with("data-"));
  if has_quick_attr {
    return true;
  }

  if has_class_or_data_signal(host, node) {
    return true;
  }

  // The cursor heuristic is the one classifier signal invisible to
  // attributes; admit it here so the pre-check stays a superset.
  if tag != "html" {
    if let Some(style) = cache.style(host, node) {
      if style.cursor.is_interactive() {
        return true;
      }
    }
  }
  false
}
