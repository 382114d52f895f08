//! Resolved-style subset read by the engine
//!
//! The host hands back resolved (computed) style values as CSS keyword
//! strings; this module types the handful of properties the engine actually
//! consults. Unknown keywords parse to the property's initial value so a host
//! speaking a newer CSS dialect degrades to "no signal" instead of failing.

/// Cursor keywords (CSS Basic User Interface Level 4).
///
/// `Initial` and `Inherit` are CSS-wide keywords, not cursor values; they are
/// listed because hosts occasionally surface them verbatim and the classifier
/// treats them as explicit non-interactive signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cursor {
  Auto,
  Default,
  None,
  ContextMenu,
  Help,
  Pointer,
  Progress,
  Wait,
  Cell,
  Crosshair,
  Text,
  VerticalText,
  Alias,
  Copy,
  Move,
  NoDrop,
  NotAllowed,
  Grab,
  Grabbing,
  AllScroll,
  ColResize,
  RowResize,
  NResize,
  SResize,
  EResize,
  WResize,
  NeResize,
  NwResize,
  SeResize,
  SwResize,
  EwResize,
  NsResize,
  NeswResize,
  NwseResize,
  ZoomIn,
  ZoomOut,
  Initial,
  Inherit,
}

impl Default for Cursor {
  fn default() -> Self {
    Cursor::Auto
  }
}

impl Cursor {
  /// Parses a resolved cursor keyword, defaulting to `auto` for anything
  /// unrecognized.
  pub fn parse(value: &str) -> Self {
    match value {
      "default" => Cursor::Default,
      "none" => Cursor::None,
      "context-menu" => Cursor::ContextMenu,
      "help" => Cursor::Help,
      "pointer" => Cursor::Pointer,
      "progress" => Cursor::Progress,
      "wait" => Cursor::Wait,
      "cell" => Cursor::Cell,
      "crosshair" => Cursor::Crosshair,
      "text" => Cursor::Text,
      "vertical-text" => Cursor::VerticalText,
      "alias" => Cursor::Alias,
      "copy" => Cursor::Copy,
      "move" => Cursor::Move,
      "no-drop" => Cursor::NoDrop,
      "not-allowed" => Cursor::NotAllowed,
      "grab" => Cursor::Grab,
      "grabbing" => Cursor::Grabbing,
      "all-scroll" => Cursor::AllScroll,
      "col-resize" => Cursor::ColResize,
      "row-resize" => Cursor::RowResize,
      "n-resize" => Cursor::NResize,
      "s-resize" => Cursor::SResize,
      "e-resize" => Cursor::EResize,
      "w-resize" => Cursor::WResize,
      "ne-resize" => Cursor::NeResize,
      "nw-resize" => Cursor::NwResize,
      "se-resize" => Cursor::SeResize,
      "sw-resize" => Cursor::SwResize,
      "ew-resize" => Cursor::EwResize,
      "ns-resize" => Cursor::NsResize,
      "nesw-resize" => Cursor::NeswResize,
      "nwse-resize" => Cursor::NwseResize,
      "zoom-in" => Cursor::ZoomIn,
      "zoom-out" => Cursor::ZoomOut,
      "initial" => Cursor::Initial,
      "inherit" => Cursor::Inherit,
      _ => Cursor::Auto,
    }
  }

  /// Cursors treated as strong evidence of clickability.
  ///
  /// Everything a user agent shows over something manipulable: pointer, the
  /// drag/grab family, text carets, the full resize family, zoom, help and
  /// context-menu hints.
  pub fn is_interactive(&self) -> bool {
    matches!(
      self,
      Cursor::Pointer
        | Cursor::Move
        | Cursor::Text
        | Cursor::Grab
        | Cursor::Grabbing
        | Cursor::Cell
        | Cursor::Copy
        | Cursor::Alias
        | Cursor::AllScroll
        | Cursor::ColResize
        | Cursor::ContextMenu
        | Cursor::Crosshair
        | Cursor::EResize
        | Cursor::EwResize
        | Cursor::Help
        | Cursor::NResize
        | Cursor::NeResize
        | Cursor::NeswResize
        | Cursor::NsResize
        | Cursor::NwResize
        | Cursor::NwseResize
        | Cursor::RowResize
        | Cursor::SResize
        | Cursor::SeResize
        | Cursor::SwResize
        | Cursor::VerticalText
        | Cursor::WResize
        | Cursor::ZoomIn
        | Cursor::ZoomOut
    )
  }

  /// Cursors that mark a native control as currently non-actionable.
  pub fn is_non_interactive(&self) -> bool {
    matches!(
      self,
      Cursor::NotAllowed
        | Cursor::NoDrop
        | Cursor::Wait
        | Cursor::Progress
        | Cursor::Initial
        | Cursor::Inherit
    )
  }
}

/// The `display` values the engine distinguishes; everything that renders at
/// all collapses to `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Display {
  None,
  Inline,
  Block,
  Other,
}

impl Default for Display {
  fn default() -> Self {
    Display::Inline
  }
}

impl Display {
  pub fn parse(value: &str) -> Self {
    match value {
      "none" => Display::None,
      "inline" => Display::Inline,
      "block" => Display::Block,
      _ => Display::Other,
    }
  }
}

/// CSS `visibility` (CSS Display Module Level 3).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
  Visible,
  Hidden,
  Collapse,
}

impl Default for Visibility {
  fn default() -> Self {
    Visibility::Visible
  }
}

impl Visibility {
  pub fn parse(value: &str) -> Self {
    match value {
      "hidden" => Visibility::Hidden,
      "collapse" => Visibility::Collapse,
      _ => Visibility::Visible,
    }
  }
}

/// CSS `overflow` per axis (CSS Overflow Module Level 3).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overflow {
  Visible,
  Hidden,
  Scroll,
  Auto,
  Clip,
}

impl Default for Overflow {
  fn default() -> Self {
    Overflow::Visible
  }
}

impl Overflow {
  pub fn parse(value: &str) -> Self {
    match value {
      "hidden" => Overflow::Hidden,
      "scroll" => Overflow::Scroll,
      "auto" => Overflow::Auto,
      "clip" => Overflow::Clip,
      _ => Overflow::Visible,
    }
  }

  /// True when content overflowing this axis is clipped away.
  pub fn clips(&self) -> bool {
    !matches!(self, Overflow::Visible)
  }
}

/// The resolved-style slice the engine reads for one element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComputedStyle {
  pub cursor: Cursor,
  pub display: Display,
  pub visibility: Visibility,
  /// Resolved opacity in `[0, 1]`.
  pub opacity: f32,
  pub overflow_x: Overflow,
  pub overflow_y: Overflow,
}

impl Default for ComputedStyle {
  fn default() -> Self {
    Self {
      cursor: Cursor::default(),
      display: Display::default(),
      visibility: Visibility::default(),
      opacity: 1.0,
      overflow_x: Overflow::default(),
      overflow_y: Overflow::default(),
    }
  }
}
