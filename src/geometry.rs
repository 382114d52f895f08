//! Core geometry types for visibility and overlay placement
//!
//! All units are CSS pixels in the coordinate system of the host viewport:
//! the origin is the top-left corner of the visual viewport, positive X
//! extends right and positive Y extends down. Boxes reported by the host are
//! viewport-relative (the equivalent of `getBoundingClientRect`), so an
//! element scrolled above the fold has a negative `y`.
//!
//! [`Viewport`] carries the single expansion rule used by every visibility
//! decision in the engine (intersection filtering, occlusion pre-rejection,
//! overlay clipping). The rule is deliberately symmetric on all four edges:
//!
//! - expansion `-1`: the unbounded sentinel; every box is inside and
//!   clipping is a no-op,
//! - expansion `<= 0`: strict viewport bounds,
//! - expansion `> 0`: all four edges pushed out by the margin.

use std::fmt;

/// A 2D point in CSS pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
  /// X coordinate (increases to the right)
  pub x: f32,
  /// Y coordinate (increases downward)
  pub y: f32,
}

impl Point {
  /// The origin (0, 0).
  pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

  /// Creates a new point at the given coordinates.
  pub const fn new(x: f32, y: f32) -> Self {
    Self { x, y }
  }
}

impl fmt::Display for Point {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "({}, {})", self.x, self.y)
  }
}

/// A 2D size in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
  pub width: f32,
  pub height: f32,
}

impl Size {
  /// A size with zero width and height.
  pub const ZERO: Self = Self {
    width: 0.0,
    height: 0.0,
  };

  /// Creates a new size with the given dimensions.
  pub const fn new(width: f32, height: f32) -> Self {
    Self { width, height }
  }

  /// Returns true if either dimension is zero or negative.
  pub fn is_empty(&self) -> bool {
    self.width <= 0.0 || self.height <= 0.0
  }
}

/// An axis-aligned rectangle in CSS pixel space.
///
/// Stored as origin plus size. `width`/`height` are expected to be
/// non-negative; operations that could produce a negative extent clamp it to
/// zero instead.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
  pub x: f32,
  pub y: f32,
  pub width: f32,
  pub height: f32,
}

impl Rect {
  /// A zero-sized rectangle at the origin.
  pub const ZERO: Self = Self {
    x: 0.0,
    y: 0.0,
    width: 0.0,
    height: 0.0,
  };

  /// Creates a new rectangle from origin and size.
  pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
    Self {
      x,
      y,
      width,
      height,
    }
  }

  /// Left edge.
  pub fn left(&self) -> f32 {
    self.x
  }

  /// Top edge.
  pub fn top(&self) -> f32 {
    self.y
  }

  /// Right edge (`x + width`).
  pub fn right(&self) -> f32 {
    self.x + self.width
  }

  /// Bottom edge (`y + height`).
  pub fn bottom(&self) -> f32 {
    self.y + self.height
  }

  /// The center point of the rectangle.
  pub fn center(&self) -> Point {
    Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
  }

  /// Returns true if the rectangle has no area.
  pub fn is_empty(&self) -> bool {
    self.width <= 0.0 || self.height <= 0.0
  }

  /// Returns true if the point lies inside the rectangle (edges inclusive).
  pub fn contains(&self, point: Point) -> bool {
    point.x >= self.left()
      && point.x <= self.right()
      && point.y >= self.top()
      && point.y <= self.bottom()
  }

  /// Intersects two rectangles, clamping a negative overlap to zero size.
  pub fn intersect(&self, other: &Rect) -> Rect {
    let left = self.left().max(other.left());
    let top = self.top().max(other.top());
    let right = self.right().min(other.right());
    let bottom = self.bottom().min(other.bottom());
    Rect {
      x: left,
      y: top,
      width: (right - left).max(0.0),
      height: (bottom - top).max(0.0),
    }
  }
}

impl fmt::Display for Rect {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "({}, {}) {}x{}",
      self.x, self.y, self.width, self.height
    )
  }
}

/// Marker for the unbounded viewport-expansion sentinel.
pub const UNBOUNDED_EXPANSION: i32 = -1;

/// The visual viewport plus the active expansion margin.
///
/// One `Viewport` is constructed per invocation from the host's viewport
/// size and the caller's `viewport_expansion` option, and every geometric
/// visibility decision goes through it so the whole invocation applies one
/// consistent rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
  pub size: Size,
  pub expansion: i32,
}

impl Viewport {
  /// Creates a viewport with the given size and expansion margin.
  pub const fn new(size: Size, expansion: i32) -> Self {
    Self { size, expansion }
  }

  /// Returns true when the expansion is the `-1` unbounded sentinel.
  pub fn is_unbounded(&self) -> bool {
    self.expansion == UNBOUNDED_EXPANSION
  }

  /// The effective bounds rectangle: strict viewport for `expansion <= 0`,
  /// expanded on all four edges for `expansion > 0`.
  ///
  /// Not meaningful for the unbounded sentinel; callers check
  /// [`is_unbounded`](Self::is_unbounded) first.
  pub fn bounds(&self) -> Rect {
    let e = if self.expansion > 0 {
      self.expansion as f32
    } else {
      0.0
    };
    Rect {
      x: -e,
      y: -e,
      width: self.size.width + 2.0 * e,
      height: self.size.height + 2.0 * e,
    }
  }

  /// Viewport-intersection test.
  ///
  /// A box is inside unless it lies entirely outside the effective bounds.
  /// Touching an edge counts as inside here, but a tangent box clips to zero
  /// area in [`clip`](Self::clip), so overlay placement still drops it. The
  /// unbounded sentinel accepts everything, including zero-sized boxes.
  pub fn intersects(&self, rect: &Rect) -> bool {
    if self.is_unbounded() {
      return true;
    }
    let bounds = self.bounds();
    !(rect.bottom() < bounds.top()
      || rect.top() > bounds.bottom()
      || rect.right() < bounds.left()
      || rect.left() > bounds.right())
  }

  /// Clips a rectangle to the effective bounds.
  ///
  /// The unbounded sentinel leaves the rectangle untouched.
  pub fn clip(&self, rect: &Rect) -> Rect {
    if self.is_unbounded() {
      return *rect;
    }
    rect.intersect(&self.bounds())
  }
}
