//! dommark: point-in-time DOM analysis for automation agents
//!
//! Invoked against a live page through an injected [`Host`] capability, the
//! engine walks the render tree once, classifies visible actionable elements
//! (native controls, ARIA widgets, cursor-affordance heuristics), verifies
//! each survivor is actually on top at its own center point, and produces a
//! stable indexed list of element descriptors, optionally placing visual
//! overlay markers so a human or a screenshot model can verify what index
//! maps to what control.
//!
//! The entry point is [`DomMark::scan`]: one synchronous call, configuration
//! in, [`ScanResult`] out, never an error. Results are a snapshot; if the
//! page mutates afterwards, indices and selectors may be stale and the caller
//! re-scans.

pub mod api;
pub mod cache;
pub mod collector;
pub mod descriptor;
pub mod error;
pub mod geometry;
pub mod host;
pub mod interactivity;
pub mod occlusion;
pub mod overlay;
pub mod selector;
pub mod style;
pub mod visibility;

pub use api::{DomMark, ScanOptions};
pub use descriptor::{ElementAttributes, ElementDescriptor, ScanResult};
pub use error::{HostError, Result};
pub use geometry::{Point, Rect, Size, Viewport, UNBOUNDED_EXPANSION};
pub use host::{Host, NodeId, NodeKind};
pub use overlay::{HighlightColor, Marker, OverlayManager, HIGHLIGHT_PALETTE};
pub use style::{ComputedStyle, Cursor, Display, Overflow, Visibility};
