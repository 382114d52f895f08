//! Error types for dommark
//!
//! Every fallible operation in this crate goes through the injected
//! [`Host`](crate::host::Host) capability, so the error taxonomy mirrors the
//! host query surface: geometry lookups, resolved-style lookups, point hit
//! tests, selector resolution, and marker mutation.
//!
//! None of these errors escape [`DomMark::scan`](crate::api::DomMark::scan).
//! A failed query degrades the decision that depended on it and the batch
//! continues: absent geometry means "treat as invisible", a failed hit test
//! fails open, and a failed selector count falls back to the bare tag. The types
//! exist so hosts can report precise causes and so the degradation sites can
//! log them.
//!
//! All errors use the `thiserror` crate for minimal boilerplate and proper
//! error trait implementations.

use crate::host::NodeId;
use thiserror::Error;

/// Result type alias for host capability operations.
pub type Result<T> = std::result::Result<T, HostError>;

/// An error reported by the injected host capability.
#[derive(Error, Debug)]
pub enum HostError {
  /// A layout-box query failed (detached node, engine error).
  #[error("geometry query failed for node {node:?}: {message}")]
  Geometry { node: NodeId, message: String },

  /// A resolved-style query failed.
  #[error("style query failed for node {node:?}: {message}")]
  Style { node: NodeId, message: String },

  /// The host cannot hit-test, or the hit test itself threw.
  ///
  /// Occlusion testing treats this as "the node is topmost" rather than
  /// dropping a potentially valid element.
  #[error("point hit test failed: {0}")]
  HitTest(String),

  /// Resolving a candidate selector against the document failed.
  #[error("selector query failed for {selector:?}: {message}")]
  SelectorQuery { selector: String, message: String },

  /// Inserting or mutating an overlay marker failed.
  #[error("marker operation failed: {0}")]
  Marker(String),
}
