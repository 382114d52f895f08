//! Public API for dommark
//!
//! One engine instance wraps an injected [`Host`] binding and exposes a
//! single synchronous operation: [`DomMark::scan`]. Configuration in,
//! structured result out, never an error. Every per-node host failure
//! degrades conservatively (see the crate-level error policy) and the worst
//! user-visible outcome is a smaller result set.
//!
//! # Example
//!
//! ```rust,ignore
//! use dommark::{DomMark, ScanOptions};
//!
//! let mut engine = DomMark::new(host);
//! let result = engine.scan(&ScanOptions {
//!   do_highlight_elements: true,
//!   focus_highlight_index: None,
//!   viewport_expansion: 100,
//! });
//! for element in &result.elements_data {
//!   println!("[{}] {} {}", element.index, element.tag_name, element.selector);
//! }
//! ```
//!
//! # Pipeline
//!
//! ```text
//! walk tree → candidates → classify + occlusion → place overlays → descriptors
//! ```
//!
//! # Reentrancy
//!
//! `DomMark` is `Send` but not `Sync`. A scan runs start-to-finish with no
//! suspension points; per-invocation state (geometry cache, marker mapping)
//! is reset at the top of each call, so concurrent invocations against one
//! engine would trample each other and are not supported.

use crate::cache::GeometryCache;
use crate::collector;
use crate::descriptor::{self, ScanResult};
use crate::geometry::Viewport;
use crate::host::Host;
use crate::overlay::OverlayManager;
use crate::selector;
use tracing::debug;

/// Configuration for one scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanOptions {
  /// Render overlay markers. When false the scan classifies and collects
  /// without placing markers, and the result carries a zero count.
  pub do_highlight_elements: bool,
  /// Restyle and scroll to one placed overlay by its 0-based index. Only
  /// meaningful when highlighting; out-of-range is a no-op.
  pub focus_highlight_index: Option<usize>,
  /// Pixel margin added to the viewport bounds for all visibility tests.
  /// `-1` is the unbounded sentinel: every geometry passes.
  pub viewport_expansion: i32,
}

impl Default for ScanOptions {
  fn default() -> Self {
    Self {
      do_highlight_elements: true,
      focus_highlight_index: None,
      viewport_expansion: 0,
    }
  }
}

/// Point-in-time DOM analysis engine bound to one host.
pub struct DomMark<H: Host> {
  host: H,
  cache: GeometryCache,
  overlays: OverlayManager,
}

impl<H: Host> DomMark<H> {
  /// Creates an engine around a host binding.
  pub fn new(host: H) -> Self {
    Self {
      host,
      cache: GeometryCache::new(),
      overlays: OverlayManager::new(),
    }
  }

  /// Shared access to the host binding.
  pub fn host(&self) -> &H {
    &self.host
  }

  /// Consumes the engine, returning the host binding.
  pub fn into_host(self) -> H {
    self.host
  }

  /// Number of markers currently placed.
  pub fn highlight_count(&self) -> usize {
    self.overlays.len()
  }

  /// Runs one invocation: collect candidates, classify, optionally place
  /// overlay markers, and assemble descriptors.
  ///
  /// Idempotent on an unmutated page: per-invocation state is cleared up
  /// front and indices are re-derived from document order each time.
  pub fn scan(&mut self, options: &ScanOptions) -> ScanResult {
    self.cache.clear();
    self.overlays.begin_invocation(&mut self.host);

    let viewport = Viewport::new(self.host.viewport_size(), options.viewport_expansion);
    let candidates = collector::collect_candidates(&mut self.cache, &self.host, &viewport);
    let interactive =
      collector::filter_interactive(&mut self.cache, &self.host, &candidates, &viewport);
    debug!(
      candidates = candidates.len(),
      interactive = interactive.len(),
      expansion = options.viewport_expansion,
      "scan classified"
    );

    let mut elements_data = Vec::new();
    if options.do_highlight_elements {
      for node in interactive {
        let Some(index) =
          self
            .overlays
            .place(&mut self.host, &mut self.cache, node, &viewport)
        else {
          continue;
        };
        let selector = selector::css_selector(&self.host, node);
        elements_data.push(descriptor::describe(
          &mut self.cache,
          &self.host,
          node,
          index,
          selector,
          &viewport,
        ));
      }
      if let Some(focus) = options.focus_highlight_index {
        self.overlays.focus(&mut self.host, focus);
      }
    }

    ScanResult {
      highlight_count: self.overlays.len(),
      elements_data,
    }
  }

  /// Removes every marker and clears per-invocation state.
  pub fn clear_all(&mut self) {
    self
      .overlays
      .clear_all(&mut self.host, &mut self.cache);
  }
}
