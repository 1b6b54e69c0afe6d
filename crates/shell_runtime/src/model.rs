//! Geometry types and the shell-state context object.

use serde::{Deserialize, Serialize};

use crate::platform::Platform;

/// Default main-window width in logical pixels.
pub const DEFAULT_WINDOW_WIDTH: i32 = 1280;
/// Default main-window height in logical pixels.
pub const DEFAULT_WINDOW_HEIGHT: i32 = 768;
/// Minimum main-window width in logical pixels.
pub const MIN_WINDOW_WIDTH: i32 = 1024;
/// Minimum main-window height in logical pixels.
pub const MIN_WINDOW_HEIGHT: i32 = 768;

/// Schema version written into persisted window-geometry envelopes.
pub const WINDOW_GEOMETRY_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Window rectangle in logical pixels.
pub struct WindowRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl WindowRect {
    /// Returns the same extent anchored at `(0, 0)`.
    ///
    /// This is the rectangle applied to the content view: it always fills the
    /// window client area from the origin.
    pub fn at_origin(self) -> Self {
        Self { x: 0, y: 0, ..self }
    }

    /// Clamps width and height to the given minimums, keeping the position.
    pub fn clamped_min(self, min_w: i32, min_h: i32) -> Self {
        Self {
            w: self.w.max(min_w),
            h: self.h.max(min_h),
            ..self
        }
    }
}

impl Default for WindowRect {
    fn default() -> Self {
        Self {
            x: 0,
            y: 0,
            w: DEFAULT_WINDOW_WIDTH,
            h: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Envelope persisted to disk for window-geometry restoration across launches.
pub struct WindowGeometryEnvelope {
    /// Envelope schema version; unknown versions are ignored on load.
    pub schema_version: u32,
    /// Last observed main-window rectangle.
    pub rect: WindowRect,
}

impl WindowGeometryEnvelope {
    /// Wraps a rect in a current-version envelope.
    pub fn new(rect: WindowRect) -> Self {
        Self {
            schema_version: WINDOW_GEOMETRY_SCHEMA_VERSION,
            rect,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Window-existence phase of the shell lifecycle.
pub enum ShellPhase {
    /// No top-level window exists.
    NoWindow,
    /// The single top-level window is open.
    WindowOpen,
}

#[derive(Debug, Clone, PartialEq)]
/// Explicit application-context state mutated by [`crate::reduce_shell`].
pub struct ShellState {
    /// Platform the host is running on; fixed for the process lifetime.
    pub platform: Platform,
    /// Current window-existence phase.
    pub phase: ShellPhase,
    /// Whether the content view has been revealed after its initial load.
    pub content_visible: bool,
    /// Last known main-window rectangle, if a window is open.
    pub window_rect: Option<WindowRect>,
}

impl ShellState {
    /// Creates the initial shell state for `platform` (no window, content hidden).
    pub fn new(platform: Platform) -> Self {
        Self {
            platform,
            phase: ShellPhase::NoWindow,
            content_visible: false,
            window_rect: None,
        }
    }

    /// Returns whether the single top-level window currently exists.
    pub fn window_open(&self) -> bool {
        matches!(self.phase, ShellPhase::WindowOpen)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn at_origin_keeps_extent_and_zeroes_position() {
        let rect = WindowRect {
            x: 120,
            y: 64,
            w: 1280,
            h: 768,
        };
        assert_eq!(
            rect.at_origin(),
            WindowRect {
                x: 0,
                y: 0,
                w: 1280,
                h: 768
            }
        );
    }

    #[test]
    fn clamped_min_only_grows_undersized_extents() {
        let rect = WindowRect {
            x: 10,
            y: 10,
            w: 640,
            h: 900,
        };
        let clamped = rect.clamped_min(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT);
        assert_eq!(clamped.w, MIN_WINDOW_WIDTH);
        assert_eq!(clamped.h, 900);
        assert_eq!((clamped.x, clamped.y), (10, 10));
    }
}
