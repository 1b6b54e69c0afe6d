//! Platform identifiers and the frame-style capability table.
//!
//! Platform policy lives in one lookup table instead of inline conditionals so
//! it can be extended and tested per platform.

/// Height of the Windows title-bar overlay region, in logical pixels.
///
/// Window controls are drawn over custom content inside this band, so the
/// content layer must reserve it.
pub const TITLEBAR_OVERLAY_HEIGHT: u32 = 38;

/// Stable platform identifier for the running host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// Windows desktop.
    Windows,
    /// macOS desktop.
    MacOs,
    /// Linux and other freedesktop-style targets.
    Linux,
}

impl Platform {
    /// Returns the platform the host binary was compiled for.
    pub fn current() -> Self {
        if cfg!(target_os = "windows") {
            Self::Windows
        } else if cfg!(target_os = "macos") {
            Self::MacOs
        } else {
            Self::Linux
        }
    }

    /// Returns a stable string token for diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Windows => "windows",
            Self::MacOs => "macos",
            Self::Linux => "linux",
        }
    }

    /// Returns whether the application keeps running with zero windows open.
    ///
    /// On macOS the app stays resident until an explicit quit and dock
    /// reactivation re-opens the window; elsewhere closing the last window
    /// quits the process.
    pub const fn stays_resident(self) -> bool {
        matches!(self, Self::MacOs)
    }

    /// Returns the main-window frame style for this platform.
    pub const fn frame_style(self) -> FrameStyle {
        match self {
            // Native frame stays on Windows so the title-bar overlay keeps the
            // window controls clickable over custom content.
            Self::Windows => FrameStyle {
                native_frame: true,
                titlebar_overlay: Some(TitleBarOverlay {
                    height: TITLEBAR_OVERLAY_HEIGHT,
                }),
            },
            Self::MacOs | Self::Linux => FrameStyle {
                native_frame: false,
                titlebar_overlay: None,
            },
        }
    }
}

/// Main-window frame configuration selected per platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameStyle {
    /// Whether the OS draws its native frame and title bar.
    pub native_frame: bool,
    /// Overlay region reserved for window controls, when the platform uses one.
    pub titlebar_overlay: Option<TitleBarOverlay>,
}

/// Title-bar overlay region configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TitleBarOverlay {
    /// Overlay height in logical pixels.
    pub height: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn windows_keeps_native_frame_with_overlay_height() {
        let frame = Platform::Windows.frame_style();
        assert!(frame.native_frame);
        assert_eq!(
            frame.titlebar_overlay,
            Some(TitleBarOverlay { height: 38 })
        );
    }

    #[test]
    fn non_windows_platforms_are_frameless_without_overlay() {
        for platform in [Platform::MacOs, Platform::Linux] {
            let frame = platform.frame_style();
            assert!(!frame.native_frame, "{} should be frameless", platform.as_str());
            assert_eq!(frame.titlebar_overlay, None);
        }
    }

    #[test]
    fn only_macos_stays_resident_without_windows() {
        assert!(Platform::MacOs.stays_resident());
        assert!(!Platform::Windows.stays_resident());
        assert!(!Platform::Linux.stays_resident());
    }
}
