//! Main-window and content-view construction.

use std::path::PathBuf;

use shell_runtime::{
    resolve_content_source, ContentSource, FrameStyle, NavigationDecision, NavigationPolicy,
    ShellAction, WindowRect, BUNDLED_INDEX_PATH, DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH,
    MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH,
};
use tauri::webview::PageLoadEvent;
use tauri::Manager;

use crate::shell::ShellContext;
use crate::window_state::WindowStateStore;

/// Label of the single top-level window.
pub(crate) const MAIN_WINDOW_LABEL: &str = "main";
/// Label of the embedded content webview.
pub(crate) const CONTENT_WEBVIEW_LABEL: &str = "content";

/// Environment variable naming the dev-server origin, honored in development
/// builds only.
pub(crate) const DEV_SERVER_URL_ENV: &str = "PANESHELL_DEV_SERVER_URL";

/// Builds the top-level window and attaches the content webview to it.
///
/// Geometry comes from the persisted record when one exists, defaults
/// otherwise; the content view starts hidden and is revealed by the
/// first finished page load.
pub fn create_window(app: &tauri::AppHandle, frame: FrameStyle) -> Result<(), String> {
    let store = WindowStateStore::from_app(app)?;
    let restored = match store.load() {
        Ok(rect) => rect,
        Err(err) => {
            log::warn!("window geometry restore failed: {err}");
            None
        }
    };

    let mut builder = tauri::window::WindowBuilder::new(app, MAIN_WINDOW_LABEL)
        .title("paneshell")
        .theme(Some(tauri::Theme::Light))
        .decorations(frame.native_frame)
        .min_inner_size(f64::from(MIN_WINDOW_WIDTH), f64::from(MIN_WINDOW_HEIGHT));
    builder = match restored {
        Some(rect) => builder
            .position(f64::from(rect.x), f64::from(rect.y))
            .inner_size(f64::from(rect.w), f64::from(rect.h)),
        None => builder
            .inner_size(
                f64::from(DEFAULT_WINDOW_WIDTH),
                f64::from(DEFAULT_WINDOW_HEIGHT),
            )
            .center(),
    };
    let window = builder
        .build()
        .map_err(|err| format!("failed to build main window: {err}"))?;

    // From here on every move/resize updates the persisted record.
    store.attach(&window);

    let source = match resolve_content_source(
        cfg!(debug_assertions),
        std::env::var(DEV_SERVER_URL_ENV).ok().as_deref(),
    ) {
        Ok(source) => source,
        Err(err) => {
            log::warn!("{err}; loading the bundled document instead");
            ContentSource::BundledAsset(PathBuf::from(BUNDLED_INDEX_PATH))
        }
    };
    let policy = NavigationPolicy::for_source(&source);
    let webview_url = match &source {
        ContentSource::DevServer(url) => tauri::WebviewUrl::External(url.clone()),
        ContentSource::BundledAsset(path) => tauri::WebviewUrl::App(path.clone()),
    };

    let overlay_script = overlay_bootstrap_script(&frame);
    let load_handle = app.clone();
    let nav_handle = app.clone();
    let webview_builder =
        tauri::webview::WebviewBuilder::new(CONTENT_WEBVIEW_LABEL, webview_url)
            .initialization_script(overlay_script.as_str())
            .on_page_load(move |_, payload| {
                if matches!(payload.event(), PageLoadEvent::Finished) {
                    let shell = load_handle.state::<ShellContext>();
                    shell.dispatch(&load_handle, ShellAction::ContentReady);
                }
            })
            .on_navigation(move |url| match policy.decide(url) {
                NavigationDecision::AllowInApp => true,
                NavigationDecision::OpenExternal => {
                    let shell = nav_handle.state::<ShellContext>();
                    shell.dispatch(
                        &nav_handle,
                        ShellAction::PopupRequested {
                            url: url.to_string(),
                        },
                    );
                    false
                }
            });

    let size = window
        .inner_size()
        .map_err(|err| format!("failed to query window size: {err}"))?;
    let webview = window
        .add_child(webview_builder, tauri::PhysicalPosition::new(0, 0), size)
        .map_err(|err| format!("failed to attach content view: {err}"))?;

    // Hidden until the first document load finishes, so unstyled content never
    // flashes.
    if let Err(err) = webview.hide() {
        log::warn!("failed to hide content view before load: {err}");
    }

    let resize_window = window.clone();
    let resize_handle = app.clone();
    window.on_window_event(move |event| {
        if matches!(event, tauri::WindowEvent::Resized(_)) {
            sync_after_resize(&resize_handle, &resize_window);
        }
    });

    #[cfg(debug_assertions)]
    webview.open_devtools();

    Ok(())
}

// `Resized` carries the outer frame extent, not the client area; the window is
// re-queried directly before syncing the content view.
fn sync_after_resize(app: &tauri::AppHandle, window: &tauri::Window) {
    let size = match window.inner_size() {
        Ok(size) => size,
        Err(err) => {
            log::warn!("failed to query window size after resize: {err}");
            return;
        }
    };
    let position = window.outer_position().unwrap_or_default();
    let rect = WindowRect {
        x: position.x,
        y: position.y,
        w: size.width as i32,
        h: size.height as i32,
    };
    let shell = app.state::<ShellContext>();
    shell.dispatch(app, ShellAction::WindowResized { rect });
}

/// Makes the application visible and focused again.
pub fn show_app(app: &tauri::AppHandle) {
    // App-level unhide only exists on macOS; elsewhere focusing the window is
    // the equivalent observable outcome.
    #[cfg(target_os = "macos")]
    if let Err(err) = app.show() {
        log::warn!("failed to unhide application: {err}");
    }
    if let Some(window) = app.get_window(MAIN_WINDOW_LABEL) {
        if let Err(err) = window.set_focus() {
            log::warn!("failed to focus main window: {err}");
        }
    }
}

/// Re-applies `rect` as the content-view bounds.
pub fn apply_content_bounds(app: &tauri::AppHandle, rect: WindowRect) -> Result<(), String> {
    let webview = app
        .get_webview(CONTENT_WEBVIEW_LABEL)
        .ok_or_else(|| format!("content view `{CONTENT_WEBVIEW_LABEL}` not found"))?;
    webview
        .set_position(tauri::PhysicalPosition::new(rect.x, rect.y))
        .map_err(|err| format!("failed to position content view: {err}"))?;
    webview
        .set_size(tauri::PhysicalSize::new(rect.w as u32, rect.h as u32))
        .map_err(|err| format!("failed to size content view: {err}"))
}

/// Reveals the content view after its initial document load.
pub fn reveal_content(app: &tauri::AppHandle) -> Result<(), String> {
    let webview = app
        .get_webview(CONTENT_WEBVIEW_LABEL)
        .ok_or_else(|| format!("content view `{CONTENT_WEBVIEW_LABEL}` not found"))?;
    webview
        .show()
        .map_err(|err| format!("failed to reveal content view: {err}"))
}

// The host toolkit draws no overlay region itself, so the reserved height is
// handed to the content layer as a CSS variable before any document scripts
// run.
fn overlay_bootstrap_script(frame: &FrameStyle) -> String {
    let height = frame.titlebar_overlay.map_or(0, |overlay| overlay.height);
    format!(
        "document.documentElement.style.setProperty('--titlebar-overlay-height', '{height}px');"
    )
}

#[cfg(test)]
mod tests {
    use shell_runtime::Platform;

    use super::overlay_bootstrap_script;

    #[test]
    fn overlay_script_reserves_the_windows_band_and_zero_elsewhere() {
        let windows = overlay_bootstrap_script(&Platform::Windows.frame_style());
        assert!(windows.contains("'38px'"));

        let linux = overlay_bootstrap_script(&Platform::Linux.frame_style());
        assert!(linux.contains("'0px'"));
    }
}
