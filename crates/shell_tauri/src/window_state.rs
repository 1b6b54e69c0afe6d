//! Window-geometry persistence across launches.

use std::fs;
use std::path::{Path, PathBuf};

use shell_runtime::{
    WindowGeometryEnvelope, WindowRect, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH,
    WINDOW_GEOMETRY_SCHEMA_VERSION,
};
use tauri::Manager;

const WINDOW_STATE_FILE: &str = "window_state.json";

fn window_state_root(app: &tauri::AppHandle) -> Result<PathBuf, String> {
    Ok(app
        .path()
        .app_data_dir()
        .map_err(|err| format!("failed to resolve app data dir: {err}"))?
        .join("window_state"))
}

#[derive(Debug, Clone)]
/// Geometry-persistence collaborator: restores the main-window rectangle at
/// construction time and tracks move/resize events for future launches.
pub struct WindowStateStore {
    file: PathBuf,
}

impl WindowStateStore {
    /// Creates a store rooted at `root`.
    pub fn from_root(root: impl AsRef<Path>) -> Result<Self, String> {
        let root = root.as_ref();
        fs::create_dir_all(root).map_err(|err| {
            format!("failed to create window-state dir {}: {err}", root.display())
        })?;
        Ok(Self {
            file: root.join(WINDOW_STATE_FILE),
        })
    }

    /// Creates the store under the per-app data directory.
    pub fn from_app(app: &tauri::AppHandle) -> Result<Self, String> {
        Self::from_root(window_state_root(app)?)
    }

    /// Loads the persisted rectangle, clamped to the minimum extent.
    ///
    /// A missing file and an unknown envelope schema both read as `None`.
    pub fn load(&self) -> Result<Option<WindowRect>, String> {
        if !self.file.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&self.file)
            .map_err(|err| format!("failed to read {}: {err}", self.file.display()))?;
        let envelope: WindowGeometryEnvelope = serde_json::from_str(&raw).map_err(|err| {
            format!(
                "failed to parse window-state envelope {}: {err}",
                self.file.display()
            )
        })?;
        if envelope.schema_version != WINDOW_GEOMETRY_SCHEMA_VERSION {
            return Ok(None);
        }
        Ok(Some(
            envelope.rect.clamped_min(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT),
        ))
    }

    /// Persists `rect` as a current-version envelope.
    pub fn save(&self, rect: WindowRect) -> Result<(), String> {
        let serialized = serde_json::to_string(&WindowGeometryEnvelope::new(rect))
            .map_err(|err| format!("failed to serialize window-state envelope: {err}"))?;
        fs::write(&self.file, serialized)
            .map_err(|err| format!("failed to write {}: {err}", self.file.display()))
    }

    /// Starts tracking `window` so every move/resize updates the record.
    ///
    /// Writes go straight through; redundant writes under a rapid resize are
    /// accepted.
    pub fn attach(&self, window: &tauri::Window) {
        let store = self.clone();
        let tracked = window.clone();
        window.on_window_event(move |event| {
            if matches!(
                event,
                tauri::WindowEvent::Resized(_) | tauri::WindowEvent::Moved(_)
            ) {
                if let Err(err) = store.save_from_window(&tracked) {
                    log::warn!("window state save failed: {err}");
                }
            }
        });
    }

    fn save_from_window(&self, window: &tauri::Window) -> Result<(), String> {
        let size = window
            .inner_size()
            .map_err(|err| format!("failed to query window size: {err}"))?;
        let position = window
            .outer_position()
            .map_err(|err| format!("failed to query window position: {err}"))?;
        self.save(WindowRect {
            x: position.x,
            y: position.y,
            w: size.width as i32,
            h: size.height as i32,
        })
    }
}
