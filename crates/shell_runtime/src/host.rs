//! Host integration seam.
//!
//! The embedding page supplies a [`ShellHostContext`] describing what it
//! wants to observe; the runtime hands it each [`RuntimeEffect`] the reducer
//! emits. Hosts that do not care simply use the default context.

use leptos::{Callable, Callback};

use crate::model::{WindowId, WindowRect};
use crate::reducer::RuntimeEffect;

/// Viewport fallback used off-wasm (tests, doc builds).
const FALLBACK_VIEWPORT: (i32, i32) = (1280, 800);

#[derive(Clone, Default)]
/// Capabilities and observers supplied by the embedding page.
pub struct ShellHostContext {
    /// Invoked when a window's committed geometry changes.
    pub on_geometry_changed: Option<Callback<(WindowId, WindowRect)>>,
    /// Invoked when the active window changes.
    pub on_focus_changed: Option<Callback<Option<WindowId>>>,
}

impl ShellHostContext {
    /// Routes one reducer effect to the host's observers.
    pub fn run_runtime_effect(&self, effect: RuntimeEffect) {
        match effect {
            RuntimeEffect::GeometryChanged { window_id, rect } => {
                if let Some(observer) = self.on_geometry_changed.as_ref() {
                    observer.call((window_id, rect));
                }
            }
            RuntimeEffect::FocusChanged { window_id } => {
                if let Some(observer) = self.on_focus_changed.as_ref() {
                    observer.call(window_id);
                }
            }
        }
    }
}

/// Current desktop viewport: the browser window minus the top taskbar strip.
pub fn desktop_viewport_rect(taskbar_height_px: i32) -> WindowRect {
    let (w, h) = browser_inner_size();
    WindowRect {
        x: 0,
        y: 0,
        w,
        h: (h - taskbar_height_px).max(0),
    }
}

#[cfg(target_arch = "wasm32")]
fn browser_inner_size() -> (i32, i32) {
    let Some(window) = web_sys::window() else {
        return FALLBACK_VIEWPORT;
    };
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .map(|v| v as i32)
        .unwrap_or(FALLBACK_VIEWPORT.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .map(|v| v as i32)
        .unwrap_or(FALLBACK_VIEWPORT.1);
    (w, h)
}

#[cfg(not(target_arch = "wasm32"))]
fn browser_inner_size() -> (i32, i32) {
    FALLBACK_VIEWPORT
}
