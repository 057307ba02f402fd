//! Data model for the desktop window/taskbar manager.
//!
//! [`DesktopState`] is the window entity store: the single source of truth
//! for every open surface. All mutation flows through
//! [`crate::reducer::reduce_desktop`]; presenters and surface controllers
//! hold ids plus read-only snapshots, never mutable references.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use surface_contract::IconKind;

/// Default width for windows opened without an explicit rect.
pub const DEFAULT_WINDOW_WIDTH: i32 = 640;
/// Default height for windows opened without an explicit rect.
pub const DEFAULT_WINDOW_HEIGHT: i32 = 420;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
/// Opaque identifier for a managed window. Assigned at creation, immutable.
pub struct WindowId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
/// Opaque identifier for a terminal session or auxiliary tab.
pub struct SessionId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Built-in surface kinds the shell can launch.
pub enum SurfaceKind {
    /// Terminal emulator surface.
    Terminal,
    /// Plain text/content editor.
    TextEditor,
    /// Environment-variable / preset editor.
    EnvEditor,
    /// Image preview surface.
    ImageViewer,
}

impl SurfaceKind {
    /// Default window title for the kind.
    pub fn title(self) -> &'static str {
        match self {
            Self::Terminal => "Terminal",
            Self::TextEditor => "Editor",
            Self::EnvEditor => "Environment",
            Self::ImageViewer => "Viewer",
        }
    }

    /// Default icon class for the kind.
    pub fn icon_kind(self) -> IconKind {
        match self {
            Self::Terminal => IconKind::Terminal,
            Self::TextEditor => IconKind::Editor,
            Self::EnvEditor => IconKind::Settings,
            Self::ImageViewer => IconKind::Image,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Window geometry in viewport coordinates (origin at the top-left of the
/// desktop area).
pub struct WindowRect {
    /// Left offset.
    pub x: i32,
    /// Top offset.
    pub y: i32,
    /// Rendered width.
    pub w: i32,
    /// Rendered height.
    pub h: i32,
}

impl WindowRect {
    /// Returns the rect translated by `(dx, dy)`.
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    /// Returns the rect with dimensions floored at `(min_w, min_h)`.
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
            x: 48,
            y: 48,
            w: DEFAULT_WINDOW_WIDTH,
            h: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Pointer position in viewport coordinates.
pub struct PointerPosition {
    /// Horizontal coordinate.
    pub x: i32,
    /// Vertical coordinate.
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Lifecycle state of a managed window.
pub enum WindowState {
    /// Visible at its own geometry.
    Normal,
    /// Hidden; excluded from hit-testing and focus candidacy, geometry kept.
    Minimized,
    /// Filling the viewport; original geometry saved for restore.
    Maximized,
}

impl WindowState {
    /// Whether the window is minimized.
    pub fn is_minimized(self) -> bool {
        matches!(self, Self::Minimized)
    }

    /// Whether the window is maximized.
    pub fn is_maximized(self) -> bool {
        matches!(self, Self::Maximized)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// One managed window record.
pub struct WindowRecord {
    /// Immutable identifier.
    pub id: WindowId,
    /// Surface kind launched into this window.
    pub kind: SurfaceKind,
    /// Taskbar/chrome title.
    pub title: String,
    /// Taskbar/chrome icon class.
    pub icon_kind: IconKind,
    /// Current committed geometry.
    pub rect: WindowRect,
    /// Geometry saved on entering `Maximized`; `Some` only while maximized.
    pub pre_maximize_rect: Option<WindowRect>,
    /// Stacking order; unique among open windows, monotonically assigned.
    pub z_index: u64,
    /// Lifecycle state.
    pub state: WindowState,
    /// Opaque launch payload forwarded to the content provider.
    pub launch_params: Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Kind of a lightweight taskbar participant.
pub enum SessionKind {
    /// Terminal session surface.
    Terminal,
    /// Auxiliary tab (fixed surface without its own window geometry).
    Auxiliary,
}

impl SessionKind {
    /// Icon class used in taskbar aggregation.
    pub fn icon_kind(self) -> IconKind {
        match self {
            Self::Terminal => IconKind::Terminal,
            Self::Auxiliary => IconKind::Generic,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One terminal session or auxiliary tab. No geometry of its own; it renders
/// inside a window or a fixed surface and only participates in taskbar
/// aggregation.
pub struct SessionRecord {
    /// Immutable identifier.
    pub id: SessionId,
    /// Participant kind.
    pub kind: SessionKind,
    /// Taskbar title.
    pub title: String,
    /// Whether the session is the selected one among sessions.
    pub is_active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Whether the top-docked taskbar variant lists minimized windows.
pub enum MinimizedWindowPolicy {
    /// Minimized windows appear so users can restore them.
    Show,
    /// Minimized windows are omitted from the top strip (the dock always
    /// shows them).
    Hide,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Shell behavior preferences.
pub struct DesktopPreferences {
    /// Clamp drag-moves so part of the window stays inside the viewport.
    pub clamp_moves_to_viewport: bool,
    /// Minimized-window policy for the top taskbar variant.
    pub top_bar_minimized: MinimizedWindowPolicy,
}

impl Default for DesktopPreferences {
    fn default() -> Self {
        Self {
            clamp_moves_to_viewport: false,
            top_bar_minimized: MinimizedWindowPolicy::Show,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// The window entity store.
pub struct DesktopState {
    /// Next window id to allocate.
    pub next_window_id: u64,
    /// Next session id to allocate.
    pub next_session_id: u64,
    /// Next z-index to assign. Monotonic; never reused, even after closes.
    pub next_z: u64,
    /// Open windows in insertion order. The vector is never reordered, so
    /// taskbar derivation can rely on it for stable display order.
    pub windows: Vec<WindowRecord>,
    /// Terminal sessions and auxiliary tabs in insertion order.
    pub sessions: Vec<SessionRecord>,
    /// Shell behavior preferences.
    pub preferences: DesktopPreferences,
}

impl Default for DesktopState {
    fn default() -> Self {
        Self {
            next_window_id: 1,
            next_session_id: 1,
            next_z: 1,
            windows: Vec::new(),
            sessions: Vec::new(),
            preferences: DesktopPreferences::default(),
        }
    }
}

impl DesktopState {
    /// Looks up a window record by id.
    pub fn window(&self, window_id: WindowId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| w.id == window_id)
    }

    /// The active window: highest z-index among non-minimized windows.
    pub fn active_window_id(&self) -> Option<WindowId> {
        self.windows
            .iter()
            .filter(|w| !w.state.is_minimized())
            .max_by_key(|w| w.z_index)
            .map(|w| w.id)
    }

    /// Looks up a session record by id.
    pub fn session(&self, session_id: SessionId) -> Option<&SessionRecord> {
        self.sessions.iter().find(|s| s.id == session_id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Request to open a new window.
pub struct OpenSurfaceRequest {
    /// Surface kind to launch.
    pub kind: SurfaceKind,
    /// Title override; defaults to the kind's title.
    pub title: Option<String>,
    /// Icon override; defaults to the kind's icon class.
    pub icon_kind: Option<IconKind>,
    /// Initial geometry; defaults to a cascaded placement.
    pub rect: Option<WindowRect>,
    /// Opaque launch payload for the content provider.
    pub launch_params: Value,
}

impl OpenSurfaceRequest {
    /// Creates a request with defaults for the given kind.
    pub fn new(kind: SurfaceKind) -> Self {
        Self {
            kind,
            title: None,
            icon_kind: None,
            rect: None,
            launch_params: Value::Null,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Compass resize handles.
pub enum ResizeEdge {
    /// Top edge.
    North,
    /// Bottom edge.
    South,
    /// Right edge.
    East,
    /// Left edge.
    West,
    /// Top-right corner.
    NorthEast,
    /// Top-left corner.
    NorthWest,
    /// Bottom-right corner.
    SouthEast,
    /// Bottom-left corner.
    SouthWest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// What a pointer gesture manipulates.
pub enum GestureHandle {
    /// Whole-window drag.
    Move,
    /// Edge/corner resize.
    Resize(ResizeEdge),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// One live pointer gesture, created on begin and destroyed on end/cancel.
/// All geometry is computed from this start snapshot plus the cumulative
/// pointer delta, never incrementally from the previous frame.
pub struct GestureSession {
    /// Window being manipulated.
    pub window_id: WindowId,
    /// Handle grabbed at gesture start.
    pub handle: GestureHandle,
    /// Pointer position at gesture start.
    pub pointer_start: PointerPosition,
    /// Window geometry at gesture start.
    pub rect_start: WindowRect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Ephemeral interaction state. `preview` is presentation-only geometry shown
/// while a gesture is live; the store is written once, on commit.
pub struct InteractionState {
    /// Live gesture, if any.
    pub gesture: Option<GestureSession>,
    /// Candidate geometry for the gesture's window.
    pub preview: Option<WindowRect>,
}
