//! Browser desktop shell runtime.
//!
//! The crate is organized around a single reducer over the window entity
//! store:
//!
//! - [`model`] holds the store and gesture types.
//! - [`geometry`] is the pure drag/resize math.
//! - [`reducer`] applies actions and emits runtime effects.
//! - [`presenter`] projects the store into taskbar rows.
//! - [`runtime_context`] wires the reducer into Leptos signals.
//! - [`components`] renders the shell from `shell_ui` primitives.
//! - [`host`] is the seam toward the embedding page.

pub mod components;
pub mod geometry;
pub mod host;
pub mod model;
pub mod presenter;
pub mod reducer;
pub mod runtime_context;

pub use components::{DesktopShell, TASKBAR_HEIGHT_PX};
pub use host::{desktop_viewport_rect, ShellHostContext};
pub use model::{
    DesktopPreferences, DesktopState, GestureHandle, GestureSession, InteractionState,
    MinimizedWindowPolicy, OpenSurfaceRequest, PointerPosition, ResizeEdge, SessionId,
    SessionKind, SessionRecord, SurfaceKind, WindowId, WindowRecord, WindowRect, WindowState,
};
pub use presenter::{taskbar_entries, top_bar_entries, TaskbarEntry, TaskbarTarget};
pub use reducer::{
    reduce_desktop, validate_invariants, DesktopAction, ReducerError, RuntimeEffect,
};
pub use runtime_context::{
    use_desktop_runtime, DesktopProvider, DesktopRuntimeContext, SurfaceRegistry,
};
