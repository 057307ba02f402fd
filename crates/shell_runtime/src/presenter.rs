//! Read-only taskbar projections of the window entity store.
//!
//! Both taskbar variants (the top strip and the side dock) render the same
//! [`TaskbarEntry`] rows. Entries come out in insertion order: the store's
//! vectors are never reordered, so a z-bump on activation does not shuffle
//! the taskbar.

use surface_contract::IconKind;

use crate::model::{DesktopState, MinimizedWindowPolicy, SessionId, WindowId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// What a taskbar entry dispatches against when clicked.
pub enum TaskbarTarget {
    /// A managed window.
    Window(WindowId),
    /// A terminal session or auxiliary tab.
    Session(SessionId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One row of either taskbar variant.
pub struct TaskbarEntry {
    /// Click target.
    pub target: TaskbarTarget,
    /// Display title.
    pub title: String,
    /// Display icon class.
    pub icon_kind: IconKind,
    /// Whether the entry's window/session is the active one.
    pub is_active: bool,
    /// Whether the entry's window is minimized. Always `false` for sessions.
    pub is_minimized: bool,
}

/// Full taskbar projection: every window, then every session, in insertion
/// order.
pub fn taskbar_entries(state: &DesktopState) -> Vec<TaskbarEntry> {
    let active = state.active_window_id();
    let mut entries: Vec<TaskbarEntry> = state
        .windows
        .iter()
        .map(|window| TaskbarEntry {
            target: TaskbarTarget::Window(window.id),
            title: window.title.clone(),
            icon_kind: window.icon_kind,
            is_active: active == Some(window.id),
            is_minimized: window.state.is_minimized(),
        })
        .collect();
    entries.extend(state.sessions.iter().map(|session| TaskbarEntry {
        target: TaskbarTarget::Session(session.id),
        title: session.title.clone(),
        icon_kind: session.kind.icon_kind(),
        is_active: session.is_active,
        is_minimized: false,
    }));
    entries
}

/// Top-strip projection: like [`taskbar_entries`] but honoring the
/// minimized-window policy preference.
pub fn top_bar_entries(state: &DesktopState) -> Vec<TaskbarEntry> {
    let mut entries = taskbar_entries(state);
    if state.preferences.top_bar_minimized == MinimizedWindowPolicy::Hide {
        entries.retain(|entry| !entry.is_minimized);
    }
    entries
}
