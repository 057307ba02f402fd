//! The desktop reducer: every state transition of the window entity store
//! goes through [`reduce_desktop`].
//!
//! The reducer is a pure function over `(DesktopState, InteractionState,
//! DesktopAction)`. It returns the runtime effects the host must perform;
//! it never touches the DOM or any signal itself, which keeps the whole
//! window-management core testable off the main thread and off wasm.

use thiserror::Error;

use crate::geometry::{self, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};
use crate::model::{
    DesktopState, GestureHandle, GestureSession, InteractionState, MinimizedWindowPolicy,
    OpenSurfaceRequest, PointerPosition, SessionId, SessionKind, SessionRecord, WindowId,
    WindowRecord, WindowRect, WindowState,
};

/// Horizontal/vertical step applied to each successive default placement.
const CASCADE_STEP: i32 = 20;
/// Number of cascade slots before the placement wraps back to the origin.
const CASCADE_SLOTS: u64 = 8;

#[derive(Debug, Clone, PartialEq)]
/// Commands accepted by the reducer.
pub enum DesktopAction {
    /// Open a new window for a surface.
    OpenWindow(OpenSurfaceRequest),
    /// Close a window and drop its record.
    CloseWindow(WindowId),
    /// Raise a window to the top of the stack, restoring it if minimized.
    ActivateWindow(WindowId),
    /// Minimize a window, keeping its geometry.
    MinimizeWindow(WindowId),
    /// Maximize a window to the given viewport.
    MaximizeWindow {
        /// Window to maximize.
        window_id: WindowId,
        /// Current desktop viewport.
        viewport: WindowRect,
    },
    /// Restore a maximized window to its saved geometry.
    RestoreWindow(WindowId),
    /// Taskbar click semantics: minimize when active, otherwise activate.
    ToggleTaskbarWindow(WindowId),
    /// Programmatic reposition without a pointer gesture.
    MoveWindow {
        /// Window to move.
        window_id: WindowId,
        /// New left offset.
        x: i32,
        /// New top offset.
        y: i32,
    },
    /// Start a pointer gesture on a window handle.
    BeginGesture {
        /// Window grabbed.
        window_id: WindowId,
        /// Titlebar move or a resize edge.
        handle: GestureHandle,
        /// Pointer position at grab time.
        pointer: PointerPosition,
    },
    /// Feed a pointer sample into the live gesture.
    UpdateGesture {
        /// Current pointer position.
        pointer: PointerPosition,
        /// Current desktop viewport.
        viewport: WindowRect,
    },
    /// Commit the live gesture's preview geometry to the store.
    EndGesture,
    /// Abandon the live gesture without committing.
    CancelGesture,
    /// Register a terminal session or auxiliary tab.
    OpenSession {
        /// Participant kind.
        kind: SessionKind,
        /// Taskbar title.
        title: String,
    },
    /// Select a session as the active one.
    ActivateSession(SessionId),
    /// Remove a session record.
    CloseSession(SessionId),
    /// Change the top-bar minimized-window policy.
    SetMinimizedWindowPolicy(MinimizedWindowPolicy),
    /// Enable or disable drag-move viewport clamping.
    SetMoveClamping(bool),
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side effects for the host to perform after a successful reduction.
pub enum RuntimeEffect {
    /// A window's committed geometry changed.
    GeometryChanged {
        /// Affected window.
        window_id: WindowId,
        /// New committed geometry.
        rect: WindowRect,
    },
    /// The active window changed; `None` when no window can hold focus.
    FocusChanged {
        /// New active window, if any.
        window_id: Option<WindowId>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Reducer failures. The store is left unchanged when one is returned.
pub enum ReducerError {
    /// The action referenced a window that is not open.
    #[error("window {0:?} is not open")]
    WindowNotFound(WindowId),
    /// The action referenced a session that does not exist.
    #[error("session {0:?} does not exist")]
    SessionNotFound(SessionId),
}

/// Applies `action` to the store and interaction state.
///
/// On success the returned effects describe what changed; on error both
/// states are untouched. Focus-change effects are derived centrally by
/// comparing the active window before and after the transition.
pub fn reduce_desktop(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    action: DesktopAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let focus_before = state.active_window_id();
    let mut effects = apply_action(state, interaction, action)?;

    let focus_after = state.active_window_id();
    if focus_before != focus_after {
        effects.push(RuntimeEffect::FocusChanged {
            window_id: focus_after,
        });
    }

    debug_assert!(validate_invariants(state), "reducer broke a store invariant");
    Ok(effects)
}

fn apply_action(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    action: DesktopAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    match action {
        DesktopAction::OpenWindow(request) => Ok(open_window(state, request)),
        DesktopAction::CloseWindow(window_id) => close_window(state, interaction, window_id),
        DesktopAction::ActivateWindow(window_id) => {
            activate_window(state, window_id)?;
            Ok(Vec::new())
        }
        DesktopAction::MinimizeWindow(window_id) => minimize_window(state, window_id),
        DesktopAction::MaximizeWindow {
            window_id,
            viewport,
        } => maximize_window(state, window_id, viewport),
        DesktopAction::RestoreWindow(window_id) => restore_window(state, window_id),
        DesktopAction::ToggleTaskbarWindow(window_id) => {
            if state.window(window_id).is_none() {
                return Err(ReducerError::WindowNotFound(window_id));
            }
            let is_active = state.active_window_id() == Some(window_id);
            if is_active {
                minimize_window(state, window_id)
            } else {
                activate_window(state, window_id)?;
                Ok(Vec::new())
            }
        }
        DesktopAction::MoveWindow { window_id, x, y } => {
            let window = window_mut(state, window_id)?;
            window.rect.x = x;
            window.rect.y = y;
            let rect = window.rect;
            Ok(vec![RuntimeEffect::GeometryChanged { window_id, rect }])
        }
        DesktopAction::BeginGesture {
            window_id,
            handle,
            pointer,
        } => begin_gesture(state, interaction, window_id, handle, pointer),
        DesktopAction::UpdateGesture { pointer, viewport } => {
            update_gesture(state, interaction, pointer, viewport);
            Ok(Vec::new())
        }
        DesktopAction::EndGesture => Ok(end_gesture(state, interaction)),
        DesktopAction::CancelGesture => {
            interaction.gesture = None;
            interaction.preview = None;
            Ok(Vec::new())
        }
        DesktopAction::OpenSession { kind, title } => {
            open_session(state, kind, title);
            Ok(Vec::new())
        }
        DesktopAction::ActivateSession(session_id) => {
            if state.session(session_id).is_none() {
                return Err(ReducerError::SessionNotFound(session_id));
            }
            for session in &mut state.sessions {
                session.is_active = session.id == session_id;
            }
            Ok(Vec::new())
        }
        DesktopAction::CloseSession(session_id) => close_session(state, session_id),
        DesktopAction::SetMinimizedWindowPolicy(policy) => {
            state.preferences.top_bar_minimized = policy;
            Ok(Vec::new())
        }
        DesktopAction::SetMoveClamping(clamp) => {
            state.preferences.clamp_moves_to_viewport = clamp;
            Ok(Vec::new())
        }
    }
}

fn window_mut(
    state: &mut DesktopState,
    window_id: WindowId,
) -> Result<&mut WindowRecord, ReducerError> {
    state
        .windows
        .iter_mut()
        .find(|w| w.id == window_id)
        .ok_or(ReducerError::WindowNotFound(window_id))
}

fn next_z(state: &mut DesktopState) -> u64 {
    let z = state.next_z;
    state.next_z += 1;
    z
}

/// Default placement for a window opened without an explicit rect: a short
/// diagonal cascade that wraps after [`CASCADE_SLOTS`] windows.
fn cascade_rect(window_id: WindowId) -> WindowRect {
    let slot = ((window_id.0 - 1) % CASCADE_SLOTS) as i32;
    WindowRect::default().offset(slot * CASCADE_STEP, slot * CASCADE_STEP)
}

fn open_window(state: &mut DesktopState, request: OpenSurfaceRequest) -> Vec<RuntimeEffect> {
    let window_id = WindowId(state.next_window_id);
    state.next_window_id += 1;
    let z_index = next_z(state);

    let rect = request
        .rect
        .unwrap_or_else(|| cascade_rect(window_id))
        .clamped_min(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT);

    state.windows.push(WindowRecord {
        id: window_id,
        kind: request.kind,
        title: request.title.unwrap_or_else(|| request.kind.title().into()),
        icon_kind: request.icon_kind.unwrap_or_else(|| request.kind.icon_kind()),
        rect,
        pre_maximize_rect: None,
        z_index,
        state: WindowState::Normal,
        launch_params: request.launch_params,
    });

    vec![RuntimeEffect::GeometryChanged { window_id, rect }]
}

fn close_window(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    window_id: WindowId,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    if state.window(window_id).is_none() {
        return Err(ReducerError::WindowNotFound(window_id));
    }
    state.windows.retain(|w| w.id != window_id);
    if interaction
        .gesture
        .is_some_and(|gesture| gesture.window_id == window_id)
    {
        interaction.gesture = None;
        interaction.preview = None;
    }
    Ok(Vec::new())
}

fn activate_window(state: &mut DesktopState, window_id: WindowId) -> Result<(), ReducerError> {
    let already_active = state.active_window_id() == Some(window_id);
    let window = window_mut(state, window_id)?;
    // An already-active normal window keeps its z-index, so repeated clicks
    // do not burn through the counter.
    if already_active && !window.state.is_minimized() {
        return Ok(());
    }
    if window.state.is_minimized() {
        window.state = WindowState::Normal;
    }
    let z = next_z(state);
    // Re-borrow: next_z needed the whole state.
    if let Some(window) = state.windows.iter_mut().find(|w| w.id == window_id) {
        window.z_index = z;
    }
    Ok(())
}

fn minimize_window(
    state: &mut DesktopState,
    window_id: WindowId,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let window = window_mut(state, window_id)?;
    if window.state.is_minimized() {
        return Ok(Vec::new());
    }
    // Minimizing a maximized window first restores its saved geometry, so a
    // later activate brings it back at its pre-maximize size.
    if let Some(saved) = window.pre_maximize_rect.take() {
        window.rect = saved;
    }
    window.state = WindowState::Minimized;
    Ok(Vec::new())
}

fn maximize_window(
    state: &mut DesktopState,
    window_id: WindowId,
    viewport: WindowRect,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    activate_window(state, window_id)?;
    let window = window_mut(state, window_id)?;
    if !window.state.is_maximized() {
        window.pre_maximize_rect = Some(window.rect);
    }
    window.rect = viewport.clamped_min(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT);
    window.state = WindowState::Maximized;
    let rect = window.rect;
    Ok(vec![RuntimeEffect::GeometryChanged { window_id, rect }])
}

fn restore_window(
    state: &mut DesktopState,
    window_id: WindowId,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    activate_window(state, window_id)?;
    let window = window_mut(state, window_id)?;
    let Some(saved) = window.pre_maximize_rect.take() else {
        return Ok(Vec::new());
    };
    window.rect = saved;
    window.state = WindowState::Normal;
    let rect = window.rect;
    Ok(vec![RuntimeEffect::GeometryChanged { window_id, rect }])
}

fn begin_gesture(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    window_id: WindowId,
    handle: GestureHandle,
    pointer: PointerPosition,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let window = state
        .window(window_id)
        .ok_or(ReducerError::WindowNotFound(window_id))?;
    // Maximized and minimized windows have no draggable geometry; the grab
    // still raises the window.
    if window.state != WindowState::Normal {
        activate_window(state, window_id)?;
        return Ok(Vec::new());
    }
    let rect_start = window.rect;
    activate_window(state, window_id)?;
    interaction.gesture = Some(GestureSession {
        window_id,
        handle,
        pointer_start: pointer,
        rect_start,
    });
    interaction.preview = None;
    Ok(Vec::new())
}

fn update_gesture(
    state: &DesktopState,
    interaction: &mut InteractionState,
    pointer: PointerPosition,
    viewport: WindowRect,
) {
    let Some(gesture) = interaction.gesture else {
        return;
    };
    // Stale pointer events can arrive after the window closed.
    if state.window(gesture.window_id).is_none() {
        interaction.gesture = None;
        interaction.preview = None;
        return;
    }
    let dx = pointer.x - gesture.pointer_start.x;
    let dy = pointer.y - gesture.pointer_start.y;
    interaction.preview = Some(geometry::apply_gesture(
        gesture.handle,
        gesture.rect_start,
        dx,
        dy,
        viewport,
        state.preferences.clamp_moves_to_viewport,
    ));
}

fn end_gesture(state: &mut DesktopState, interaction: &mut InteractionState) -> Vec<RuntimeEffect> {
    let gesture = interaction.gesture.take();
    let preview = interaction.preview.take();
    let (Some(gesture), Some(preview)) = (gesture, preview) else {
        return Vec::new();
    };
    let Some(window) = state.windows.iter_mut().find(|w| w.id == gesture.window_id) else {
        return Vec::new();
    };
    if window.rect == preview {
        return Vec::new();
    }
    window.rect = preview;
    vec![RuntimeEffect::GeometryChanged {
        window_id: gesture.window_id,
        rect: preview,
    }]
}

fn open_session(state: &mut DesktopState, kind: SessionKind, title: String) {
    let session_id = SessionId(state.next_session_id);
    state.next_session_id += 1;
    for session in &mut state.sessions {
        session.is_active = false;
    }
    state.sessions.push(SessionRecord {
        id: session_id,
        kind,
        title,
        is_active: true,
    });
}

fn close_session(
    state: &mut DesktopState,
    session_id: SessionId,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let Some(index) = state.sessions.iter().position(|s| s.id == session_id) else {
        return Err(ReducerError::SessionNotFound(session_id));
    };
    let was_active = state.sessions[index].is_active;
    state.sessions.remove(index);
    if was_active {
        // Prefer the neighbor that took the closed session's slot.
        let fallback = index.min(state.sessions.len().saturating_sub(1));
        if let Some(session) = state.sessions.get_mut(fallback) {
            session.is_active = true;
        }
    }
    Ok(Vec::new())
}

/// Store invariants: distinct z-indices below the counter, minimum-size
/// floors, maximize snapshot iff maximized, at most one active session.
/// Checked after every reduction in debug builds.
pub fn validate_invariants(state: &DesktopState) -> bool {
    let mut seen = Vec::with_capacity(state.windows.len());
    for window in &state.windows {
        if seen.contains(&window.z_index) {
            return false;
        }
        seen.push(window.z_index);
        if window.z_index >= state.next_z {
            return false;
        }
        if window.rect.w < MIN_WINDOW_WIDTH || window.rect.h < MIN_WINDOW_HEIGHT {
            return false;
        }
        if window.pre_maximize_rect.is_some() != window.state.is_maximized() {
            return false;
        }
    }
    state.sessions.iter().filter(|s| s.is_active).count() <= 1
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::Value;

    use super::*;
    use crate::model::{ResizeEdge, SurfaceKind};

    const VIEWPORT: WindowRect = WindowRect {
        x: 0,
        y: 0,
        w: 1600,
        h: 900,
    };

    fn reduce(
        state: &mut DesktopState,
        interaction: &mut InteractionState,
        action: DesktopAction,
    ) -> Vec<RuntimeEffect> {
        reduce_desktop(state, interaction, action).expect("action should succeed")
    }

    fn open(state: &mut DesktopState, interaction: &mut InteractionState) -> WindowId {
        let id = WindowId(state.next_window_id);
        reduce(
            state,
            interaction,
            DesktopAction::OpenWindow(OpenSurfaceRequest::new(SurfaceKind::Terminal)),
        );
        id
    }

    fn open_at(
        state: &mut DesktopState,
        interaction: &mut InteractionState,
        rect: WindowRect,
    ) -> WindowId {
        let id = WindowId(state.next_window_id);
        let request = OpenSurfaceRequest {
            rect: Some(rect),
            ..OpenSurfaceRequest::new(SurfaceKind::Terminal)
        };
        reduce(state, interaction, DesktopAction::OpenWindow(request));
        id
    }

    fn rect_of(state: &DesktopState, id: WindowId) -> WindowRect {
        state.window(id).expect("window should exist").rect
    }

    #[test]
    fn open_window_assigns_ids_and_monotonic_z() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let a = open(&mut state, &mut interaction);
        let b = open(&mut state, &mut interaction);

        assert_eq!((a, b), (WindowId(1), WindowId(2)));
        assert_eq!(state.window(a).unwrap().z_index, 1);
        assert_eq!(state.window(b).unwrap().z_index, 2);
        assert_eq!(state.active_window_id(), Some(b));
        assert_eq!(
            state.window(a).unwrap().rect.offset(20, 20),
            state.window(b).unwrap().rect
        );
    }

    #[test]
    fn open_window_uses_request_overrides() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let rect = WindowRect {
            x: 10,
            y: 20,
            w: 500,
            h: 300,
        };
        let request = OpenSurfaceRequest {
            title: Some("Notes".into()),
            rect: Some(rect),
            launch_params: Value::String("draft.txt".into()),
            ..OpenSurfaceRequest::new(SurfaceKind::TextEditor)
        };
        let effects = reduce(&mut state, &mut interaction, DesktopAction::OpenWindow(request));

        let window = state.window(WindowId(1)).unwrap();
        assert_eq!(window.title, "Notes");
        assert_eq!(window.rect, rect);
        assert_eq!(window.launch_params, Value::String("draft.txt".into()));
        assert!(effects.contains(&RuntimeEffect::GeometryChanged {
            window_id: WindowId(1),
            rect,
        }));
    }

    #[test]
    fn open_window_floors_undersized_request_rects() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let id = open_at(
            &mut state,
            &mut interaction,
            WindowRect {
                x: 0,
                y: 0,
                w: 10,
                h: 10,
            },
        );
        assert_eq!(rect_of(&state, id).w, MIN_WINDOW_WIDTH);
        assert_eq!(rect_of(&state, id).h, MIN_WINDOW_HEIGHT);
    }

    #[test]
    fn activate_bumps_z_without_renumbering_others() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let a = open(&mut state, &mut interaction);
        let b = open(&mut state, &mut interaction);
        let c = open(&mut state, &mut interaction);

        let effects = reduce(&mut state, &mut interaction, DesktopAction::ActivateWindow(a));

        assert_eq!(state.window(a).unwrap().z_index, 4);
        assert_eq!(state.window(b).unwrap().z_index, 2);
        assert_eq!(state.window(c).unwrap().z_index, 3);
        assert_eq!(state.next_z, 5);
        assert_eq!(
            effects,
            vec![RuntimeEffect::FocusChanged { window_id: Some(a) }]
        );
    }

    #[test]
    fn activating_the_active_window_is_a_no_op() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let a = open(&mut state, &mut interaction);

        let effects = reduce(&mut state, &mut interaction, DesktopAction::ActivateWindow(a));

        assert_eq!(state.window(a).unwrap().z_index, 1);
        assert_eq!(state.next_z, 2);
        assert_eq!(effects, Vec::new());
    }

    #[test]
    fn activate_restores_a_minimized_window_on_top() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let a = open(&mut state, &mut interaction);
        let b = open(&mut state, &mut interaction);
        reduce(&mut state, &mut interaction, DesktopAction::MinimizeWindow(a));
        assert_eq!(state.active_window_id(), Some(b));

        let effects = reduce(&mut state, &mut interaction, DesktopAction::ActivateWindow(a));

        let window = state.window(a).unwrap();
        assert_eq!(window.state, WindowState::Normal);
        assert!(window.z_index > state.window(b).unwrap().z_index);
        assert_eq!(
            effects,
            vec![RuntimeEffect::FocusChanged { window_id: Some(a) }]
        );
    }

    #[test]
    fn minimize_keeps_geometry_and_yields_focus() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let a = open(&mut state, &mut interaction);
        let b = open(&mut state, &mut interaction);
        let rect_before = rect_of(&state, b);

        let effects = reduce(&mut state, &mut interaction, DesktopAction::MinimizeWindow(b));

        assert_eq!(state.window(b).unwrap().state, WindowState::Minimized);
        assert_eq!(rect_of(&state, b), rect_before);
        assert_eq!(
            effects,
            vec![RuntimeEffect::FocusChanged { window_id: Some(a) }]
        );
    }

    #[test]
    fn minimizing_the_last_window_reports_no_focus() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let a = open(&mut state, &mut interaction);

        let effects = reduce(&mut state, &mut interaction, DesktopAction::MinimizeWindow(a));

        assert_eq!(
            effects,
            vec![RuntimeEffect::FocusChanged { window_id: None }]
        );
    }

    #[test]
    fn maximize_snapshots_geometry_and_restore_brings_it_back() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let rect = WindowRect {
            x: 120,
            y: 90,
            w: 700,
            h: 400,
        };
        let a = open_at(&mut state, &mut interaction, rect);

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::MaximizeWindow {
                window_id: a,
                viewport: VIEWPORT,
            },
        );
        let window = state.window(a).unwrap();
        assert_eq!(window.state, WindowState::Maximized);
        assert_eq!(window.rect, VIEWPORT);
        assert_eq!(window.pre_maximize_rect, Some(rect));

        let effects = reduce(&mut state, &mut interaction, DesktopAction::RestoreWindow(a));
        let window = state.window(a).unwrap();
        assert_eq!(window.state, WindowState::Normal);
        assert_eq!(window.rect, rect);
        assert_eq!(window.pre_maximize_rect, None);
        assert_eq!(
            effects,
            vec![RuntimeEffect::GeometryChanged { window_id: a, rect }]
        );
    }

    #[test]
    fn maximizing_twice_keeps_the_original_snapshot() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let rect = WindowRect {
            x: 50,
            y: 60,
            w: 640,
            h: 420,
        };
        let a = open_at(&mut state, &mut interaction, rect);
        let maximize = DesktopAction::MaximizeWindow {
            window_id: a,
            viewport: VIEWPORT,
        };
        reduce(&mut state, &mut interaction, maximize.clone());
        reduce(&mut state, &mut interaction, maximize);

        assert_eq!(state.window(a).unwrap().pre_maximize_rect, Some(rect));
    }

    #[test]
    fn minimizing_a_maximized_window_restores_its_saved_rect() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let rect = WindowRect {
            x: 30,
            y: 40,
            w: 800,
            h: 500,
        };
        let a = open_at(&mut state, &mut interaction, rect);
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::MaximizeWindow {
                window_id: a,
                viewport: VIEWPORT,
            },
        );

        reduce(&mut state, &mut interaction, DesktopAction::MinimizeWindow(a));

        let window = state.window(a).unwrap();
        assert_eq!(window.state, WindowState::Minimized);
        assert_eq!(window.rect, rect);
        assert_eq!(window.pre_maximize_rect, None);
    }

    #[test]
    fn restore_without_a_snapshot_is_a_no_op() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let a = open(&mut state, &mut interaction);
        let rect = rect_of(&state, a);

        let effects = reduce(&mut state, &mut interaction, DesktopAction::RestoreWindow(a));

        assert_eq!(rect_of(&state, a), rect);
        assert_eq!(effects, Vec::new());
    }

    #[test]
    fn taskbar_toggle_minimizes_the_active_window_and_activates_others() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let a = open(&mut state, &mut interaction);
        let b = open(&mut state, &mut interaction);

        reduce(&mut state, &mut interaction, DesktopAction::ToggleTaskbarWindow(b));
        assert_eq!(state.window(b).unwrap().state, WindowState::Minimized);
        assert_eq!(state.active_window_id(), Some(a));

        reduce(&mut state, &mut interaction, DesktopAction::ToggleTaskbarWindow(b));
        assert_eq!(state.window(b).unwrap().state, WindowState::Normal);
        assert_eq!(state.active_window_id(), Some(b));
    }

    #[test]
    fn close_window_drops_the_record_and_fails_on_repeat() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let a = open(&mut state, &mut interaction);
        let b = open(&mut state, &mut interaction);

        let effects = reduce(&mut state, &mut interaction, DesktopAction::CloseWindow(b));
        assert_eq!(state.window(b), None);
        assert_eq!(
            effects,
            vec![RuntimeEffect::FocusChanged { window_id: Some(a) }]
        );

        let err = reduce_desktop(&mut state, &mut interaction, DesktopAction::CloseWindow(b));
        assert_eq!(err, Err(ReducerError::WindowNotFound(b)));
    }

    #[test]
    fn closing_the_gestured_window_clears_the_gesture() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let a = open(&mut state, &mut interaction);
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::BeginGesture {
                window_id: a,
                handle: GestureHandle::Move,
                pointer: PointerPosition { x: 0, y: 0 },
            },
        );
        assert!(interaction.gesture.is_some());

        reduce(&mut state, &mut interaction, DesktopAction::CloseWindow(a));

        assert_eq!(interaction, InteractionState::default());
    }

    #[test]
    fn ids_are_never_reused_after_close() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let a = open(&mut state, &mut interaction);
        reduce(&mut state, &mut interaction, DesktopAction::CloseWindow(a));
        let b = open(&mut state, &mut interaction);

        assert_eq!(b, WindowId(2));
        assert_eq!(state.window(b).unwrap().z_index, 2);
    }

    #[test]
    fn move_window_repositions_and_emits_geometry() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let a = open(&mut state, &mut interaction);

        let effects = reduce(
            &mut state,
            &mut interaction,
            DesktopAction::MoveWindow {
                window_id: a,
                x: 300,
                y: 200,
            },
        );

        let rect = rect_of(&state, a);
        assert_eq!((rect.x, rect.y), (300, 200));
        assert_eq!(
            effects,
            vec![RuntimeEffect::GeometryChanged { window_id: a, rect }]
        );
    }

    #[test]
    fn drag_gesture_previews_without_writing_the_store() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let rect = WindowRect {
            x: 100,
            y: 100,
            w: 800,
            h: 500,
        };
        let a = open_at(&mut state, &mut interaction, rect);

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::BeginGesture {
                window_id: a,
                handle: GestureHandle::Move,
                pointer: PointerPosition { x: 400, y: 120 },
            },
        );
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateGesture {
                pointer: PointerPosition { x: 460, y: 90 },
                viewport: VIEWPORT,
            },
        );

        assert_eq!(interaction.preview, Some(rect.offset(60, -30)));
        assert_eq!(rect_of(&state, a), rect);

        let effects = reduce(&mut state, &mut interaction, DesktopAction::EndGesture);
        assert_eq!(rect_of(&state, a), rect.offset(60, -30));
        assert_eq!(
            effects,
            vec![RuntimeEffect::GeometryChanged {
                window_id: a,
                rect: rect.offset(60, -30),
            }]
        );
        assert_eq!(interaction, InteractionState::default());
    }

    #[test]
    fn resize_gesture_commits_geometry_from_the_start_snapshot() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let rect = WindowRect {
            x: 100,
            y: 100,
            w: 800,
            h: 500,
        };
        let a = open_at(&mut state, &mut interaction, rect);

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::BeginGesture {
                window_id: a,
                handle: GestureHandle::Resize(ResizeEdge::SouthEast),
                pointer: PointerPosition { x: 900, y: 600 },
            },
        );
        // Two samples; only the last one matters.
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateGesture {
                pointer: PointerPosition { x: 920, y: 610 },
                viewport: VIEWPORT,
            },
        );
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateGesture {
                pointer: PointerPosition { x: 950, y: 580 },
                viewport: VIEWPORT,
            },
        );
        reduce(&mut state, &mut interaction, DesktopAction::EndGesture);

        assert_eq!(
            rect_of(&state, a),
            WindowRect {
                x: 100,
                y: 100,
                w: 850,
                h: 480,
            }
        );
    }

    #[test]
    fn west_gesture_dragged_far_right_commits_within_the_viewport() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let a = open_at(
            &mut state,
            &mut interaction,
            WindowRect {
                x: 100,
                y: 100,
                w: 800,
                h: 500,
            },
        );

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::BeginGesture {
                window_id: a,
                handle: GestureHandle::Resize(ResizeEdge::West),
                pointer: PointerPosition { x: 100, y: 300 },
            },
        );
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateGesture {
                pointer: PointerPosition { x: 1550, y: 300 },
                viewport: VIEWPORT,
            },
        );
        reduce(&mut state, &mut interaction, DesktopAction::EndGesture);

        let rect = rect_of(&state, a);
        assert_eq!(rect.w, MIN_WINDOW_WIDTH);
        assert_eq!(rect.x + rect.w, 900);
        assert!(rect.x + rect.w <= VIEWPORT.w);
    }

    #[test]
    fn cancel_gesture_discards_the_preview() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let rect = WindowRect {
            x: 100,
            y: 100,
            w: 800,
            h: 500,
        };
        let a = open_at(&mut state, &mut interaction, rect);
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::BeginGesture {
                window_id: a,
                handle: GestureHandle::Move,
                pointer: PointerPosition { x: 0, y: 0 },
            },
        );
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateGesture {
                pointer: PointerPosition { x: 200, y: 0 },
                viewport: VIEWPORT,
            },
        );

        reduce(&mut state, &mut interaction, DesktopAction::CancelGesture);

        assert_eq!(rect_of(&state, a), rect);
        assert_eq!(interaction, InteractionState::default());
    }

    #[test]
    fn gesture_on_a_maximized_window_only_activates() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let a = open(&mut state, &mut interaction);
        let b = open(&mut state, &mut interaction);
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::MaximizeWindow {
                window_id: a,
                viewport: VIEWPORT,
            },
        );
        reduce(&mut state, &mut interaction, DesktopAction::ActivateWindow(b));

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::BeginGesture {
                window_id: a,
                handle: GestureHandle::Move,
                pointer: PointerPosition { x: 10, y: 10 },
            },
        );

        assert_eq!(interaction.gesture, None);
        assert_eq!(state.active_window_id(), Some(a));
    }

    #[test]
    fn ending_a_gesture_with_no_movement_emits_nothing() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let a = open(&mut state, &mut interaction);
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::BeginGesture {
                window_id: a,
                handle: GestureHandle::Move,
                pointer: PointerPosition { x: 5, y: 5 },
            },
        );

        let effects = reduce(&mut state, &mut interaction, DesktopAction::EndGesture);

        assert_eq!(effects, Vec::new());
    }

    #[test]
    fn stale_gesture_updates_after_close_are_ignored() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let a = open(&mut state, &mut interaction);
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::BeginGesture {
                window_id: a,
                handle: GestureHandle::Move,
                pointer: PointerPosition { x: 0, y: 0 },
            },
        );
        // Force the race: gesture survives but the window goes away.
        state.windows.clear();

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateGesture {
                pointer: PointerPosition { x: 50, y: 50 },
                viewport: VIEWPORT,
            },
        );

        assert_eq!(interaction, InteractionState::default());
    }

    #[test]
    fn sessions_track_a_single_active_entry() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::OpenSession {
                kind: SessionKind::Terminal,
                title: "sh 1".into(),
            },
        );
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::OpenSession {
                kind: SessionKind::Terminal,
                title: "sh 2".into(),
            },
        );
        assert!(state.session(SessionId(2)).unwrap().is_active);
        assert!(!state.session(SessionId(1)).unwrap().is_active);

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::ActivateSession(SessionId(1)),
        );
        assert!(state.session(SessionId(1)).unwrap().is_active);
        assert!(!state.session(SessionId(2)).unwrap().is_active);
    }

    #[test]
    fn closing_the_active_session_promotes_a_neighbor() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        for title in ["sh 1", "sh 2", "sh 3"] {
            reduce(
                &mut state,
                &mut interaction,
                DesktopAction::OpenSession {
                    kind: SessionKind::Terminal,
                    title: title.into(),
                },
            );
        }
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::ActivateSession(SessionId(2)),
        );

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::CloseSession(SessionId(2)),
        );

        assert!(state.session(SessionId(3)).unwrap().is_active);
        assert!(!state.session(SessionId(1)).unwrap().is_active);

        let err = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::CloseSession(SessionId(2)),
        );
        assert_eq!(err, Err(ReducerError::SessionNotFound(SessionId(2))));
    }

    #[test]
    fn unknown_window_actions_leave_state_untouched() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let a = open(&mut state, &mut interaction);
        let before = state.clone();
        let missing = WindowId(99);

        let actions = [
            DesktopAction::ActivateWindow(missing),
            DesktopAction::MinimizeWindow(missing),
            DesktopAction::RestoreWindow(missing),
            DesktopAction::CloseWindow(missing),
            DesktopAction::ToggleTaskbarWindow(missing),
            DesktopAction::MaximizeWindow {
                window_id: missing,
                viewport: VIEWPORT,
            },
            DesktopAction::MoveWindow {
                window_id: missing,
                x: 0,
                y: 0,
            },
            DesktopAction::BeginGesture {
                window_id: missing,
                handle: GestureHandle::Move,
                pointer: PointerPosition { x: 0, y: 0 },
            },
        ];
        for action in actions {
            let result = reduce_desktop(&mut state, &mut interaction, action);
            assert_eq!(result, Err(ReducerError::WindowNotFound(missing)));
            assert_eq!(state, before);
        }
        assert_eq!(state.active_window_id(), Some(a));
    }

    #[test]
    fn invariants_hold_across_a_mixed_action_sequence() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let a = open(&mut state, &mut interaction);
        let b = open(&mut state, &mut interaction);
        let c = open(&mut state, &mut interaction);

        let actions = [
            DesktopAction::ActivateWindow(a),
            DesktopAction::MinimizeWindow(b),
            DesktopAction::MaximizeWindow {
                window_id: c,
                viewport: VIEWPORT,
            },
            DesktopAction::ActivateWindow(b),
            DesktopAction::MinimizeWindow(c),
            DesktopAction::CloseWindow(a),
            DesktopAction::ActivateWindow(c),
            DesktopAction::RestoreWindow(c),
        ];
        for action in actions {
            reduce(&mut state, &mut interaction, action);
            assert!(validate_invariants(&state));
        }
    }

    #[test]
    fn validate_invariants_rejects_duplicate_z() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let a = open(&mut state, &mut interaction);
        open(&mut state, &mut interaction);
        state.windows[1].z_index = state.window(a).unwrap().z_index;

        assert!(!validate_invariants(&state));
    }

    #[test]
    fn preference_actions_update_the_store() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::SetMinimizedWindowPolicy(MinimizedWindowPolicy::Hide),
        );
        reduce(&mut state, &mut interaction, DesktopAction::SetMoveClamping(true));

        assert_eq!(
            state.preferences.top_bar_minimized,
            MinimizedWindowPolicy::Hide
        );
        assert!(state.preferences.clamp_moves_to_viewport);
    }
}
