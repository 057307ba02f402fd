//! Pure geometry math for drag-move and multi-handle resize gestures.
//!
//! Every function computes from the gesture-start snapshot plus the
//! cumulative pointer delta. Nothing here is incremental, so a long stream of
//! intermediate pointer events cannot accumulate rounding drift.

use crate::model::{GestureHandle, ResizeEdge, WindowRect};

/// Minimum allowed managed window width.
pub const MIN_WINDOW_WIDTH: i32 = 220;
/// Minimum allowed managed window height.
pub const MIN_WINDOW_HEIGHT: i32 = 140;
/// Pixels of a window that must remain inside the viewport when move
/// clamping is enabled.
pub const MOVE_KEEP_VISIBLE_PX: i32 = 48;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Which rectangle edges a resize handle drags.
pub struct EdgeSet {
    /// Left edge moves with the pointer.
    pub left: bool,
    /// Right edge moves with the pointer.
    pub right: bool,
    /// Top edge moves with the pointer.
    pub top: bool,
    /// Bottom edge moves with the pointer.
    pub bottom: bool,
}

impl From<ResizeEdge> for EdgeSet {
    fn from(edge: ResizeEdge) -> Self {
        let mut edges = Self::default();
        match edge {
            ResizeEdge::North => edges.top = true,
            ResizeEdge::South => edges.bottom = true,
            ResizeEdge::East => edges.right = true,
            ResizeEdge::West => edges.left = true,
            ResizeEdge::NorthEast => {
                edges.top = true;
                edges.right = true;
            }
            ResizeEdge::NorthWest => {
                edges.top = true;
                edges.left = true;
            }
            ResizeEdge::SouthEast => {
                edges.bottom = true;
                edges.right = true;
            }
            ResizeEdge::SouthWest => {
                edges.bottom = true;
                edges.left = true;
            }
        }
        edges
    }
}

/// Computes the candidate geometry for a gesture given the start snapshot and
/// the cumulative pointer delta.
pub fn apply_gesture(
    handle: GestureHandle,
    start: WindowRect,
    dx: i32,
    dy: i32,
    viewport: WindowRect,
    clamp_moves: bool,
) -> WindowRect {
    match handle {
        GestureHandle::Move => apply_move(start, dx, dy, viewport, clamp_moves),
        GestureHandle::Resize(edge) => apply_resize(start, edge.into(), dx, dy, viewport),
    }
}

/// Translates the start rect by the pointer delta, optionally keeping a
/// minimal portion of the window inside the viewport.
pub fn apply_move(
    start: WindowRect,
    dx: i32,
    dy: i32,
    viewport: WindowRect,
    clamp: bool,
) -> WindowRect {
    let mut rect = start.offset(dx, dy);
    if clamp {
        let min_x = viewport.x + MOVE_KEEP_VISIBLE_PX - rect.w;
        let max_x = viewport.x + viewport.w - MOVE_KEEP_VISIBLE_PX;
        rect.x = rect.x.clamp(min_x, max_x);
        let max_y = viewport.y + viewport.h - MOVE_KEEP_VISIBLE_PX;
        rect.y = rect.y.clamp(viewport.y, max_y);
    }
    rect
}

/// Applies a resize delta for the edges in `edges`.
///
/// East/south grow the dimension directly. West/north move the origin, whose
/// travel is clamped on both sides: at the viewport origin, and at the point
/// where the window reaches its minimum size. The opposite edge stays fixed,
/// so the dimension is always derived from the clamped origin movement and
/// hitting either boundary never over-shrinks or shifts the window. Both
/// axes are independent; diagonal handles are just the union of their edges.
pub fn apply_resize(
    start: WindowRect,
    edges: EdgeSet,
    dx: i32,
    dy: i32,
    viewport: WindowRect,
) -> WindowRect {
    let mut rect = start;

    if edges.right {
        rect.w = (start.w + dx).max(MIN_WINDOW_WIDTH);
    }
    if edges.left {
        let x = (start.x + dx)
            .min(start.x + start.w - MIN_WINDOW_WIDTH)
            .max(viewport.x);
        rect.w = start.x + start.w - x;
        rect.x = x;
    }
    if edges.bottom {
        rect.h = (start.h + dy).max(MIN_WINDOW_HEIGHT);
    }
    if edges.top {
        let y = (start.y + dy)
            .min(start.y + start.h - MIN_WINDOW_HEIGHT)
            .max(viewport.y);
        rect.h = start.y + start.h - y;
        rect.y = y;
    }

    // Growth past the viewport is absorbed by the dimension; the origin is
    // never pushed back to compensate.
    if rect.x + rect.w > viewport.x + viewport.w {
        rect.w = (viewport.x + viewport.w - rect.x).max(MIN_WINDOW_WIDTH);
    }
    if rect.y + rect.h > viewport.y + viewport.h {
        rect.h = (viewport.y + viewport.h - rect.y).max(MIN_WINDOW_HEIGHT);
    }

    rect
}
