//! Shared contract types between the desktop window/taskbar manager and the
//! content it hosts.
//!
//! The manager owns geometry, stacking, and lifecycle for every open surface;
//! it treats window bodies as opaque views supplied by a [`SurfaceContent`]
//! provider and terminal sessions as opaque stream surfaces supplied by a
//! [`TerminalSessionSource`]. Nothing in this crate can reach back into
//! window geometry or stacking state.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use leptos::View;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Stable identifier for a manager-owned window, as seen by content providers.
pub type SurfaceRuntimeId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Semantic icon class for a taskbar entry or window chrome.
pub enum IconKind {
    /// Terminal session surface.
    Terminal,
    /// Text/content editor surface.
    Editor,
    /// File listing surface.
    Files,
    /// Configuration editor surface.
    Settings,
    /// Image/preview surface.
    Image,
    /// Anything without a more specific class.
    Generic,
}

impl IconKind {
    /// Stable token used for CSS hooks and debugging.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Terminal => "terminal",
            Self::Editor => "editor",
            Self::Files => "files",
            Self::Settings => "settings",
            Self::Image => "image",
            Self::Generic => "generic",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Mount-time context handed to a content provider when its window body is
/// first rendered.
pub struct SurfaceMountContext {
    /// Window hosting the content.
    pub surface_id: SurfaceRuntimeId,
    /// Opaque launch payload carried through from the open request.
    pub launch_params: Value,
}

/// Per-window content provider.
///
/// Supplies the rendered body plus a stable title/icon for taskbar
/// aggregation. Providers never mutate window state; all window actions flow
/// through the manager's own chrome.
pub trait SurfaceContent {
    /// Stable window title.
    fn title(&self) -> String;

    /// Icon class shown in window chrome and taskbars.
    fn icon_kind(&self) -> IconKind;

    /// Renders the window body.
    fn mount(&self, ctx: SurfaceMountContext) -> View;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Identity of a terminal session participating in taskbar aggregation.
pub struct TerminalSessionDescriptor {
    /// Session identifier, unique within the source.
    pub session_id: u64,
    /// Human-readable session title.
    pub title: String,
}

/// Opaque terminal-session supplier.
///
/// The byte-stream transport behind the session (process spawn, input
/// forwarding, output delivery) is entirely the source's concern; the manager
/// only consumes the descriptor and mounts the view inside a window body.
pub trait TerminalSessionSource {
    /// Returns the session's taskbar identity.
    fn descriptor(&self) -> TerminalSessionDescriptor;

    /// Renders the session surface.
    fn mount(&self) -> View;
}
