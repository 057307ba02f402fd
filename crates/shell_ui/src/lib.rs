//! Shared Leptos primitives for the desktop shell chrome.
//!
//! The crate owns the reusable structural components (desktop root, window
//! frame, taskbar strip, side dock) and a small icon catalog behind a stable
//! `data-ui-*` DOM contract consumed by the shell CSS layers. Shell code
//! composes these primitives instead of emitting ad hoc structural markup.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod icon;
mod primitives;

pub use icon::{Icon, IconGlyph, IconSize};
pub use primitives::{
    DesktopBackdrop, DesktopIconButton, DesktopIconGrid, DesktopRoot, DesktopWindowLayer,
    DockRail, ResizeHandle, TaskbarSection, TaskbarStrip, WindowBody, WindowControls, WindowFrame,
    WindowTitle, WindowTitleBar,
};
