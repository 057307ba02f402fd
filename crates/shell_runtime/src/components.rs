//! Shell view layer: desktop root, icon launchers, window layer, and both
//! taskbar variants composed from `shell_ui` primitives.

pub mod dock;
pub mod taskbar;
pub mod window;

use leptos::ev::MouseEvent;
use leptos::*;
use shell_ui::{
    DesktopBackdrop, DesktopIconButton, DesktopIconGrid, DesktopRoot, DesktopWindowLayer, Icon,
    IconGlyph, IconSize,
};
use surface_contract::IconKind;

use crate::host::desktop_viewport_rect;
use crate::model::{OpenSurfaceRequest, PointerPosition, ResizeEdge, SurfaceKind};
use crate::reducer::DesktopAction;
use crate::runtime_context::use_desktop_runtime;

use self::dock::SideDock;
use self::taskbar::TopTaskbar;
use self::window::DesktopWindow;

/// Height of the top taskbar strip; the desktop viewport starts below it.
pub const TASKBAR_HEIGHT_PX: i32 = 36;

/// Surface kinds offered as desktop launchers, in display order.
const LAUNCHERS: [SurfaceKind; 4] = [
    SurfaceKind::Terminal,
    SurfaceKind::TextEditor,
    SurfaceKind::EnvEditor,
    SurfaceKind::ImageViewer,
];

pub(crate) fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

pub(crate) fn stop_mouse_event(ev: &MouseEvent) {
    ev.stop_propagation();
}

/// CSS edge token for a resize handle.
pub(crate) fn resize_edge_class(edge: ResizeEdge) -> &'static str {
    match edge {
        ResizeEdge::North => "edge-n",
        ResizeEdge::South => "edge-s",
        ResizeEdge::East => "edge-e",
        ResizeEdge::West => "edge-w",
        ResizeEdge::NorthEast => "edge-ne",
        ResizeEdge::NorthWest => "edge-nw",
        ResizeEdge::SouthEast => "edge-se",
        ResizeEdge::SouthWest => "edge-sw",
    }
}

/// Icon glyph rendered for a surface icon class.
pub(crate) fn icon_glyph(kind: IconKind) -> IconGlyph {
    match kind {
        IconKind::Terminal => IconGlyph::Terminal,
        IconKind::Editor => IconGlyph::DocumentText,
        IconKind::Files => IconGlyph::Folder,
        IconKind::Settings => IconGlyph::Settings,
        IconKind::Image => IconGlyph::Picture,
        IconKind::Generic => IconGlyph::Window,
    }
}

#[component]
/// The full desktop shell: backdrop, launchers, window stack, and taskbars.
/// Must be rendered inside a [`crate::runtime_context::DesktopProvider`].
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();

    // The root handlers stay attached for the component's lifetime; the
    // gesture session, not listener registration, bounds the interaction.
    // EndGesture/CancelGesture destroy the session, so a later unrelated
    // pointer stream can never mutate an old gesture's window.
    let on_pointermove = Callback::new(move |ev: web_sys::PointerEvent| {
        // Only feed the reducer while a gesture is live; idle pointer motion
        // must not touch any signal.
        if runtime.interaction.with_untracked(|i| i.gesture.is_none()) {
            return;
        }
        runtime.dispatch_action(DesktopAction::UpdateGesture {
            pointer: pointer_from_pointer_event(&ev),
            viewport: desktop_viewport_rect(TASKBAR_HEIGHT_PX),
        });
    });
    let on_pointerup = Callback::new(move |_ev: web_sys::PointerEvent| {
        runtime.dispatch_action(DesktopAction::EndGesture);
    });
    let on_pointercancel = Callback::new(move |_ev: web_sys::PointerEvent| {
        runtime.dispatch_action(DesktopAction::CancelGesture);
    });

    let window_ids = move || {
        runtime
            .state
            .with(|state| state.windows.iter().map(|w| w.id).collect::<Vec<_>>())
    };

    view! {
        <DesktopRoot
            id="desktop"
            tabindex={-1}
            on_pointermove=on_pointermove
            on_pointerup=on_pointerup
            on_pointercancel=on_pointercancel
        >
            <TopTaskbar/>
            <DesktopBackdrop>
                <DesktopIconGrid>
                    {LAUNCHERS
                        .into_iter()
                        .map(|kind| view! { <SurfaceLauncher kind=kind/> })
                        .collect_view()}
                </DesktopIconGrid>
                <DesktopWindowLayer>
                    <For each=window_ids key=|id| *id let:window_id>
                        <DesktopWindow window_id=window_id/>
                    </For>
                </DesktopWindowLayer>
            </DesktopBackdrop>
            <SideDock/>
        </DesktopRoot>
    }
}

#[component]
fn SurfaceLauncher(kind: SurfaceKind) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let on_click = Callback::new(move |_ev: MouseEvent| {
        runtime.dispatch_action(DesktopAction::OpenWindow(OpenSurfaceRequest::new(kind)));
    });

    view! {
        <DesktopIconButton
            title=kind.title()
            aria_label=format!("Open {}", kind.title())
            on_click=on_click
        >
            <Icon icon=icon_glyph(kind.icon_kind()) size=IconSize::Lg/>
            <span class="launcher-label">{kind.title()}</span>
        </DesktopIconButton>
    }
}
