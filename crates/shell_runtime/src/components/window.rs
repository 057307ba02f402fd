//! One managed window: frame, chrome, resize handles, and surface content.

use leptos::ev::MouseEvent;
use leptos::*;
use shell_ui::{
    Icon, IconGlyph, IconSize, ResizeHandle, WindowBody, WindowControls, WindowFrame, WindowTitle,
    WindowTitleBar,
};
use surface_contract::SurfaceMountContext;

use crate::components::{
    icon_glyph, pointer_from_pointer_event, resize_edge_class, stop_mouse_event,
    TASKBAR_HEIGHT_PX,
};
use crate::host::desktop_viewport_rect;
use crate::model::{GestureHandle, ResizeEdge, WindowId, WindowRecord, WindowRect};
use crate::reducer::DesktopAction;
use crate::runtime_context::use_desktop_runtime;

/// Style z-index offset for maximized windows so they cover the top strip.
const MAXIMIZED_Z_BOOST: u64 = 1_000_000;

const RESIZE_EDGES: [ResizeEdge; 8] = [
    ResizeEdge::North,
    ResizeEdge::South,
    ResizeEdge::East,
    ResizeEdge::West,
    ResizeEdge::NorthEast,
    ResizeEdge::NorthWest,
    ResizeEdge::SouthEast,
    ResizeEdge::SouthWest,
];

#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    use wasm_bindgen::JsCast;

    let Some(target) = ev.target() else {
        return;
    };
    if let Ok(element) = target.dyn_into::<web_sys::Element>() {
        let _ = element.set_pointer_capture(ev.pointer_id());
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_ev: &web_sys::PointerEvent) {}

#[component]
/// Renders the window with the given id; disappears when the record closes.
pub fn DesktopWindow(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();

    let record = create_memo(move |_| {
        runtime
            .state
            .with(|state| state.window(window_id).cloned())
    });
    let is_active = create_memo(move |_| {
        runtime
            .state
            .with(|state| state.active_window_id() == Some(window_id))
    });

    // While a gesture is live the frame tracks the preview geometry; the
    // store rect is only consulted between gestures.
    let display_rect = Signal::derive(move || {
        let preview = runtime.interaction.with(|interaction| {
            interaction
                .gesture
                .filter(|gesture| gesture.window_id == window_id)
                .and(interaction.preview)
        });
        preview.or_else(|| record.with(|r| r.as_ref().map(|r| r.rect)))
    });

    move || {
        let Some(window) = record.get() else {
            return ().into_view();
        };
        view! { <WindowView window=window window_id=window_id display_rect=display_rect is_active=is_active/> }
            .into_view()
    }
}

#[component]
fn WindowView(
    window: WindowRecord,
    window_id: WindowId,
    display_rect: Signal<Option<WindowRect>>,
    is_active: Memo<bool>,
) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let maximized = window.state.is_maximized();
    let minimized = window.state.is_minimized();

    let style = {
        let z_index = window.z_index + if maximized { MAXIMIZED_Z_BOOST } else { 0 };
        Signal::derive(move || {
            let rect = display_rect.get().unwrap_or_default();
            format!(
                "left:{}px;top:{}px;width:{}px;height:{}px;z-index:{};",
                rect.x,
                rect.y + if maximized { 0 } else { TASKBAR_HEIGHT_PX },
                rect.w, rect.h, z_index,
            )
        })
    };

    let on_frame_pointerdown = Callback::new(move |_ev: web_sys::PointerEvent| {
        runtime.dispatch_action(DesktopAction::ActivateWindow(window_id));
    });
    let on_titlebar_pointerdown = Callback::new(move |ev: web_sys::PointerEvent| {
        if ev.button() != 0 {
            return;
        }
        try_set_pointer_capture(&ev);
        runtime.dispatch_action(DesktopAction::BeginGesture {
            window_id,
            handle: GestureHandle::Move,
            pointer: pointer_from_pointer_event(&ev),
        });
    });
    let on_titlebar_dblclick = Callback::new(move |_ev: MouseEvent| {
        runtime.dispatch_action(toggle_maximize_action(window_id, maximized));
    });

    let title = window.title.clone();
    let aria_label = title.clone();

    view! {
        <WindowFrame
            style=style
            aria_label=aria_label
            active=is_active
            minimized=minimized
            maximized=maximized
            on_pointerdown=on_frame_pointerdown
        >
            <WindowTitleBar
                on_pointerdown=on_titlebar_pointerdown
                on_dblclick=on_titlebar_dblclick
            >
                <WindowTitle>
                    <Icon icon=icon_glyph(window.icon_kind) size=IconSize::Md/>
                    <span class="window-title-text">{title}</span>
                </WindowTitle>
                <WindowControls>
                    <WindowControlButton
                        label="Minimize"
                        icon=IconGlyph::WindowMinimize
                        action=DesktopAction::MinimizeWindow(window_id)
                    />
                    <WindowControlButton
                        label={if maximized { "Restore" } else { "Maximize" }}
                        icon={if maximized { IconGlyph::WindowRestore } else { IconGlyph::WindowMaximize }}
                        action=toggle_maximize_action(window_id, maximized)
                    />
                    <WindowControlButton
                        label="Close"
                        icon=IconGlyph::Dismiss
                        action=DesktopAction::CloseWindow(window_id)
                    />
                </WindowControls>
            </WindowTitleBar>
            <WindowBody>
                <SurfaceMount window=window/>
            </WindowBody>
            <Show when=move || !maximized>
                {RESIZE_EDGES
                    .into_iter()
                    .map(|edge| {
                        let on_pointerdown = Callback::new(move |ev: web_sys::PointerEvent| {
                            if ev.button() != 0 {
                                return;
                            }
                            ev.stop_propagation();
                            try_set_pointer_capture(&ev);
                            runtime.dispatch_action(DesktopAction::BeginGesture {
                                window_id,
                                handle: GestureHandle::Resize(edge),
                                pointer: pointer_from_pointer_event(&ev),
                            });
                        });
                        view! { <ResizeHandle edge=resize_edge_class(edge) on_pointerdown=on_pointerdown/> }
                    })
                    .collect_view()}
            </Show>
        </WindowFrame>
    }
}

fn toggle_maximize_action(window_id: WindowId, maximized: bool) -> DesktopAction {
    if maximized {
        DesktopAction::RestoreWindow(window_id)
    } else {
        DesktopAction::MaximizeWindow {
            window_id,
            viewport: desktop_viewport_rect(TASKBAR_HEIGHT_PX),
        }
    }
}

#[component]
fn WindowControlButton(
    label: &'static str,
    icon: IconGlyph,
    action: DesktopAction,
) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let action = store_value(action);

    view! {
        <button
            type="button"
            class="ui-window-control"
            title=label
            aria-label=label
            // Controls must not start a titlebar drag or re-activate chains.
            on:pointerdown=move |ev| ev.stop_propagation()
            on:dblclick=move |ev| stop_mouse_event(&ev)
            on:click=move |ev| {
                stop_mouse_event(&ev);
                runtime.dispatch_action(action.get_value());
            }
        >
            <Icon icon=icon size=IconSize::Xs/>
        </button>
    }
}

#[component]
fn SurfaceMount(window: WindowRecord) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let ctx = SurfaceMountContext {
        surface_id: window.id.0,
        launch_params: window.launch_params.clone(),
    };
    let mounted = runtime
        .surfaces
        .with_value(|registry| registry.mount(window.kind, ctx));

    match mounted {
        Some(content) => content,
        None => view! {
            <div class="surface-placeholder">
                <Icon icon=icon_glyph(window.icon_kind) size=IconSize::Lg/>
                <p>{format!("{} has no content provider registered.", window.title)}</p>
            </div>
        }
        .into_view(),
    }
}
