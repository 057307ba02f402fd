//! Collapsible side dock: the second taskbar variant.
//!
//! The dock always lists minimized windows regardless of the top-bar policy,
//! and a plain click activates rather than toggles.

use leptos::ev::MouseEvent;
use leptos::*;
use shell_ui::{DockRail, Icon, IconGlyph, IconSize, TaskbarSection};

use crate::components::{icon_glyph, stop_mouse_event};
use crate::presenter::{taskbar_entries, TaskbarEntry, TaskbarTarget};
use crate::reducer::DesktopAction;
use crate::runtime_context::use_desktop_runtime;

#[component]
/// Edge-docked rail listing every window and session.
pub fn SideDock() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let entries = create_memo(move |_| runtime.state.with(taskbar_entries));
    let (expanded, set_expanded) = create_signal(true);

    view! {
        <DockRail aria_label="Window dock" expanded=expanded>
            <button
                type="button"
                class="ui-dock-toggle"
                aria-label=move || if expanded.get() { "Collapse dock" } else { "Expand dock" }
                on:click=move |_| set_expanded.update(|e| *e = !*e)
            >
                {move || {
                    let icon = if expanded.get() {
                        IconGlyph::ChevronRight
                    } else {
                        IconGlyph::ChevronLeft
                    };
                    view! { <Icon icon=icon size=IconSize::Sm/> }
                }}
            </button>
            <TaskbarSection ui_slot="entries" role="list" aria_label="Dock entries">
                <For each=move || entries.get() key=|entry| entry.target let:entry>
                    <DockEntry entry=entry/>
                </For>
            </TaskbarSection>
        </DockRail>
    }
}

#[component]
fn DockEntry(entry: TaskbarEntry) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let target = entry.target;
    let close_label = format!("Close {}", entry.title);

    let on_activate = move |_ev: MouseEvent| {
        let action = match target {
            TaskbarTarget::Window(window_id) => DesktopAction::ActivateWindow(window_id),
            TaskbarTarget::Session(session_id) => DesktopAction::ActivateSession(session_id),
        };
        runtime.dispatch_action(action);
    };
    let on_close = move |ev: MouseEvent| {
        stop_mouse_event(&ev);
        let action = match target {
            TaskbarTarget::Window(window_id) => DesktopAction::CloseWindow(window_id),
            TaskbarTarget::Session(session_id) => DesktopAction::CloseSession(session_id),
        };
        runtime.dispatch_action(action);
    };

    view! {
        <div
            class="ui-dock-entry"
            role="listitem"
            data-icon-kind=entry.icon_kind.token()
            data-ui-active={if entry.is_active { "true" } else { "false" }}
            data-ui-minimized={if entry.is_minimized { "true" } else { "false" }}
        >
            <button
                type="button"
                class="ui-dock-activate"
                title=entry.title.clone()
                on:click=on_activate
            >
                <Icon icon=icon_glyph(entry.icon_kind) size=IconSize::Sm/>
                <span class="ui-dock-title">{entry.title}</span>
            </button>
            <button
                type="button"
                class="ui-dock-close"
                aria-label=close_label
                on:click=on_close
            >
                <Icon icon=IconGlyph::Dismiss size=IconSize::Xs/>
            </button>
        </div>
    }
}
