//! Top-docked taskbar strip: one entry per window and session, plus a clock.

use std::time::Duration;

use leptos::ev::MouseEvent;
use leptos::*;
use shell_ui::{Icon, IconGlyph, IconSize, TaskbarSection, TaskbarStrip};

use crate::components::{icon_glyph, stop_mouse_event};
use crate::presenter::{top_bar_entries, TaskbarEntry, TaskbarTarget};
use crate::reducer::DesktopAction;
use crate::runtime_context::use_desktop_runtime;

#[component]
/// The top strip. Clicking an entry toggles windows (minimize when active,
/// activate otherwise) and selects sessions.
pub fn TopTaskbar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let entries = create_memo(move |_| runtime.state.with(top_bar_entries));

    view! {
        <TaskbarStrip aria_label="Open windows">
            <TaskbarSection ui_slot="entries" role="list" aria_label="Taskbar entries">
                <For each=move || entries.get() key=|entry| entry.target let:entry>
                    <TaskbarButton entry=entry/>
                </For>
            </TaskbarSection>
            <TaskbarSection ui_slot="clock" aria_label="Clock">
                <TaskbarClock/>
            </TaskbarSection>
        </TaskbarStrip>
    }
}

#[component]
pub(crate) fn TaskbarButton(entry: TaskbarEntry) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let target = entry.target;
    let close_label = format!("Close {}", entry.title);

    let on_activate = move |_ev: MouseEvent| {
        let action = match target {
            TaskbarTarget::Window(window_id) => DesktopAction::ToggleTaskbarWindow(window_id),
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
            class="ui-taskbar-entry"
            role="listitem"
            data-icon-kind=entry.icon_kind.token()
            data-ui-active={if entry.is_active { "true" } else { "false" }}
            data-ui-minimized={if entry.is_minimized { "true" } else { "false" }}
        >
            <button
                type="button"
                class="ui-taskbar-activate"
                title=entry.title.clone()
                on:click=on_activate
            >
                <Icon icon=icon_glyph(entry.icon_kind) size=IconSize::Sm/>
                <span class="ui-taskbar-title">{entry.title}</span>
            </button>
            <button
                type="button"
                class="ui-taskbar-close"
                aria-label=close_label
                on:click=on_close
            >
                <Icon icon=IconGlyph::Dismiss size=IconSize::Xs/>
            </button>
        </div>
    }
}

fn clock_label() -> String {
    let now = js_sys::Date::new_0();
    format!("{:02}:{:02}", now.get_hours(), now.get_minutes())
}

#[component]
fn TaskbarClock() -> impl IntoView {
    let (label, set_label) = create_signal(clock_label());

    if let Ok(handle) = set_interval_with_handle(
        move || set_label.set(clock_label()),
        Duration::from_secs(15),
    ) {
        on_cleanup(move || handle.clear());
    }

    view! { <time class="ui-taskbar-clock">{label}</time> }
}
