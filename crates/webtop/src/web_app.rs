//! Top-level application component: wires built-in surface content into the
//! shell runtime and mounts the desktop.

use std::cell::Cell;
use std::rc::Rc;

use leptos::*;
use shell_runtime::{
    use_desktop_runtime, DesktopProvider, DesktopShell, SurfaceKind, SurfaceRegistry,
};
use surface_contract::{
    IconKind, SurfaceContent, SurfaceMountContext, TerminalSessionDescriptor,
    TerminalSessionSource,
};

/// Minimal built-in surface: a static pane identifying the surface kind.
/// Real applications replace these with full content providers.
struct PaneSurface {
    title: &'static str,
    icon_kind: IconKind,
    blurb: &'static str,
}

impl SurfaceContent for PaneSurface {
    fn title(&self) -> String {
        self.title.to_string()
    }

    fn icon_kind(&self) -> IconKind {
        self.icon_kind
    }

    fn mount(&self, ctx: SurfaceMountContext) -> View {
        let title = self.title;
        let blurb = self.blurb;
        let surface_id = ctx.surface_id;

        view! {
            <div class="pane-surface" data-surface-id=surface_id.to_string()>
                <h2>{title}</h2>
                <p>{blurb}</p>
            </div>
        }
        .into_view()
    }
}

/// Demo terminal source: numbers its sessions and renders a static prompt.
/// A real shell backend replaces this with a process-backed source.
struct DemoSessionSource {
    next_session: Cell<u64>,
}

impl TerminalSessionSource for DemoSessionSource {
    fn descriptor(&self) -> TerminalSessionDescriptor {
        let session_id = self.next_session.get();
        self.next_session.set(session_id + 1);
        TerminalSessionDescriptor {
            session_id,
            title: format!("sh {session_id}"),
        }
    }

    fn mount(&self) -> View {
        view! {
            <pre class="terminal-surface">"webtop $ "</pre>
        }
        .into_view()
    }
}

/// Terminal surface: registers a taskbar session on mount and hosts the
/// session source's view.
struct TerminalSurface {
    source: Rc<DemoSessionSource>,
}

impl SurfaceContent for TerminalSurface {
    fn title(&self) -> String {
        "Terminal".to_string()
    }

    fn icon_kind(&self) -> IconKind {
        IconKind::Terminal
    }

    fn mount(&self, _ctx: SurfaceMountContext) -> View {
        let runtime = use_desktop_runtime();
        runtime.open_session_from(self.source.as_ref());
        self.source.mount()
    }
}

fn builtin_surfaces() -> SurfaceRegistry {
    SurfaceRegistry::default()
        .register(
            SurfaceKind::Terminal,
            Rc::new(TerminalSurface {
                source: Rc::new(DemoSessionSource {
                    next_session: Cell::new(1),
                }),
            }),
        )
        .register(
            SurfaceKind::TextEditor,
            Rc::new(PaneSurface {
                title: "Editor",
                icon_kind: IconKind::Editor,
                blurb: "A scratch buffer for plain text.",
            }),
        )
        .register(
            SurfaceKind::EnvEditor,
            Rc::new(PaneSurface {
                title: "Environment",
                icon_kind: IconKind::Settings,
                blurb: "Edit environment presets for new sessions.",
            }),
        )
        .register(
            SurfaceKind::ImageViewer,
            Rc::new(PaneSurface {
                title: "Viewer",
                icon_kind: IconKind::Image,
                blurb: "Preview images from the virtual file tree.",
            }),
        )
}

#[component]
pub fn WebtopApp() -> impl IntoView {
    view! {
        <main class="webtop-root">
            <DesktopProvider surfaces=builtin_surfaces()>
                <DesktopShell />
            </DesktopProvider>
        </main>
    }
}
