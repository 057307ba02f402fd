//! Reactive runtime context wiring the reducer to Leptos signals.

use std::rc::Rc;

use leptos::*;
use surface_contract::{SurfaceContent, SurfaceMountContext, TerminalSessionSource};

use crate::host::ShellHostContext;
use crate::model::{DesktopState, InteractionState, SessionKind, SurfaceKind};
use crate::reducer::{reduce_desktop, DesktopAction};

#[derive(Clone, Default)]
/// Maps surface kinds to the content providers that render inside windows.
pub struct SurfaceRegistry {
    providers: Vec<(SurfaceKind, Rc<dyn SurfaceContent>)>,
}

impl SurfaceRegistry {
    /// Registers a content provider for a surface kind. A later registration
    /// for the same kind wins.
    pub fn register(mut self, kind: SurfaceKind, provider: Rc<dyn SurfaceContent>) -> Self {
        self.providers.retain(|(k, _)| *k != kind);
        self.providers.push((kind, provider));
        self
    }

    /// Looks up the provider for a surface kind.
    pub fn provider(&self, kind: SurfaceKind) -> Option<Rc<dyn SurfaceContent>> {
        self.providers
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, provider)| provider.clone())
    }

    /// Mounts the provider's view for a window, if one is registered.
    pub fn mount(&self, kind: SurfaceKind, ctx: SurfaceMountContext) -> Option<View> {
        self.provider(kind).map(|provider| provider.mount(ctx))
    }
}

#[derive(Clone, Copy)]
/// Shared desktop runtime handle provided to every shell component.
pub struct DesktopRuntimeContext {
    /// Host capabilities and observers.
    pub host: StoredValue<ShellHostContext>,
    /// The window entity store.
    pub state: RwSignal<DesktopState>,
    /// Ephemeral gesture/preview state.
    pub interaction: RwSignal<InteractionState>,
    /// Surface content providers.
    pub surfaces: StoredValue<SurfaceRegistry>,
    /// Dispatches an action through the reducer.
    pub dispatch: Callback<DesktopAction>,
}

impl DesktopRuntimeContext {
    /// Convenience wrapper over the dispatch callback.
    pub fn dispatch_action(&self, action: DesktopAction) {
        self.dispatch.call(action);
    }

    /// Registers a terminal session from an opaque source so it participates
    /// in taskbar aggregation.
    pub fn open_session_from(&self, source: &dyn TerminalSessionSource) {
        let descriptor = source.descriptor();
        self.dispatch_action(DesktopAction::OpenSession {
            kind: SessionKind::Terminal,
            title: descriptor.title,
        });
    }
}

/// Fetches the runtime context installed by [`DesktopProvider`].
///
/// # Panics
/// Panics when called outside a `DesktopProvider` subtree.
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>()
        .expect("desktop runtime context missing; wrap the tree in <DesktopProvider>")
}

#[component]
/// Installs the desktop runtime into context for the component tree below.
pub fn DesktopProvider(
    /// Host integration; defaults to an inert host.
    #[prop(optional)]
    host: Option<ShellHostContext>,
    /// Surface content providers; defaults to an empty registry.
    #[prop(optional)]
    surfaces: Option<SurfaceRegistry>,
    children: Children,
) -> impl IntoView {
    let host = store_value(host.unwrap_or_default());
    let surfaces = store_value(surfaces.unwrap_or_default());
    let state = create_rw_signal(DesktopState::default());
    let interaction = create_rw_signal(InteractionState::default());

    let dispatch = Callback::new(move |action: DesktopAction| {
        let mut next_state = state.get_untracked();
        let mut next_interaction = interaction.get_untracked();
        match reduce_desktop(&mut next_state, &mut next_interaction, action) {
            Ok(effects) => {
                // Pointer-move storms mostly touch interaction state; only
                // write the store signal when the store actually changed.
                if next_state != state.get_untracked() {
                    state.set(next_state);
                }
                if next_interaction != interaction.get_untracked() {
                    interaction.set(next_interaction);
                }
                host.with_value(|host| {
                    for effect in effects {
                        host.run_runtime_effect(effect);
                    }
                });
            }
            Err(error) => logging::warn!("desktop action rejected: {error}"),
        }
    });

    provide_context(DesktopRuntimeContext {
        host,
        state,
        interaction,
        surfaces,
        dispatch,
    });

    children()
}
