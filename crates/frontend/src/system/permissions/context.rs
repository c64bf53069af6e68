use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use super::state::{LoadOnce, PermissionSet, PermissionState};
use crate::shared::query_params::EntryParams;

/// Permission state of the current session.
#[derive(Clone, Copy)]
pub struct PermissionContext {
    state: RwSignal<PermissionState>,
}

impl PermissionContext {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(PermissionState::Pending),
        }
    }

    /// Tracked check; `false` until the set is loaded.
    pub fn has_permission(&self, code: &str) -> bool {
        self.state.with(|state| state.has_permission(code))
    }

    pub fn is_pending(&self) -> bool {
        self.state.with(|state| state.is_pending())
    }

    fn set(&self, state: PermissionState) {
        self.state.set(state);
    }
}

impl Default for PermissionContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Loads the session permissions once and provides [`PermissionContext`].
#[component]
pub fn PermissionProvider(children: Children) -> impl IntoView {
    let ctx = PermissionContext::new();
    let load_once = StoredValue::new(LoadOnce::new());
    provide_context(ctx);

    Effect::new(move |_| {
        if !load_once.with_value(|flag| flag.try_begin()) {
            return;
        }

        let entry = EntryParams::current();
        let Some(user_id) = entry.user_id() else {
            log::warn!("No valid idUsuario in the entry URL; permissions unavailable");
            ctx.set(PermissionState::Unavailable);
            return;
        };
        let tenant = entry.tenant().map(str::to_string);

        spawn_local(async move {
            match api::find_permissions(user_id, tenant.as_deref()).await {
                Ok(codes) => {
                    let set = PermissionSet::from_codes(codes);
                    log::info!("Loaded {} permissions for user {}", set.len(), user_id);
                    ctx.set(PermissionState::Loaded(set));
                }
                Err(e) => {
                    log::error!("Failed to load permissions for user {}: {}", user_id, e);
                    ctx.set(PermissionState::Unavailable);
                }
            }
        });
    });

    children()
}

pub fn use_permissions() -> PermissionContext {
    use_context::<PermissionContext>().expect("PermissionProvider not found in component tree")
}
