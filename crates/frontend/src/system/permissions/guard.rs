use leptos::prelude::*;

use super::context::use_permissions;
use crate::shared::components::loader::Loader;

/// Blocking overlay shown over content the user may not see.
#[component]
pub fn NotAllowed(children: Children) -> impl IntoView {
    view! {
        <div class="not-allowed">
            <div class="not-allowed__content" aria-hidden="true">
                {children()}
            </div>
            <div class="not-allowed__overlay">
                <span class="not-allowed__message">
                    "Você não tem permissão para visualizar estas informações."
                </span>
            </div>
        </div>
    }
}

/// Renders `children` only with `permission`; otherwise `fallback` under the overlay.
/// While the session permissions are loading a spinner is shown instead.
#[component]
pub fn RequirePermission(
    permission: &'static str,
    #[prop(optional, into)] fallback: ViewFn,
    children: ChildrenFn,
) -> impl IntoView {
    let permissions = use_permissions();
    let fallback = StoredValue::new(fallback);
    let children = StoredValue::new(children);

    move || {
        if permissions.is_pending() {
            view! { <Loader /> }.into_any()
        } else if permissions.has_permission(permission) {
            children.with_value(|c| c()).into_any()
        } else {
            view! { <NotAllowed>{fallback.with_value(|f| f.run())}</NotAllowed> }.into_any()
        }
    }
}
