//! Top bar: sidebar toggle and the title of the open page.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::shared::query_params::EntryParams;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let toggle_sidebar = move |_| {
        ctx.toggle_left();
    };

    let is_sidebar_visible = move || ctx.left_open.get();
    let tenant = EntryParams::current().tenant().map(str::to_string);

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=toggle_sidebar
                    title=move || if is_sidebar_visible() { "Ocultar menu" } else { "Mostrar menu" }
                >
                    {icon("menu")}
                </button>
                <span class="top-header__title">{move || ctx.active.get().title()}</span>
            </div>

            <div class="top-header__actions">
                {tenant.map(|name| view! { <span class="top-header__tenant">{name}</span> })}
            </div>
        </div>
    }
}
