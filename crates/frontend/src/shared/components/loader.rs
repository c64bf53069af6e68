use leptos::prelude::*;
use thaw::*;

#[component]
pub fn Loader(#[prop(optional, into)] label: MaybeProp<String>) -> impl IntoView {
    view! {
        <div class="loader">
            <Spinner />
            <span class="loader__label">
                {move || label.get().unwrap_or_else(|| "Carregando...".to_string())}
            </span>
        </div>
    }
}
