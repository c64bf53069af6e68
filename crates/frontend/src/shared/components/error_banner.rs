use leptos::prelude::*;
use thaw::*;

/// Failed report request; the data shown below it is the last successful one.
#[component]
pub fn ErrorBanner(#[prop(into)] error: Signal<Option<String>>, on_retry: Callback<()>) -> impl IntoView {
    view! {
        {move || error.get().map(|msg| view! {
            <div class="alert alert--error" role="alert">
                <span class="alert__text">
                    <strong>"Não foi possível carregar os dados. "</strong>
                    {msg}
                </span>
                <Button
                    appearance=ButtonAppearance::Secondary
                    size=ButtonSize::Small
                    on_click=move |_| on_retry.run(())
                >
                    "Tentar novamente"
                </Button>
            </div>
        })}
    }
}
