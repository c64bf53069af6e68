use leptos::prelude::*;

/// Title row of a report page; `children` are the actions on the right.
#[component]
pub fn PageHeader(
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="page__header">
            <div class="page__header-text">
                <h2 class="page__title">{title}</h2>
                {move || subtitle.get().map(|s| view! { <div class="page__subtitle">{s}</div> })}
            </div>
            <div class="page__header-actions">{children()}</div>
        </div>
    }
}
