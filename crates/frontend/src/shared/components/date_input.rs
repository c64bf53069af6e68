use chrono::NaiveDate;
use leptos::prelude::*;

use crate::shared::date_utils::{from_input_value, to_input_value};

/// Native date picker bound to an optional date.
/// Browser displays the value in the pt-BR locale (dd/mm/yyyy); clearing it yields `None`.
#[component]
pub fn DateInput(
    #[prop(optional, into)] label: MaybeProp<String>,
    #[prop(into)] value: Signal<Option<NaiveDate>>,
    on_change: Callback<Option<NaiveDate>>,
) -> impl IntoView {
    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! { <label class="form__label">{l}</label> })}
            <input
                type="date"
                class="form__input form__input--date"
                prop:value=move || to_input_value(value.get())
                on:change=move |ev| on_change.run(from_input_value(&event_target_value(&ev)))
            />
        </div>
    }
}
