use leptos::prelude::*;

/// Named text input that keeps its own value.
///
/// The value lives in the DOM so that form state restoration can write it
/// directly; `on_input` reports every change.
#[component]
pub fn TextField(
    /// Form field name, also used as the element id
    #[prop(into)]
    name: String,
    /// Label text
    #[prop(into)]
    label: String,
    /// Initial value
    #[prop(optional, into)]
    default_value: String,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Error indicator of the control group
    #[prop(optional, into)]
    error: MaybeProp<bool>,
    /// Hint shown under the input while in error
    #[prop(optional, into)]
    error_hint: MaybeProp<String>,
    /// Input event handler
    #[prop(optional)]
    on_input: Option<Callback<String>>,
) -> impl IntoView {
    let has_error = move || error.get().unwrap_or(false);
    let input_placeholder = move || placeholder.get().unwrap_or_default();

    view! {
        <div class=move || {
            if has_error() { "form__group form__group--error" } else { "form__group" }
        }>
            <label class="form__label" for=name.clone()>
                {label}
            </label>
            <input
                id=name.clone()
                name=name
                class="form__input"
                type="text"
                value=default_value
                placeholder=input_placeholder
                autocomplete="off"
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            />
            {move || {
                has_error()
                    .then(|| error_hint.get())
                    .flatten()
                    .map(|hint| view! { <span class="form__hint form__hint--error">{hint}</span> })
            }}
        </div>
    }
}
