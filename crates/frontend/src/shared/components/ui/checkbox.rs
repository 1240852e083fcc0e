use leptos::prelude::*;

/// Named checkbox that keeps its own checked state
#[component]
pub fn Checkbox(
    /// Form field name, also used as the element id
    #[prop(into)]
    name: String,
    /// Label text
    #[prop(into)]
    label: String,
    /// Value submitted when checked
    #[prop(optional, into)]
    value: MaybeProp<String>,
    /// Initial checked state
    #[prop(optional)]
    checked: bool,
) -> impl IntoView {
    let submitted = value.get().unwrap_or_else(|| "true".to_string());

    view! {
        <div class="form__checkbox-wrapper">
            <input
                id=name.clone()
                name=name.clone()
                type="checkbox"
                class="form__checkbox"
                value=submitted
                checked=checked
            />
            <label class="form__checkbox-label" for=name>
                {label}
            </label>
        </div>
    }
}
