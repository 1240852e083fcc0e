use leptos::prelude::*;

/// Radio group whose selection lives in the DOM
#[component]
pub fn RadioGroup(
    /// Label for the group
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Name attribute (for grouping)
    #[prop(into)]
    name: String,
    /// Options: Vec of (value, label) tuples
    options: Vec<(&'static str, &'static str)>,
    /// Initially selected value
    #[prop(into)]
    selected: String,
) -> impl IntoView {
    let radios = options
        .into_iter()
        .map(|(value, text)| {
            let radio_id = format!("{}-{}", name, value);
            view! {
                <div class="form__radio-wrapper">
                    <input
                        id=radio_id.clone()
                        type="radio"
                        class="form__radio"
                        name=name.clone()
                        value=value
                        checked={selected == value}
                    />
                    <label class="form__radio-label" for=radio_id>
                        {text}
                    </label>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label">{l}</label>
            })}
            <div class="form__radio-group">
                {radios}
            </div>
        </div>
    }
}
