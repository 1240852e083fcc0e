use leptos::prelude::*;

/// Action button with variants (primary, secondary) and a busy state
#[component]
pub fn Button(
    /// Button variant: "primary" (default) or "secondary"
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
    /// Disabled state (reactive)
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    /// Shows `busy_label` instead of the children while true
    #[prop(optional, into)]
    busy: MaybeProp<bool>,
    /// Label shown while busy
    #[prop(optional, into)]
    busy_label: MaybeProp<String>,
    /// Click event handler
    #[prop(optional)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    /// Button children (content)
    children: ChildrenFn,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("primary") {
        "secondary" => "button--secondary",
        _ => "button--primary",
    };
    let is_busy = move || busy.get().unwrap_or(false);
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <button
            type="button"
            class=move || {
                let busy_class = if is_busy() { "button--busy" } else { "" };
                format!("button {} {} {}", variant_class(), busy_class, additional_class())
            }
            disabled=move || is_busy() || disabled.get().unwrap_or(false)
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {move || {
                if is_busy() {
                    busy_label.get().unwrap_or_default().into_any()
                } else {
                    children().into_any()
                }
            }}
        </button>
    }
}
