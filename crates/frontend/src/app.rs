use crate::usecases::u601_generate_sources::GenerateSourcesPage;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <GenerateSourcesPage />
    }
}
