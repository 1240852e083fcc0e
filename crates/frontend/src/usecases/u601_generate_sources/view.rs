use super::view_model::GenerateSourcesViewModel;
use crate::shared::components::ui::{Button, Checkbox, RadioGroup, TextField, Textarea};
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u601_generate_sources::fields::{
    AnnotationStyle, SourceType, ANNOTATION_STYLE_FIELD, CLASS_NAME_FIELD, GENERATOR_FLAGS,
    SCHEMA_FIELD, SOURCE_TYPE_FIELD, TARGET_PACKAGE_FIELD,
};
use contracts::usecases::u601_generate_sources::{ArchiveLink, GenerateSources, GeneratorAction};
use leptos::prelude::*;

#[component]
pub fn GenerateSourcesPage() -> impl IntoView {
    let vm = GenerateSourcesViewModel::new();
    let page = vm.page;

    // Restore the persisted state once, as soon as the form is in the DOM.
    {
        let vm = vm.clone();
        Effect::new(move |restored: Option<bool>| {
            if restored == Some(true) {
                return true;
            }
            if page.form_ref.get().is_some() {
                vm.restore_command();
                true
            } else {
                false
            }
        });
    }

    let source_types: Vec<(&'static str, &'static str)> = SourceType::all()
        .iter()
        .map(|t| (t.as_str(), t.display_name()))
        .collect();
    let annotation_styles: Vec<(&'static str, &'static str)> = AnnotationStyle::all()
        .iter()
        .map(|s| (s.as_str(), s.display_name()))
        .collect();

    let flags = GENERATOR_FLAGS
        .iter()
        .map(|flag| view! { <Checkbox name=flag.name label=flag.label checked=flag.default_on /> })
        .collect_view();

    let any_busy = {
        let busy = vm.busy;
        move || busy.get().is_some()
    };
    let archive = vm.archive;
    let preview = vm.preview;
    let preview_vm = vm.clone();

    view! {
        <div class="page" id="u601_generate_sources--usecase" data-page-category="usecase">
            <div class="page__header">
                <h1>{GenerateSources::display_name()}</h1>
                <p class="page__subtitle">{GenerateSources::description()}</p>
            </div>

            <div class="page__content">
                <div id="alert-area">
                    {move || {
                        page.alerts
                            .get()
                            .into_iter()
                            .enumerate()
                            .map(|(index, message)| view! {
                                <div class="alert alert--error">
                                    {icon("alert")}
                                    <span class="alert__message">{message}</span>
                                    <button
                                        type="button"
                                        class="alert__close"
                                        on:click=move |_| page.dismiss_alert(index)
                                    >
                                        {icon("x")}
                                    </button>
                                </div>
                            })
                            .collect_view()
                    }}
                </div>

                <form
                    id="form"
                    node_ref=page.form_ref
                    on:submit=|ev: leptos::ev::SubmitEvent| ev.prevent_default()
                >
                    <input type="hidden" name=SCHEMA_FIELD />

                    <Textarea
                        id="schema-editor"
                        label="JSON Schema or example JSON"
                        class="schema-editor"
                        rows=20
                        value=vm.schema_text
                        on_input=Callback::new({
                            let vm = vm.clone();
                            move |text: String| vm.schema_input(text)
                        })
                    />

                    <TextField
                        name=CLASS_NAME_FIELD
                        label="Class name"
                        placeholder="MyClass"
                        error=page.has_error(CLASS_NAME_FIELD)
                        error_hint="Letters, digits, '_' and '$' only"
                        on_input=Callback::new({
                            let vm = vm.clone();
                            move |value: String| vm.field_input(CLASS_NAME_FIELD, &value)
                        })
                    />

                    <TextField
                        name=TARGET_PACKAGE_FIELD
                        label="Package"
                        placeholder="com.example"
                        error=page.has_error(TARGET_PACKAGE_FIELD)
                        error_hint="Letters, digits, '_', '$' and '.' only"
                        on_input=Callback::new({
                            let vm = vm.clone();
                            move |value: String| vm.field_input(TARGET_PACKAGE_FIELD, &value)
                        })
                    />

                    <RadioGroup
                        label="Source type"
                        name=SOURCE_TYPE_FIELD
                        options=source_types
                        selected=SourceType::default().as_str()
                    />

                    <RadioGroup
                        label="Annotation style"
                        name=ANNOTATION_STYLE_FIELD
                        options=annotation_styles
                        selected=AnnotationStyle::default().as_str()
                    />

                    <div class="form__group form__flags">
                        {flags}
                    </div>

                    <div class="form__actions">
                        <Button
                            variant="secondary"
                            busy=Signal::derive(vm.is_busy(GeneratorAction::Preview))
                            busy_label=GeneratorAction::Preview.busy_label()
                            disabled=Signal::derive(any_busy)
                            on_click=Callback::new({
                                let vm = vm.clone();
                                move |_| vm.submit_command(GeneratorAction::Preview)
                            })
                        >
                            {icon("eye")}
                            {GeneratorAction::Preview.label()}
                        </Button>

                        <Button
                            busy=Signal::derive(vm.is_busy(GeneratorAction::Archive))
                            busy_label=GeneratorAction::Archive.busy_label()
                            disabled=Signal::derive(any_busy)
                            on_click=Callback::new({
                                let vm = vm.clone();
                                move |_| vm.submit_command(GeneratorAction::Archive)
                            })
                        >
                            {GeneratorAction::Archive.label()}
                        </Button>

                        {move || archive.get().map(|link| {
                            let ArchiveLink { href, file_name } = link;
                            let download = file_name.clone();
                            view! {
                                <a class="download-link" href=href download=download>
                                    {icon("download")}
                                    {file_name}
                                </a>
                            }
                        })}
                    </div>
                </form>
            </div>

            {move || {
                let vm = preview_vm.clone();
                preview.get().map(|source| view! {
                    <Modal title="Preview" on_close=Callback::new(move |_| vm.close_preview())>
                        <pre class="preview"><code>{source.text}</code></pre>
                    </Modal>
                })
            }}
        </div>
    }
}
