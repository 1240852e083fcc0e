use super::api;
use crate::shared::cookie::DocumentCookieStore;
use crate::shared::dom_form;
use contracts::shared::form_state::{FormControl, FormView};
use contracts::usecases::u601_generate_sources::fields::SCHEMA_FIELD;
use contracts::usecases::u601_generate_sources::{
    ArchiveLink, FormController, GeneratorAction, PreviewSource,
};
use leptos::html::Form;
use leptos::prelude::*;

/// The generator form as seen by the controller.
///
/// Control values live in the DOM; error indicators and alerts are signals
/// rendered by the page.
#[derive(Clone, Copy)]
pub struct PageFormView {
    pub form_ref: NodeRef<Form>,
    pub errors: RwSignal<Vec<String>>,
    pub alerts: RwSignal<Vec<String>>,
}

impl PageFormView {
    pub fn new() -> Self {
        Self {
            form_ref: NodeRef::new(),
            errors: RwSignal::new(Vec::new()),
            alerts: RwSignal::new(Vec::new()),
        }
    }

    pub fn has_error(&self, field_id: &'static str) -> Signal<bool> {
        let errors = self.errors;
        Signal::derive(move || errors.get().iter().any(|f| f == field_id))
    }

    pub fn dismiss_alert(&self, index: usize) {
        self.alerts.update(|alerts| {
            if index < alerts.len() {
                alerts.remove(index);
            }
        });
    }
}

impl Default for PageFormView {
    fn default() -> Self {
        Self::new()
    }
}

impl FormView for PageFormView {
    fn controls(&self) -> Vec<FormControl> {
        self.form_ref
            .get_untracked()
            .map(|form| dom_form::read_controls(&form))
            .unwrap_or_default()
    }

    fn set_control_value(&self, id: usize, value: &str) {
        let Some(form) = self.form_ref.get_untracked() else {
            return;
        };
        if let Err(e) = dom_form::set_value(&form, id, value) {
            log::warn!("{}", e);
        }
    }

    fn set_control_checked(&self, id: usize, checked: bool) {
        let Some(form) = self.form_ref.get_untracked() else {
            return;
        };
        if let Err(e) = dom_form::set_checked(&form, id, checked) {
            log::warn!("{}", e);
        }
    }

    fn set_error_state(&self, field_id: &str, error: bool) {
        self.errors.update(|errors| {
            errors.retain(|f| f != field_id);
            if error {
                errors.push(field_id.to_string());
            }
        });
    }

    fn show_alert(&self, message: &str) {
        self.alerts.update(|alerts| alerts.push(message.to_string()));
    }
}

/// ViewModel for the generator page
#[derive(Clone)]
pub struct GenerateSourcesViewModel {
    pub page: PageFormView,
    /// Содержимое редактора схемы
    pub schema_text: RwSignal<String>,
    /// Действие, запрос которого сейчас выполняется
    pub busy: RwSignal<Option<GeneratorAction>>,
    pub preview: RwSignal<Option<PreviewSource>>,
    pub archive: RwSignal<Option<ArchiveLink>>,
    controller: FormController<PageFormView, DocumentCookieStore>,
}

impl GenerateSourcesViewModel {
    pub fn new() -> Self {
        let page = PageFormView::new();
        Self {
            page,
            schema_text: RwSignal::new(String::new()),
            busy: RwSignal::new(None),
            preview: RwSignal::new(None),
            archive: RwSignal::new(None),
            controller: FormController::new(page, DocumentCookieStore::form_state()),
        }
    }

    pub fn is_busy(&self, action: GeneratorAction) -> impl Fn() -> bool + Send + Sync + 'static {
        let busy = self.busy;
        move || busy.get() == Some(action)
    }

    /// Restores the persisted form state. Runs once the form is mounted.
    pub fn restore_command(&self) {
        self.controller.restore();
    }

    pub fn field_input(&self, field_id: &str, value: &str) {
        self.controller.validate_field(field_id, value);
    }

    pub fn schema_input(&self, text: String) {
        self.schema_text.set(text);
        // Ссылка относится к схеме, по которой архив был собран
        if self.archive.get_untracked().is_some() {
            self.archive.set(None);
        }
    }

    /// Копирует текст редактора в скрытое поле `schema`
    fn sync_schema_field(&self) {
        let text = self.schema_text.get_untracked();
        self.page
            .controls()
            .iter()
            .filter(|control| control.name == SCHEMA_FIELD)
            .for_each(|control| self.page.set_control_value(control.id, &text));
    }

    /// Persists the form and sends it to the generator.
    pub fn submit_command(&self, action: GeneratorAction) {
        if self.busy.get_untracked().is_some() {
            return;
        }

        self.page.alerts.set(Vec::new());
        if action == GeneratorAction::Archive {
            self.archive.set(None);
        }
        self.sync_schema_field();

        let request = self.controller.prepare_submission(action);
        log::debug!("submitting {:?} to {}", action, request.endpoint());
        self.busy.set(Some(action));

        let busy = self.busy;
        let preview = self.preview;
        let archive = self.archive;
        let controller = self.controller.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let result = api::submit(&request).await;
            busy.set(None);
            match result {
                Ok(text) => match action {
                    GeneratorAction::Preview => preview.set(Some(PreviewSource { text })),
                    GeneratorAction::Archive => {
                        archive.set(Some(ArchiveLink::from_payload(&request.class_name, &text)))
                    }
                },
                Err(e) => controller.report_failure(&e),
            }
        });
    }

    pub fn close_preview(&self) {
        self.preview.set(None);
    }
}

impl Default for GenerateSourcesViewModel {
    fn default() -> Self {
        Self::new()
    }
}
