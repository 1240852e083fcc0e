use super::fields::{self, CLASS_NAME_FIELD, NOT_PERSISTED};
use super::request::{GeneratorAction, GeneratorRequest};
use crate::shared::form_state::{self, FormSnapshot, FormView, RestoreReport};
use crate::shared::validation::{self, IdentifierRule, Validation};
use crate::usecases::common::UseCaseError;

/// Durable key-value slot holding the encoded form state.
pub trait StateStore {
    fn load(&self) -> Option<String>;

    fn save(&self, encoded: &str) -> Result<(), String>;
}

impl<T: StateStore + ?Sized> StateStore for &T {
    fn load(&self) -> Option<String> {
        (**self).load()
    }

    fn save(&self, encoded: &str) -> Result<(), String> {
        (**self).save(encoded)
    }
}

/// Behaviour of the generator page, wired to a view and a store.
///
/// Built once by the page; the view and the store are the only state it
/// touches.
#[derive(Clone)]
pub struct FormController<V, S> {
    view: V,
    store: S,
    rules: Vec<(String, IdentifierRule)>,
}

impl<V: FormView, S: StateStore> FormController<V, S> {
    pub fn new(view: V, store: S) -> Self {
        Self::with_rules(view, store, fields::default_rules())
    }

    pub fn with_rules(view: V, store: S, rules: Vec<(String, IdentifierRule)>) -> Self {
        Self { view, store, rules }
    }

    pub fn rule_for(&self, field_id: &str) -> Option<IdentifierRule> {
        self.rules
            .iter()
            .find(|(field, _)| field == field_id)
            .map(|(_, rule)| *rule)
    }

    /// Applies the stored form state, if any. Called once on page load.
    pub fn restore(&self) -> Option<RestoreReport> {
        let stored = self.store.load();
        let report = form_state::restore(&self.view, stored.as_deref(), NOT_PERSISTED)?;
        log::debug!(
            "form state restored: {} applied, {} skipped",
            report.applied,
            report.skipped.len()
        );
        Some(report)
    }

    /// Validates a governed field and toggles its error indicator.
    ///
    /// Returns `None` for fields without a rule.
    pub fn validate_field(&self, field_id: &str, value: &str) -> Option<Validation> {
        let rule = self.rule_for(field_id)?;
        let result = validation::validate(value, rule);
        self.view.set_error_state(field_id, result.is_error());
        Some(result)
    }

    /// Snapshots the live form and writes it to the store.
    ///
    /// Returns the full snapshot, excluded fields included.
    pub fn persist(&self) -> FormSnapshot {
        let snapshot = FormSnapshot::from_controls(&self.view.controls());
        let persisted = NOT_PERSISTED
            .iter()
            .fold(snapshot.clone(), |acc, field| acc.without(field));
        if let Err(e) = self.store.save(&persisted.encode()) {
            log::warn!("failed to persist form state: {}", e);
        }
        snapshot
    }

    /// Persists the form and builds the request for `action`.
    pub fn prepare_submission(&self, action: GeneratorAction) -> GeneratorRequest {
        let snapshot = self.persist();
        GeneratorRequest {
            action,
            body: snapshot.encode(),
            class_name: snapshot.get(CLASS_NAME_FIELD).unwrap_or_default().to_string(),
        }
    }

    /// Reports a failed submission in the alert area.
    pub fn report_failure(&self, error: &UseCaseError) {
        log::error!("generator request failed: {}", error);
        self.view
            .show_alert(&format!("There's a problem: {}", error.user_message()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::form_state::test_support::MemoryForm;
    use std::cell::RefCell;

    #[derive(Default)]
    struct MemoryStore {
        value: RefCell<Option<String>>,
        fail: bool,
    }

    impl StateStore for MemoryStore {
        fn load(&self) -> Option<String> {
            self.value.borrow().clone()
        }

        fn save(&self, encoded: &str) -> Result<(), String> {
            if self.fail {
                return Err("storage disabled".to_string());
            }
            *self.value.borrow_mut() = Some(encoded.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_validate_field_toggles_error_state() {
        let form = MemoryForm::generator_page();
        let store = MemoryStore::default();
        let controller = FormController::new(&form, &store);

        let result = controller.validate_field("classname", "My Class").unwrap();
        assert!(!result.valid);
        assert!(form.has_error("classname"));

        let result = controller.validate_field("classname", "MyClass").unwrap();
        assert!(result.valid);
        assert!(!form.has_error("classname"));

        assert!(controller.validate_field("targetpackage", "").unwrap().is_error());
        assert!(form.has_error("targetpackage"));
    }

    #[test]
    fn test_ungoverned_field_is_not_validated() {
        let form = MemoryForm::generator_page();
        let store = MemoryStore::default();
        let controller = FormController::new(&form, &store);

        assert_eq!(controller.validate_field("sourcetype", "json"), None);
        assert!(form.errors.borrow().is_empty());
    }

    #[test]
    fn test_persist_skips_schema() {
        let form = MemoryForm::generator_page();
        form.type_into("schema", "{\"type\": \"object\"}");
        form.type_into("classname", "My$Class");
        form.type_into("targetpackage", "com.example.pkg");
        let store = MemoryStore::default();
        let controller = FormController::new(&form, &store);

        let snapshot = controller.persist();

        assert_eq!(snapshot.get("schema"), Some("{\"type\": \"object\"}"));
        assert_eq!(
            store.value.borrow().as_deref(),
            Some("classname=My%24Class&targetpackage=com.example.pkg&sourcetype=jsonschema&annotationstyle=jackson2&includetostring=true")
        );
    }

    #[test]
    fn test_prepare_submission_includes_schema() {
        let form = MemoryForm::generator_page();
        form.type_into("schema", "{}");
        form.type_into("classname", "Person");
        let store = MemoryStore::default();
        let controller = FormController::new(&form, &store);

        let request = controller.prepare_submission(GeneratorAction::Preview);

        assert_eq!(request.endpoint(), "generator/preview");
        assert_eq!(request.class_name, "Person");
        assert!(request.body.starts_with("schema=%7B%7D&classname=Person"));
        assert!(store.value.borrow().is_some());
    }

    #[test]
    fn test_store_failure_does_not_abort_submission() {
        let form = MemoryForm::generator_page();
        form.type_into("classname", "Person");
        let store = MemoryStore {
            fail: true,
            ..Default::default()
        };
        let controller = FormController::new(&form, &store);

        let request = controller.prepare_submission(GeneratorAction::Archive);

        assert_eq!(request.endpoint(), "generator");
        assert!(request.body.contains("classname=Person"));
        assert!(store.value.borrow().is_none());
    }

    #[test]
    fn test_persist_then_restore_on_reload() {
        let store = MemoryStore::default();

        let first_visit = MemoryForm::generator_page();
        first_visit.type_into("schema", "{}");
        first_visit.type_into("classname", "a=b&c d");
        first_visit.set_checked("generatebuilders", true);
        first_visit.set_checked("includetostring", false);
        FormController::new(&first_visit, &store).persist();

        let reload = MemoryForm::generator_page();
        let report = FormController::new(&reload, &store).restore().unwrap();

        assert!(report.skipped.is_empty());
        assert_eq!(reload.value_of("schema").as_deref(), Some(""));
        assert_eq!(reload.value_of("classname").as_deref(), Some("a=b&c d"));
        assert!(reload.is_checked("generatebuilders"));
        assert!(!reload.is_checked("includetostring"));
    }

    #[test]
    fn test_plus_and_percent_values_survive_reload() {
        let store = MemoryStore::default();

        let first_visit = MemoryForm::generator_page();
        first_visit.type_into("classname", "a+b %20 c&d=e");
        FormController::new(&first_visit, &store).persist();
        let stored = store.value.borrow().clone();

        let reload = MemoryForm::generator_page();
        reload.set_checked("generatebuilders", true);
        let controller = FormController::new(&reload, &store);
        controller.restore().unwrap();

        assert_eq!(reload.value_of("classname").as_deref(), Some("a+b %20 c&d=e"));
        assert!(!reload.is_checked("generatebuilders"));
        assert!(reload.is_checked("includetostring"));

        controller.persist();
        assert_eq!(*store.value.borrow(), stored);
    }

    #[test]
    fn test_first_visit_restore_is_noop() {
        let form = MemoryForm::generator_page();
        let store = MemoryStore::default();

        assert_eq!(FormController::new(&form, &store).restore(), None);
        assert!(form.is_checked("includetostring"));
    }

    #[test]
    fn test_report_failure_shows_alert() {
        let form = MemoryForm::generator_page();
        let store = MemoryStore::default();
        let controller = FormController::new(&form, &store);

        controller.report_failure(&UseCaseError::external("Unexpected character ('}')"));

        assert_eq!(
            form.alerts.borrow().as_slice(),
            ["There's a problem: Unexpected character ('}')".to_string()]
        );
    }
}
