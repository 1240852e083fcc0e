//! In-memory form used by the unit tests.

use super::{ControlKind, FormControl, FormView};
use std::cell::RefCell;
use std::collections::BTreeMap;

#[derive(Debug, Default)]
pub struct MemoryForm {
    pub controls: RefCell<Vec<FormControl>>,
    pub errors: RefCell<BTreeMap<String, bool>>,
    pub alerts: RefCell<Vec<String>>,
}

impl MemoryForm {
    pub fn new(controls: Vec<FormControl>) -> Self {
        Self {
            controls: RefCell::new(controls),
            ..Default::default()
        }
    }

    /// Layout close to the generator page, with every control at its default.
    pub fn generator_page() -> Self {
        Self::new(vec![
            FormControl::text(0, "schema", ""),
            FormControl::text(1, "classname", ""),
            FormControl::text(2, "targetpackage", ""),
            FormControl::radio(3, "sourcetype", "jsonschema", true),
            FormControl::radio(4, "sourcetype", "json", false),
            FormControl::radio(5, "annotationstyle", "jackson2", true),
            FormControl::radio(6, "annotationstyle", "gson", false),
            FormControl::checkbox(7, "generatebuilders", "true", false),
            FormControl::checkbox(8, "includetostring", "true", true),
        ])
    }

    pub fn value_of(&self, name: &str) -> Option<String> {
        self.controls
            .borrow()
            .iter()
            .find(|control| control.name == name)
            .and_then(|control| match &control.kind {
                ControlKind::TextLike { value } => Some(value.clone()),
                _ => None,
            })
    }

    pub fn is_checked(&self, name: &str) -> bool {
        self.controls.borrow().iter().any(|control| {
            control.name == name
                && matches!(control.kind, ControlKind::Checkbox { checked: true, .. })
        })
    }

    pub fn selected_option(&self, name: &str) -> Option<String> {
        self.controls
            .borrow()
            .iter()
            .filter(|control| control.name == name)
            .find_map(|control| match &control.kind {
                ControlKind::RadioOption {
                    value,
                    selected: true,
                } => Some(value.clone()),
                _ => None,
            })
    }

    pub fn type_into(&self, name: &str, text: &str) {
        for control in self.controls.borrow_mut().iter_mut() {
            if control.name == name {
                if let ControlKind::TextLike { value } = &mut control.kind {
                    *value = text.to_string();
                }
            }
        }
    }

    pub fn set_checked(&self, name: &str, on: bool) {
        for control in self.controls.borrow_mut().iter_mut() {
            if control.name == name {
                if let ControlKind::Checkbox { checked, .. } = &mut control.kind {
                    *checked = on;
                }
            }
        }
    }

    pub fn has_error(&self, field_id: &str) -> bool {
        self.errors.borrow().get(field_id).copied().unwrap_or(false)
    }
}

impl FormView for MemoryForm {
    fn controls(&self) -> Vec<FormControl> {
        self.controls.borrow().clone()
    }

    fn set_control_value(&self, id: usize, new_value: &str) {
        if let Some(control) = self.controls.borrow_mut().iter_mut().find(|c| c.id == id) {
            if let ControlKind::TextLike { value } = &mut control.kind {
                *value = new_value.to_string();
            }
        }
    }

    fn set_control_checked(&self, id: usize, on: bool) {
        if let Some(control) = self.controls.borrow_mut().iter_mut().find(|c| c.id == id) {
            match &mut control.kind {
                ControlKind::Checkbox { checked, .. } => *checked = on,
                ControlKind::RadioOption { selected, .. } => *selected = on,
                ControlKind::TextLike { .. } => {}
            }
        }
    }

    fn set_error_state(&self, field_id: &str, error: bool) {
        self.errors.borrow_mut().insert(field_id.to_string(), error);
    }

    fn show_alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }
}
