use serde::{Deserialize, Serialize};

/// Kind and current state of a form control, as reported by the view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ControlKind {
    /// One option of a radio group; the group is the set of options sharing a name.
    RadioOption { value: String, selected: bool },
    Checkbox { value: String, checked: bool },
    /// Any single-value control: text inputs, hidden inputs, text areas, selects.
    TextLike { value: String },
}

/// A named control of the form.
///
/// `id` is the view's own handle for the control and is passed back to
/// [`FormView::set_control_value`] and [`FormView::set_control_checked`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormControl {
    pub id: usize,
    pub name: String,
    pub kind: ControlKind,
}

impl FormControl {
    pub fn text(id: usize, name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            kind: ControlKind::TextLike {
                value: value.into(),
            },
        }
    }

    pub fn radio(id: usize, name: impl Into<String>, value: impl Into<String>, selected: bool) -> Self {
        Self {
            id,
            name: name.into(),
            kind: ControlKind::RadioOption {
                value: value.into(),
                selected,
            },
        }
    }

    pub fn checkbox(id: usize, name: impl Into<String>, value: impl Into<String>, checked: bool) -> Self {
        Self {
            id,
            name: name.into(),
            kind: ControlKind::Checkbox {
                value: value.into(),
                checked,
            },
        }
    }

    pub fn is_checkbox(&self) -> bool {
        matches!(self.kind, ControlKind::Checkbox { .. })
    }

    /// Value this control contributes to the form data, if any.
    pub fn submitted_value(&self) -> Option<&str> {
        match &self.kind {
            ControlKind::TextLike { value } => Some(value.as_str()),
            ControlKind::Checkbox { value, checked: true } => Some(value.as_str()),
            ControlKind::RadioOption { value, selected: true } => Some(value.as_str()),
            _ => None,
        }
    }
}

/// The page as seen by the validator and the codec.
///
/// Implementations own the actual widgets; every method takes `&self` because
/// the browser implementation writes through the DOM and reactive signals.
pub trait FormView {
    /// Named controls of the form, in form order.
    fn controls(&self) -> Vec<FormControl>;

    fn set_control_value(&self, id: usize, value: &str);

    fn set_control_checked(&self, id: usize, checked: bool);

    /// Toggles the error indicator of the control group around `field_id`.
    fn set_error_state(&self, field_id: &str, error: bool);

    fn show_alert(&self, message: &str);
}

impl<T: FormView + ?Sized> FormView for &T {
    fn controls(&self) -> Vec<FormControl> {
        (**self).controls()
    }

    fn set_control_value(&self, id: usize, value: &str) {
        (**self).set_control_value(id, value)
    }

    fn set_control_checked(&self, id: usize, checked: bool) {
        (**self).set_control_checked(id, checked)
    }

    fn set_error_state(&self, field_id: &str, error: bool) {
        (**self).set_error_state(field_id, error)
    }

    fn show_alert(&self, message: &str) {
        (**self).show_alert(message)
    }
}
