//! Access to the controls of a live `<form>`.
//!
//! Controls are addressed by their index in `form.elements`, which is the id
//! handed out in [`FormControl::id`].

use contracts::shared::form_state::{ControlKind, FormControl};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlFormElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

/// Input types that never carry form data.
const NON_DATA_INPUT_TYPES: &[&str] = &["button", "submit", "reset", "image", "file"];

/// Named, enabled controls of the form in document order.
pub fn read_controls(form: &HtmlFormElement) -> Vec<FormControl> {
    let elements = form.elements();
    (0..elements.length())
        .filter_map(|index| {
            let element = elements.item(index)?;
            read_control(index as usize, &element)
        })
        .collect()
}

fn read_control(id: usize, element: &Element) -> Option<FormControl> {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        let name = input.name();
        if name.is_empty() || input.disabled() {
            return None;
        }
        let kind = match input.type_().as_str() {
            "radio" => ControlKind::RadioOption {
                value: input.value(),
                selected: input.checked(),
            },
            "checkbox" => ControlKind::Checkbox {
                value: input.value(),
                checked: input.checked(),
            },
            t if NON_DATA_INPUT_TYPES.contains(&t) => return None,
            _ => ControlKind::TextLike {
                value: input.value(),
            },
        };
        return Some(FormControl { id, name, kind });
    }

    if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
        let name = area.name();
        if name.is_empty() || area.disabled() {
            return None;
        }
        return Some(FormControl::text(id, name, area.value()));
    }

    if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
        let name = select.name();
        if name.is_empty() || select.disabled() {
            return None;
        }
        return Some(FormControl::text(id, name, select.value()));
    }

    None
}

fn element_at(form: &HtmlFormElement, id: usize) -> Result<Element, String> {
    let index = u32::try_from(id).map_err(|_| format!("Control id out of range: {}", id))?;
    form.elements()
        .item(index)
        .ok_or_else(|| format!("No form control at index {}", id))
}

/// Sets the value of a text-like control.
pub fn set_value(form: &HtmlFormElement, id: usize, value: &str) -> Result<(), String> {
    let element = element_at(form, id)?;
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        input.set_value(value);
    } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
        area.set_value(value);
    } else if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
        select.set_value(value);
    } else {
        return Err(format!("Form control {} does not hold a value", id));
    }
    Ok(())
}

/// Checks or unchecks a checkbox or radio option.
pub fn set_checked(form: &HtmlFormElement, id: usize, checked: bool) -> Result<(), String> {
    let element = element_at(form, id)?;
    let input = element
        .dyn_ref::<HtmlInputElement>()
        .ok_or_else(|| format!("Form control {} is not an input", id))?;
    input.set_checked(checked);
    Ok(())
}
