use super::{ControlKind, FormControl, FormSnapshot, FormView};

/// What a restoration did to the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RestoreReport {
    /// Entries written to at least one control.
    pub applied: usize,
    /// Names of entries that matched no control (or no radio option).
    pub skipped: Vec<String>,
}

/// Restores a stored snapshot into the form.
///
/// Returns `None` when nothing was stored; the form keeps its defaults.
pub fn restore<V>(view: &V, stored: Option<&str>, excluded: &[&str]) -> Option<RestoreReport>
where
    V: FormView + ?Sized,
{
    let Some(encoded) = stored else {
        log::debug!("form state: nothing stored, keeping defaults");
        return None;
    };
    let snapshot = FormSnapshot::decode(encoded);
    Some(apply_snapshot(view, &snapshot, excluded))
}

/// Writes the snapshot's entries into the matching controls.
///
/// Every checkbox is unchecked first: a checkbox missing from the snapshot was
/// unchecked when it was taken. Entries named in `excluded` are ignored.
pub fn apply_snapshot<V>(view: &V, snapshot: &FormSnapshot, excluded: &[&str]) -> RestoreReport
where
    V: FormView + ?Sized,
{
    let controls = view.controls();
    for control in controls.iter().filter(|control| control.is_checkbox()) {
        view.set_control_checked(control.id, false);
    }

    let mut report = RestoreReport::default();
    for entry in snapshot.entries() {
        if excluded.contains(&entry.name.as_str()) {
            continue;
        }
        let group: Vec<&FormControl> = controls
            .iter()
            .filter(|control| control.name == entry.name)
            .collect();
        if apply_entry(view, &group, &entry.value) {
            report.applied += 1;
        } else {
            log::debug!("form state: no control for {:?}, skipped", entry.name);
            report.skipped.push(entry.name.clone());
        }
    }
    report
}

fn apply_entry<V>(view: &V, group: &[&FormControl], value: &str) -> bool
where
    V: FormView + ?Sized,
{
    let option_exists = group.iter().any(|control| {
        matches!(&control.kind, ControlKind::RadioOption { value: option, .. } if option == value)
    });

    let mut applied = false;
    for control in group {
        match &control.kind {
            ControlKind::RadioOption { value: option, .. } => {
                if option_exists {
                    view.set_control_checked(control.id, option == value);
                    applied = true;
                }
            }
            // Presence alone means checked.
            ControlKind::Checkbox { .. } => {
                view.set_control_checked(control.id, true);
                applied = true;
            }
            ControlKind::TextLike { .. } => {
                view.set_control_value(control.id, value);
                applied = true;
            }
        }
    }
    applied
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::form_state::test_support::MemoryForm;
    use proptest::prelude::*;

    const EXCLUDED: &[&str] = &["schema"];

    #[test]
    fn test_nothing_stored_keeps_defaults() {
        let form = MemoryForm::generator_page();

        assert_eq!(restore(&form, None, EXCLUDED), None);
        assert!(form.is_checked("includetostring"));
        assert_eq!(form.selected_option("sourcetype").as_deref(), Some("jsonschema"));
    }

    #[test]
    fn test_restores_text_radio_and_checkbox() {
        let form = MemoryForm::generator_page();

        let report = restore(
            &form,
            Some("classname=My%24Class&targetpackage=com.example.pkg&sourcetype=json&generatebuilders=true"),
            EXCLUDED,
        )
        .unwrap();

        assert_eq!(report.applied, 4);
        assert!(report.skipped.is_empty());
        assert_eq!(form.value_of("classname").as_deref(), Some("My$Class"));
        assert_eq!(form.value_of("targetpackage").as_deref(), Some("com.example.pkg"));
        assert_eq!(form.selected_option("sourcetype").as_deref(), Some("json"));
        assert_eq!(form.selected_option("annotationstyle").as_deref(), Some("jackson2"));
        assert!(form.is_checked("generatebuilders"));
    }

    #[test]
    fn test_absent_checkbox_is_unchecked() {
        let form = MemoryForm::generator_page();
        assert!(form.is_checked("includetostring"));

        restore(&form, Some("classname=Person"), EXCLUDED).unwrap();

        assert!(!form.is_checked("includetostring"));
    }

    #[test]
    fn test_empty_string_still_resets_checkboxes() {
        let form = MemoryForm::generator_page();

        let report = restore(&form, Some(""), EXCLUDED).unwrap();

        assert_eq!(report, RestoreReport::default());
        assert!(!form.is_checked("includetostring"));
    }

    #[test]
    fn test_checkbox_value_not_compared() {
        let form = MemoryForm::generator_page();

        restore(&form, Some("generatebuilders=on"), EXCLUDED).unwrap();

        assert!(form.is_checked("generatebuilders"));
    }

    #[test]
    fn test_unknown_field_is_skipped() {
        let form = MemoryForm::generator_page();

        let report = restore(&form, Some("ghostField=x&classname=Person"), EXCLUDED).unwrap();

        assert_eq!(report.skipped, vec!["ghostField".to_string()]);
        assert_eq!(form.value_of("classname").as_deref(), Some("Person"));
        assert_eq!(form.value_of("targetpackage").as_deref(), Some(""));
    }

    #[test]
    fn test_unknown_radio_value_keeps_selection() {
        let form = MemoryForm::generator_page();

        let report = restore(&form, Some("annotationstyle=moshi"), EXCLUDED).unwrap();

        assert_eq!(report.skipped, vec!["annotationstyle".to_string()]);
        assert_eq!(form.selected_option("annotationstyle").as_deref(), Some("jackson2"));
    }

    #[test]
    fn test_excluded_field_is_never_restored() {
        let form = MemoryForm::generator_page();
        form.type_into("schema", "{\"type\":\"object\"}");

        let report = restore(&form, Some("schema=%7B%7D&classname=Person"), EXCLUDED).unwrap();

        assert_eq!(report.applied, 1);
        assert!(report.skipped.is_empty());
        assert_eq!(form.value_of("schema").as_deref(), Some("{\"type\":\"object\"}"));
    }

    #[test]
    fn test_value_with_reserved_characters() {
        let form = MemoryForm::new(vec![FormControl::text(0, "note", "")]);
        let encoded = FormSnapshot::from_pairs([("note", "a=b&c")]).encode();

        restore(&form, Some(encoded.as_str()), EXCLUDED).unwrap();

        assert_eq!(form.value_of("note").as_deref(), Some("a=b&c"));
    }

    proptest! {
        #[test]
        fn restore_through_view_is_idempotent(
            classname in ".{0,16}",
            targetpackage in ".{0,16}",
            json_source in any::<bool>(),
            builders in any::<bool>(),
            to_string in any::<bool>(),
        ) {
            let source = MemoryForm::generator_page();
            source.type_into("classname", &classname);
            source.type_into("targetpackage", &targetpackage);
            if json_source {
                restore(&source, Some("sourcetype=json"), EXCLUDED);
            }
            source.set_checked("generatebuilders", builders);
            source.set_checked("includetostring", to_string);
            let taken = FormSnapshot::from_controls(&source.controls()).without("schema");

            let first = MemoryForm::generator_page();
            restore(&first, Some(taken.encode().as_str()), EXCLUDED);
            let once = FormSnapshot::from_controls(&first.controls()).without("schema");

            let second = MemoryForm::generator_page();
            restore(&second, Some(once.encode().as_str()), EXCLUDED);
            let twice = FormSnapshot::from_controls(&second.controls()).without("schema");

            prop_assert_eq!(&once, &taken);
            prop_assert_eq!(twice, once);
        }
    }
}
