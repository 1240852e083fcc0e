//! Form state persistence.
//!
//! A [`FormSnapshot`] is the ordered list of (name, value) pairs of the named
//! controls of a form. It is encoded into a `name=value&name=value` string for
//! the durable store and decoded back into control states on page load.
//!
//! - `codec.rs`: percent-encoding of snapshots
//! - `view.rs`: the form view collaborator and its tagged controls
//! - `restore.rs`: applying a decoded snapshot to live controls

pub mod codec;
pub mod restore;
pub mod view;

#[cfg(test)]
pub(crate) mod test_support;

pub use restore::{apply_snapshot, restore, RestoreReport};
pub use view::{ControlKind, FormControl, FormView};

use serde::{Deserialize, Serialize};

/// A single (name, value) pair of a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldEntry {
    pub name: String,
    pub value: String,
}

impl FieldEntry {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Values of the named controls of a form, in form order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSnapshot {
    entries: Vec<FieldEntry>,
}

impl FormSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a snapshot from `(name, value)` pairs, keeping their order.
    pub fn from_pairs<N, V>(pairs: impl IntoIterator<Item = (N, V)>) -> Self
    where
        N: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: pairs
                .into_iter()
                .map(|(name, value)| FieldEntry::new(name, value))
                .collect(),
        }
    }

    /// Collects the values a browser would submit for these controls:
    /// text-like controls always, checkboxes when checked, radio options when
    /// selected. Controls without a name are not part of the form data.
    pub fn from_controls(controls: &[FormControl]) -> Self {
        let entries = controls
            .iter()
            .filter(|control| !control.name.is_empty())
            .filter_map(|control| {
                control
                    .submitted_value()
                    .map(|value| FieldEntry::new(control.name.clone(), value))
            })
            .collect();
        Self { entries }
    }

    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.push(FieldEntry::new(name, value));
    }

    pub fn entries(&self) -> &[FieldEntry] {
        &self.entries
    }

    /// Value of the first entry named `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.value.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|entry| entry.name == name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Copy of the snapshot without any entry named `field`.
    pub fn without(&self, field: &str) -> Self {
        Self {
            entries: self
                .entries
                .iter()
                .filter(|entry| entry.name != field)
                .cloned()
                .collect(),
        }
    }

    pub fn encode(&self) -> String {
        codec::encode(self)
    }

    pub fn decode(encoded: &str) -> Self {
        codec::decode(encoded)
    }
}
