use serde::{Deserialize, Serialize};

/// Download link for a generated archive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchiveLink {
    /// `data:` URL embedding the archive.
    pub href: String,
    pub file_name: String,
}

impl ArchiveLink {
    const DATA_URL_PREFIX: &'static str = "data:application/zip;base64,";

    /// Builds the link from the endpoint's base64 payload.
    pub fn from_payload(class_name: &str, payload: &str) -> Self {
        let class_name = class_name.trim();
        let stem = if class_name.is_empty() { "generated" } else { class_name };
        Self {
            href: format!("{}{}", Self::DATA_URL_PREFIX, payload.trim()),
            file_name: format!("{}-sources.zip", stem),
        }
    }
}

/// Generated source text for the preview modal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewSource {
    pub text: String,
}
