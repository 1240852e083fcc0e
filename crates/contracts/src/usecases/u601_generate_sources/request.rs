use serde::{Deserialize, Serialize};

/// Button-triggered call to the generator endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeneratorAction {
    /// Generated source of the root type, shown in a modal.
    Preview,
    /// Base64 zip archive of all generated sources.
    Archive,
}

impl GeneratorAction {
    /// Endpoint path, relative to the page.
    pub fn endpoint(&self) -> &'static str {
        match self {
            GeneratorAction::Preview => "generator/preview",
            GeneratorAction::Archive => "generator",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GeneratorAction::Preview => "Preview",
            GeneratorAction::Archive => "Zip",
        }
    }

    /// Button label while the request is in flight.
    pub fn busy_label(&self) -> &'static str {
        match self {
            GeneratorAction::Preview => "Generating preview...",
            GeneratorAction::Archive => "Generating sources...",
        }
    }
}

/// Form submission prepared by the controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorRequest {
    pub action: GeneratorAction,
    /// `application/x-www-form-urlencoded` body with every form field.
    pub body: String,
    /// Class name at submission time, used to name the archive.
    pub class_name: String,
}

impl GeneratorRequest {
    pub const CONTENT_TYPE: &'static str = "application/x-www-form-urlencoded";

    pub fn endpoint(&self) -> &'static str {
        self.action.endpoint()
    }
}
