pub mod controller;
pub mod fields;
pub mod request;
pub mod response;

pub use controller::{FormController, StateStore};
pub use request::{GeneratorAction, GeneratorRequest};
pub use response::{ArchiveLink, PreviewSource};

use crate::usecases::common::UseCaseMetadata;

pub struct GenerateSources;

impl UseCaseMetadata for GenerateSources {
    fn usecase_index() -> &'static str {
        "u601"
    }

    fn usecase_name() -> &'static str {
        "generate_sources"
    }

    fn display_name() -> &'static str {
        "JSON Schema to POJO"
    }

    fn description() -> &'static str {
        "Generate Java types from a JSON Schema or an example JSON document"
    }
}
