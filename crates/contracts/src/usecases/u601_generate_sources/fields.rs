//! Layout of the generator form: field names, options and storage settings.

use crate::shared::validation::IdentifierRule;
use chrono::TimeDelta;

/// Schema text body. Submitted, never persisted.
pub const SCHEMA_FIELD: &str = "schema";
pub const CLASS_NAME_FIELD: &str = "classname";
pub const TARGET_PACKAGE_FIELD: &str = "targetpackage";
pub const SOURCE_TYPE_FIELD: &str = "sourcetype";
pub const ANNOTATION_STYLE_FIELD: &str = "annotationstyle";

/// Fields left out of the persisted snapshot.
pub const NOT_PERSISTED: &[&str] = &[SCHEMA_FIELD];

/// Cookie holding the persisted form state.
pub const STATE_COOKIE_NAME: &str = "jsonschema2pojo_form";

/// Lifetime of the persisted form state, renewed on every write.
pub fn state_ttl() -> TimeDelta {
    TimeDelta::days(365)
}

/// Identifier fields and the rule each one is checked against.
pub fn default_rules() -> Vec<(String, IdentifierRule)> {
    vec![
        (CLASS_NAME_FIELD.to_string(), IdentifierRule::ClassName),
        (TARGET_PACKAGE_FIELD.to_string(), IdentifierRule::PackageName),
    ]
}

/// Kind of input the schema text is.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum SourceType {
    #[default]
    JsonSchema,
    Json,
}

impl SourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceType::JsonSchema => "jsonschema",
            SourceType::Json => "json",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SourceType::JsonSchema => "JSON Schema",
            SourceType::Json => "JSON",
        }
    }

    pub fn all() -> [SourceType; 2] {
        [SourceType::JsonSchema, SourceType::Json]
    }
}

/// Annotations placed on the generated types.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum AnnotationStyle {
    #[default]
    Jackson2,
    Jackson1,
    Gson,
    None,
}

impl AnnotationStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnnotationStyle::Jackson2 => "jackson2",
            AnnotationStyle::Jackson1 => "jackson1",
            AnnotationStyle::Gson => "gson",
            AnnotationStyle::None => "none",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            AnnotationStyle::Jackson2 => "Jackson 2.x",
            AnnotationStyle::Jackson1 => "Jackson 1.x",
            AnnotationStyle::Gson => "Gson",
            AnnotationStyle::None => "None",
        }
    }

    pub fn all() -> [AnnotationStyle; 4] {
        [
            AnnotationStyle::Jackson2,
            AnnotationStyle::Jackson1,
            AnnotationStyle::Gson,
            AnnotationStyle::None,
        ]
    }
}

/// Boolean generation switch rendered as a checkbox.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct GeneratorFlag {
    pub name: &'static str,
    pub label: &'static str,
    pub default_on: bool,
}

pub const GENERATOR_FLAGS: &[GeneratorFlag] = &[
    GeneratorFlag { name: "generatebuilders", label: "Generate builder methods", default_on: false },
    GeneratorFlag { name: "useprimitives", label: "Use primitive types", default_on: false },
    GeneratorFlag { name: "uselongintegers", label: "Use long integers", default_on: false },
    GeneratorFlag { name: "usedoublenumbers", label: "Use double numbers", default_on: true },
    GeneratorFlag { name: "includehashcodeandequals", label: "Include hashCode and equals", default_on: true },
    GeneratorFlag { name: "includetostring", label: "Include toString", default_on: true },
    GeneratorFlag { name: "initializecollections", label: "Initialize collections", default_on: true },
    GeneratorFlag { name: "usejodadates", label: "Use Joda dates", default_on: false },
];
