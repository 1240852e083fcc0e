/// Metadata used to identify and describe a use case
pub trait UseCaseMetadata {
    /// Use case index (for example "u601")
    fn usecase_index() -> &'static str;

    /// Technical name (for example "generate_sources")
    fn usecase_name() -> &'static str;

    /// Display name for the UI
    fn display_name() -> &'static str;

    /// Use case description
    fn description() -> &'static str {
        ""
    }

    /// Full name in the form "u601_generate_sources"
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }
}
