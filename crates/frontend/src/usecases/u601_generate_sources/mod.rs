//! Generator page UI module
//!
//! Simplified MVVM pattern implementation:
//! - api.rs: submission to the generator endpoint
//! - view_model.rs: ViewModel with commands, the page's `FormView`
//! - view.rs: Leptos component (pure UI)

mod api;
mod view;
mod view_model;

pub use view::GenerateSourcesPage;
pub use view_model::{GenerateSourcesViewModel, PageFormView};
