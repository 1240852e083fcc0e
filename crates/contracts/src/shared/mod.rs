pub mod cookie;
pub mod form_state;
pub mod validation;
