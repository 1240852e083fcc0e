pub mod components;
pub mod cookie;
pub mod dom_form;
pub mod icons;
pub mod modal;
