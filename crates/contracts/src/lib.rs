//! Types and browser-independent logic shared by the generator page.

pub mod shared;
pub mod usecases;
