//! Author domain module

mod entity;
mod repository;
mod validation;

pub use entity::{Author, AuthorId};
pub use repository::{AuthorQuery, AuthorRepository};
pub use validation::AuthorValidationError;
