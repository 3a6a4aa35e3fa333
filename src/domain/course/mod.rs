//! Course domain module

mod entity;
mod repository;
mod validation;

pub use entity::{Course, CourseId};
pub use repository::{CourseQuery, CourseRepository};
pub use validation::CourseValidationError;
