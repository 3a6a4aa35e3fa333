//! Course infrastructure implementations

mod repository;
mod service;

pub use repository::StorageCourseRepository;
pub use service::{CourseFields, CourseService, Upserted};
