//! Author infrastructure implementations

mod repository;
mod service;

pub use repository::StorageAuthorRepository;
pub use service::{AuthorService, CreateAuthorRequest};
