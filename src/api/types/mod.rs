//! Request and response types of the HTTP API

pub mod author;
pub mod course;
pub mod envelope;
pub mod error;
pub mod json;
pub mod paging;
pub mod patch;
pub mod uri;

pub use author::{AuthorDto, AuthorForCreation, AuthorsResourceParameters};
pub use course::{CourseDto, CourseForCreation, CourseForUpdate};
pub use envelope::Response;
pub use error::{ApiError, ApiErrorResponse, ApiErrorType};
pub use json::{Json, Query};
pub use paging::PageParameters;
pub use patch::{JsonPatch, PatchError, PatchOperation};
pub use uri::{BaseUri, CollectionUri};
