//! Infrastructure layer - External service implementations

pub mod author;
pub mod cache;
pub mod course;
pub mod logging;
pub mod observability;
pub mod storage;
