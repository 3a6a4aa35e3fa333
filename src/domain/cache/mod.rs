//! Cache domain - Generic caching abstraction and response cache keys

mod key;
mod repository;

pub use key::ResponseCacheKey;
pub use repository::{Cache, CacheExt};

#[cfg(test)]
pub use repository::mock::MockCache;
