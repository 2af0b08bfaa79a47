//! Redis read-through cache used by remote providers.

mod macros;
pub mod redis_cache;

pub use redis_cache::{create_redis_client, Cache, CacheKey, CacheWriterHandle};
