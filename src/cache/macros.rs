/// Read-through caching around an async computation.
///
/// Returns the cached value for `$key` when present. Otherwise awaits
/// `$block`, hands the value to the cache's background writer with `$ttl`
/// seconds to live, and returns it. Must be used inside a function returning
/// `AppResult<_>`; cache errors propagate with `?`.
///
/// # Example
/// ```rust,ignore
/// let items: Vec<DecorItem> = cached!(cache, CacheKey::ProductList(url), 3600, async move {
///     fetch_products().await
/// })?;
/// ```
#[macro_export]
macro_rules! cached {
    ($cache:expr, $key:expr, $ttl:expr, $block:expr) => {{
        if let Some(cached) = $cache.get_from_cache(&$key).await? {
            Ok(cached)
        } else {
            let value = $block.await?;
            $cache.set_in_background(&$key, &value, $ttl);
            Ok(value)
        }
    }};
}
