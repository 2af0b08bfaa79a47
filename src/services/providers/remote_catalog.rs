//! Product API backed catalog
//!
//! Fetches the full product list from `GET {api_url}/products` and maps each
//! product into a `DecorItem`. The list is cached in Redis when a cache is
//! configured; per-item lookups and filters go through the cached list.

use std::collections::HashSet;

use crate::{
    cache::{Cache, CacheKey},
    cached,
    error::{AppError, AppResult},
    models::{ApiProduct, DecorItem},
    services::providers::CatalogProvider,
};
use reqwest::Client as HttpClient;

#[derive(Clone)]
pub struct RemoteCatalog {
    http_client: HttpClient,
    api_url: String,
    cache: Option<Cache>,
    cache_ttl: u64,
}

impl RemoteCatalog {
    pub fn new(api_url: String, cache: Option<Cache>, cache_ttl: u64) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_url: api_url.trim_end_matches('/').to_string(),
            cache,
            cache_ttl,
        }
    }

    /// Products without an id get their 1-based position in the list
    ///
    /// A position already used as an explicit id gets a `-n` suffix. Products
    /// repeating an id seen earlier in the list are dropped.
    fn convert_products(products: Vec<ApiProduct>) -> Vec<DecorItem> {
        let explicit: HashSet<String> = products.iter().filter_map(|p| p.id.clone()).collect();
        let mut seen = HashSet::new();
        let mut items = Vec::with_capacity(products.len());

        for (index, product) in products.into_iter().enumerate() {
            let item = product.into_decor_item(positional_id(index + 1, &explicit));
            if !seen.insert(item.id.clone()) {
                tracing::warn!(
                    item_id = %item.id,
                    product = %item.name,
                    "Duplicate product id dropped"
                );
                continue;
            }
            items.push(item);
        }

        items
    }

    async fn fetch_products(&self) -> AppResult<Vec<DecorItem>> {
        let url = format!("{}/products", self.api_url);
        let response = self.http_client.get(&url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "Product API returned status {}: {}",
                status, body
            )));
        }

        let products: Vec<ApiProduct> = response.json().await?;
        let items = Self::convert_products(products);

        tracing::info!(
            items = items.len(),
            provider = "remote",
            "Product list fetched"
        );

        Ok(items)
    }
}

fn positional_id(position: usize, taken: &HashSet<String>) -> String {
    let id = position.to_string();
    if !taken.contains(&id) {
        return id;
    }
    (1..)
        .map(|n| format!("{}-{}", position, n))
        .find(|candidate| !taken.contains(candidate))
        .unwrap_or(id)
}

#[async_trait::async_trait]
impl CatalogProvider for RemoteCatalog {
    async fn all_items(&self) -> AppResult<Vec<DecorItem>> {
        match &self.cache {
            Some(cache) => cached!(
                cache,
                CacheKey::ProductList(self.api_url.clone()),
                self.cache_ttl,
                self.fetch_products()
            ),
            None => self.fetch_products().await,
        }
    }

    fn name(&self) -> &'static str {
        "remote"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ItemCategory, StyleTag};

    fn product(id: Option<&str>, name: &str, style: &str) -> ApiProduct {
        ApiProduct {
            id: id.map(str::to_string),
            name: name.to_string(),
            description: String::new(),
            images: vec![],
            style: style.to_string(),
            position: "living".to_string(),
            price: Some(99.0),
        }
    }

    #[test]
    fn test_convert_products_assigns_positional_ids() {
        let items = RemoteCatalog::convert_products(vec![
            product(None, "Arc Floor Lamp", "mid-century modern"),
            product(Some("sku-9"), "Jute Rug", "boho"),
            product(None, "Oak Side Table", "scandinavian"),
        ]);

        let ids: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "sku-9", "3"]);
        assert_eq!(items[0].styles, vec![StyleTag::MidCentury]);
        assert_eq!(items[0].category, ItemCategory::Lighting);
        assert_eq!(items[2].category, ItemCategory::Table);
    }

    #[test]
    fn test_positional_ids_skip_explicit_ids() {
        let items = RemoteCatalog::convert_products(vec![
            product(Some("2"), "Jute Rug", "boho"),
            product(None, "Rattan Chair", "boho"),
            product(Some("2-1"), "Pipe Shelf", "industrial"),
        ]);

        let ids: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "2-2", "2-1"]);
        assert_eq!(items[1].name, "Rattan Chair");
    }

    #[tokio::test]
    async fn test_duplicate_explicit_ids_keep_first() {
        let items = RemoteCatalog::convert_products(vec![
            product(Some("sku-1"), "Jute Rug", "boho"),
            product(Some("sku-1"), "Wool Rug", "scandinavian"),
            product(None, "Rattan Chair", "boho"),
        ]);

        let ids: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["sku-1", "3"]);

        let catalog = crate::services::providers::StaticCatalog::new(items);
        let chair = catalog.item_by_id("3").await.unwrap();
        assert_eq!(chair.name, "Rattan Chair");
    }

    #[test]
    fn test_new_trims_trailing_slash() {
        let catalog = RemoteCatalog::new("http://products.local/api/".to_string(), None, 60);
        assert_eq!(catalog.api_url, "http://products.local/api");
    }

    #[tokio::test]
    async fn test_unreachable_api_is_http_error() {
        let catalog = RemoteCatalog::new("http://127.0.0.1:9".to_string(), None, 60);
        let result = catalog.all_items().await;
        assert!(matches!(result, Err(AppError::HttpClient(_))));
    }
}
