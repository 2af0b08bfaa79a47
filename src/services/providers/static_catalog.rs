use crate::{
    data::reference_items,
    error::AppResult,
    models::DecorItem,
    services::providers::CatalogProvider,
};

/// In-memory catalog
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    items: Vec<DecorItem>,
}

impl StaticCatalog {
    pub fn new(items: Vec<DecorItem>) -> Self {
        Self { items }
    }

    /// Catalog holding the built-in reference items
    pub fn reference() -> Self {
        Self::new(reference_items())
    }
}

impl Default for StaticCatalog {
    fn default() -> Self {
        Self::reference()
    }
}

#[async_trait::async_trait]
impl CatalogProvider for StaticCatalog {
    async fn all_items(&self) -> AppResult<Vec<DecorItem>> {
        Ok(self.items.clone())
    }

    fn name(&self) -> &'static str {
        "static"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_catalog_listing() {
        let catalog = StaticCatalog::reference();
        let items = tokio_test::block_on(catalog.all_items()).unwrap();

        assert_eq!(items.len(), 5);
        assert_eq!(items[1].name, "Mid-Century Armchair");
        assert_eq!(catalog.name(), "static");
    }
}
