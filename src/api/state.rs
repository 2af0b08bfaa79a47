use std::{sync::Arc, time::Duration};

use tokio::sync::watch;

use crate::{
    cache::{create_redis_client, Cache, CacheWriterHandle},
    config::Config,
    services::{
        providers::{
            CatalogProvider, RemoteCatalog, RoomAnalysisProvider, StaticCatalog,
            VisionApiProvider,
        },
        CompatibilityEstimator, RoomAnalyzer, StyleQuizScorer,
    },
};

/// Shared application state
///
/// Everything here is immutable or internally synchronized, so cloning per
/// request is cheap and no lock is needed.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn CatalogProvider>,
    pub analyzer: RoomAnalyzer,
    pub estimator: CompatibilityEstimator,
    pub quiz: StyleQuizScorer,
    pub max_upload_bytes: usize,
    /// Flips to `true` on shutdown; in-flight room analyses fall back early
    pub shutdown: watch::Receiver<bool>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// State backed by the reference catalog and an offline analyzer
    pub fn new() -> Self {
        let (_shutdown_tx, shutdown) = watch::channel(false);
        Self {
            catalog: Arc::new(StaticCatalog::reference()),
            analyzer: RoomAnalyzer::offline(),
            estimator: CompatibilityEstimator::default(),
            quiz: StyleQuizScorer::new(),
            max_upload_bytes: Config::default().max_upload_bytes,
            shutdown,
        }
    }

    pub fn with_catalog(mut self, catalog: Arc<dyn CatalogProvider>) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn with_analyzer(mut self, analyzer: RoomAnalyzer) -> Self {
        self.analyzer = analyzer;
        self
    }

    pub fn with_estimator(mut self, estimator: CompatibilityEstimator) -> Self {
        self.estimator = estimator;
        self
    }

    pub fn with_max_upload_bytes(mut self, max_upload_bytes: usize) -> Self {
        self.max_upload_bytes = max_upload_bytes;
        self
    }

    /// Wires providers from configuration
    ///
    /// Returns the cache writer handle when Redis caching is enabled so the
    /// caller can flush it on shutdown.
    pub fn from_config(
        config: &Config,
        shutdown: watch::Receiver<bool>,
    ) -> anyhow::Result<(Self, Option<CacheWriterHandle>)> {
        let (cache, cache_handle) = match &config.redis_url {
            Some(redis_url) => {
                let (cache, handle) = Cache::new(create_redis_client(redis_url)?);
                (Some(cache), Some(handle))
            }
            None => (None, None),
        };

        let catalog: Arc<dyn CatalogProvider> = match &config.catalog_api_url {
            Some(api_url) => Arc::new(RemoteCatalog::new(
                api_url.clone(),
                cache,
                config.catalog_cache_ttl_secs,
            )),
            None => Arc::new(StaticCatalog::reference()),
        };

        let analysis_provider = config.analysis_api_url.as_ref().map(|api_url| {
            Arc::new(VisionApiProvider::new(
                api_url.clone(),
                config.analysis_api_key.clone(),
            )) as Arc<dyn RoomAnalysisProvider>
        });

        tracing::info!(
            catalog = catalog.name(),
            analysis_provider = analysis_provider.as_ref().map(|p| p.name()).unwrap_or("none"),
            caching = cache_handle.is_some(),
            "Application state configured"
        );

        let state = Self {
            catalog,
            analyzer: RoomAnalyzer::new(
                analysis_provider,
                Duration::from_secs(config.analysis_timeout_secs),
            ),
            estimator: CompatibilityEstimator::default(),
            quiz: StyleQuizScorer::new(),
            max_upload_bytes: config.max_upload_bytes,
            shutdown,
        };

        Ok((state, cache_handle))
    }
}
