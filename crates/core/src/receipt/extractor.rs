//! The receipt-extraction capability and its client cache.

use std::path::PathBuf;
use std::sync::Arc;

use moka::sync::Cache;
use tabsplit_shared::config::ExtractorConfig;
use tracing::debug;

use super::error::ExtractionError;
use super::types::ReceiptData;

/// Default number of extractor client instances to keep alive.
const DEFAULT_CACHE_CAPACITY: u64 = 16;

/// The vision-model capability: given receipt images, produce structured
/// purchase data.
///
/// Implementations own model invocation entirely (prompting, encoding,
/// retries, timeouts); the core only sees this contract.
pub trait ReceiptExtractor: Send + Sync {
    /// Extracts structured information from one or more receipt images.
    fn extract(
        &self,
        images: &[PathBuf],
    ) -> impl std::future::Future<Output = Result<ReceiptData, ExtractionError>> + Send;
}

/// Validates extraction input paths before any model call.
///
/// # Errors
///
/// Returns an error if no paths are supplied or any file is missing.
pub fn validate_image_paths(images: &[PathBuf]) -> Result<(), ExtractionError> {
    if images.is_empty() {
        return Err(ExtractionError::NoImages);
    }
    for path in images {
        if !path.exists() {
            return Err(ExtractionError::ImageNotFound(path.clone()));
        }
    }
    Ok(())
}

/// Cache of extractor client instances, keyed by configuration.
///
/// Model clients are expensive to construct, so one instance is shared per
/// configuration tuple. The cache is explicit and injectable, owned by the
/// process lifecycle rather than hidden module state, which keeps tests
/// free to substitute fakes.
#[derive(Clone)]
pub struct ExtractorCache<E> {
    cache: Cache<ExtractorConfig, Arc<E>>,
}

impl<E: Send + Sync + 'static> ExtractorCache<E> {
    /// Creates a cache with the default capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CACHE_CAPACITY)
    }

    /// Creates a cache holding at most `max_capacity` client instances.
    #[must_use]
    pub fn with_capacity(max_capacity: u64) -> Self {
        Self {
            cache: Cache::new(max_capacity),
        }
    }

    /// Returns the cached client for `config`, building one with `build`
    /// on first use.
    pub fn get_or_build(
        &self,
        config: &ExtractorConfig,
        build: impl FnOnce(&ExtractorConfig) -> E,
    ) -> Arc<E> {
        self.cache.get_with(config.clone(), || {
            debug!(model = %config.model, "creating new extractor instance");
            Arc::new(build(config))
        })
    }

    /// Number of cached client instances.
    #[must_use]
    pub fn len(&self) -> u64 {
        self.cache.run_pending_tasks();
        self.cache.entry_count()
    }

    /// Returns true if no clients are cached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<E: Send + Sync + 'static> Default for ExtractorCache<E> {
    fn default() -> Self {
        Self::new()
    }
}
