use std::sync::Arc;

use larder_catalog::{starter_catalog, CatalogStore};
use larder_extraction::{ExtractionClient, OpenAiVisionClient};

/// Shared handles behind the HTTP surface.
///
/// The catalog store and the extraction client are both passed by handle;
/// handlers never reach for ambient global state.
pub struct AppServices {
    catalog: Arc<CatalogStore>,
    extractor: Arc<dyn ExtractionClient>,
}

impl AppServices {
    pub fn new(catalog: Arc<CatalogStore>, extractor: Arc<dyn ExtractionClient>) -> Self {
        Self { catalog, extractor }
    }

    pub fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    pub fn extractor(&self) -> &dyn ExtractionClient {
        self.extractor.as_ref()
    }
}

/// Production wiring: seeded catalog + env-configured provider client.
pub fn build_services() -> AppServices {
    AppServices::new(
        Arc::new(CatalogStore::with_items(starter_catalog())),
        Arc::new(OpenAiVisionClient::from_env()),
    )
}
