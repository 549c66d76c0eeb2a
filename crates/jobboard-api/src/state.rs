//! Application state.

use std::sync::Arc;

use jobboard_store::{Store, StoreConfig};

use crate::auth::CredentialService;
use crate::config::ApiConfig;

/// Shared application state. Cloned per request; everything inside is
/// cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub credentials: Arc<CredentialService>,
    pub store: Arc<Store>,
}

impl AppState {
    /// Connect to the store and assemble the state.
    pub async fn new(config: ApiConfig) -> anyhow::Result<Self> {
        let store_config = StoreConfig::from_env()?;
        let store = Store::connect(&store_config).await?;
        Ok(Self::with_store(config, store))
    }

    /// Assemble state around an existing store handle.
    pub fn with_store(config: ApiConfig, store: Store) -> Self {
        let credentials = Arc::new(CredentialService::new(&config.jwt_secret));
        Self {
            config,
            credentials,
            store: Arc::new(store),
        }
    }
}
