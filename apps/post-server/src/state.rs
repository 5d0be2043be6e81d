//! Application state - shared across all handlers.

use std::sync::Arc;

use post_core::PostService;
use post_core::ports::{PostStore, TokenService};
use post_infra::InMemoryPostStore;

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: PostService,
    pub token_service: Option<Arc<dyn TokenService>>,
}

impl AppState {
    /// State over `store` with the bearer-token guard disabled.
    pub fn with_store(store: Arc<dyn PostStore>) -> Self {
        Self {
            posts: PostService::new(store),
            token_service: None,
        }
    }

    pub fn with_token_service(mut self, token_service: Arc<dyn TokenService>) -> Self {
        self.token_service = Some(token_service);
        self
    }

    /// Build the application state with appropriate implementations.
    ///
    /// A configured database that cannot be reached is fatal.
    pub async fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
        let store = store_from_config(config).await?;
        let mut state = Self::with_store(store);

        if let Some(token_service) = token_service_from_config(config) {
            state = state.with_token_service(token_service);
        }

        tracing::info!(
            auth = state.token_service.is_some(),
            "Application state initialized"
        );
        Ok(state)
    }
}

#[cfg(feature = "postgres")]
async fn store_from_config(config: &AppConfig) -> anyhow::Result<Arc<dyn PostStore>> {
    use anyhow::Context;
    use post_infra::PostgresPostStore;
    use post_infra::database::connect;

    match &config.database {
        Some(db_config) => {
            let conn = connect(db_config)
                .await
                .context("failed to connect to the post database")?;
            Ok(Arc::new(PostgresPostStore::new(conn)))
        }
        None => {
            tracing::warn!("DATABASE_URL not set. Posts are kept in memory and lost on restart.");
            Ok(Arc::new(InMemoryPostStore::new()))
        }
    }
}

#[cfg(not(feature = "postgres"))]
async fn store_from_config(config: &AppConfig) -> anyhow::Result<Arc<dyn PostStore>> {
    if config.database.is_some() {
        anyhow::bail!("DATABASE_URL is set but the server was built without the postgres feature");
    }
    tracing::info!("Running without postgres feature - using in-memory store");
    Ok(Arc::new(InMemoryPostStore::new()))
}

#[cfg(feature = "auth")]
fn token_service_from_config(config: &AppConfig) -> Option<Arc<dyn TokenService>> {
    use post_infra::{JwtConfig, JwtTokenService};

    match &config.auth {
        Some(auth) => Some(Arc::new(JwtTokenService::new(JwtConfig {
            secret: auth.jwt_secret.clone(),
            issuer: auth.issuer.clone(),
        }))),
        None => {
            tracing::warn!("AUTH_JWT_SECRET not set. RPC calls are not authenticated.");
            None
        }
    }
}

#[cfg(not(feature = "auth"))]
fn token_service_from_config(config: &AppConfig) -> Option<Arc<dyn TokenService>> {
    if config.auth.is_some() {
        tracing::warn!("AUTH_JWT_SECRET set but built without the auth feature; ignoring it");
    }
    None
}
