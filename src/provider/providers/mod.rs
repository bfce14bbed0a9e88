pub mod products;
pub mod recipes;
pub mod shows;
pub mod users;
pub mod weather;

use std::sync::Arc;

use crate::ProviderKind;
use crate::provider::{AdapterConfig, ProviderAdapter};

pub use products::ProductProvider;
pub use recipes::RecipeProvider;
pub use shows::ShowProvider;
pub use users::UserProvider;
pub use weather::WeatherProvider;

/// Public endpoint each provider talks to unless configured otherwise.
pub fn default_base_url(kind: ProviderKind) -> &'static str {
    match kind {
        ProviderKind::Weather => weather::DEFAULT_BASE_URL,
        ProviderKind::Recipes => recipes::DEFAULT_BASE_URL,
        ProviderKind::Products => products::DEFAULT_BASE_URL,
        ProviderKind::Shows => shows::DEFAULT_BASE_URL,
        ProviderKind::Users => users::DEFAULT_BASE_URL,
    }
}

/// Build an adapter for `kind` from its resolved settings.
pub fn build_adapter(kind: ProviderKind, config: AdapterConfig) -> Arc<dyn ProviderAdapter> {
    match kind {
        ProviderKind::Weather => Arc::new(WeatherProvider::new(config)),
        ProviderKind::Recipes => Arc::new(RecipeProvider::new(config)),
        ProviderKind::Products => Arc::new(ProductProvider::new(config)),
        ProviderKind::Shows => Arc::new(ShowProvider::new(config)),
        ProviderKind::Users => Arc::new(UserProvider::new(config)),
    }
}
