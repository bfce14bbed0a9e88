//! # Provider Adapters
//!
//! Everything that knows about a specific external API lives here. Each
//! adapter translates one provider's request/response shape into the
//! generic `ResourceItem` / `DetailRecord` model the core works with.

pub mod adapter;
pub mod http;
pub mod providers;
pub mod types;

pub use adapter::{Capabilities, FilterFields, ProviderAdapter, ProviderError};
pub use providers::{
    ProductProvider, RecipeProvider, ShowProvider, UserProvider, WeatherProvider, build_adapter,
};
pub use types::{AdapterConfig, DetailRecord, ResourceItem};
