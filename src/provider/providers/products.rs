//! FakeStore product catalogue provider.
//!
//! The store has no search endpoint: every query returns the whole flat
//! list and narrowing happens locally through the filter predicates.

use async_trait::async_trait;
use log::{debug, info};
use serde::Deserialize;

use crate::provider::http::{build_client, send_json};
use crate::provider::{
    AdapterConfig, Capabilities, DetailRecord, FilterFields, ProviderAdapter, ProviderError,
    ResourceItem,
};

pub const DEFAULT_BASE_URL: &str = "https://fakestoreapi.com";

#[derive(Deserialize, Debug)]
struct Product {
    id: u64,
    title: String,
    price: f64,
    #[serde(default)]
    description: String,
    #[serde(default)]
    category: String,
    image: Option<String>,
    rating: Option<Rating>,
}

#[derive(Deserialize, Debug)]
struct Rating {
    rate: Option<f64>,
    count: Option<u64>,
}

fn to_item(p: Product) -> ResourceItem {
    let (rate, count) = match p.rating {
        Some(r) => (r.rate, r.count),
        None => (None, None),
    };
    ResourceItem::new(p.id.to_string(), p.title.clone())
        .with_field("title", p.title)
        .with_field("description", p.description)
        .with_field("category", p.category)
        .with_field("price", format!("${:.2}", p.price))
        .with_field(
            "rating",
            format!(
                "{} ({} reviews)",
                rate.map(|r| r.to_string()).unwrap_or_else(|| "N/A".to_string()),
                count.unwrap_or(0)
            ),
        )
        .with_optional_field("image", p.image)
}

pub struct ProductProvider {
    config: AdapterConfig,
    client: reqwest::Client,
}

impl ProductProvider {
    pub fn new(config: AdapterConfig) -> Self {
        Self {
            client: build_client(&config),
            config,
        }
    }
}

#[async_trait]
impl ProviderAdapter for ProductProvider {
    fn name(&self) -> &str {
        "products"
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities {
            requires_non_empty_query: false,
            has_separate_detail_fetch: false,
            has_category_list: true,
            local_text_search: true,
        }
    }

    fn filter_fields(&self) -> FilterFields {
        FilterFields::new(&["title", "description"], Some("category"))
    }

    fn default_query(&self) -> Option<&str> {
        self.config.default_query.as_deref()
    }

    async fn fetch_list(&self, query: &str) -> Result<Vec<ResourceItem>, ProviderError> {
        if !query.is_empty() {
            debug!("Product list has no server-side search, '{}' is filtered locally", query);
        }
        info!("Product list request");
        let request = self.client.get(format!("{}/products", self.config.base()));
        let products: Vec<Product> = send_json(self.name(), request).await?;
        Ok(products.into_iter().map(to_item).collect())
    }

    fn detail_from_item(&self, item: &ResourceItem) -> DetailRecord {
        let mut detail = DetailRecord::new(item.id.clone(), item.display_title.clone())
            .optional_fact("Price", item.field("price"))
            .optional_fact("Rating", item.field("rating"));
        detail.subtitle = item.field("category").map(str::to_string);
        detail.body = item.field("description").map(str::to_string);
        detail.image_url = item.field("image").map(str::to_string);
        detail
    }

    async fn fetch_categories(&self) -> Result<Vec<String>, ProviderError> {
        info!("Product categories request");
        let request = self
            .client
            .get(format!("{}/products/categories", self.config.base()));
        send_json(self.name(), request).await
    }
}
