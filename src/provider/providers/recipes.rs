//! TheMealDB recipe search provider.

use std::collections::HashMap;

use async_trait::async_trait;
use log::info;
use serde::Deserialize;

use crate::provider::http::{build_client, send_json};
use crate::provider::{
    AdapterConfig, Capabilities, DetailRecord, FilterFields, ProviderAdapter, ProviderError,
    ResourceItem,
};

pub const DEFAULT_BASE_URL: &str = "https://www.themealdb.com/api/json/v1/1";

/// TheMealDB numbers its ingredient/measure columns 1 through 20.
const MAX_INGREDIENTS: usize = 20;
const INGREDIENT_PREFIX: &str = "ingredient.";

#[derive(Deserialize, Debug)]
struct SearchResponse {
    /// `null` when nothing matched.
    meals: Option<Vec<Meal>>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct Meal {
    id_meal: String,
    str_meal: String,
    str_category: Option<String>,
    str_area: Option<String>,
    str_instructions: Option<String>,
    str_meal_thumb: Option<String>,
    str_tags: Option<String>,
    str_youtube: Option<String>,
    /// The numbered `strIngredientN` / `strMeasureN` columns.
    #[serde(flatten)]
    columns: HashMap<String, serde_json::Value>,
}

impl Meal {
    fn column(&self, name: &str) -> Option<&str> {
        self.columns
            .get(name)
            .and_then(|v| v.as_str())
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// "Ingredient - measure" lines, skipping blank ingredient slots.
    fn ingredients(&self) -> Vec<String> {
        (1..=MAX_INGREDIENTS)
            .filter_map(|i| {
                let ingredient = self.column(&format!("strIngredient{i}"))?;
                Some(match self.column(&format!("strMeasure{i}")) {
                    Some(measure) => format!("{ingredient} - {measure}"),
                    None => ingredient.to_string(),
                })
            })
            .collect()
    }
}

fn to_item(meal: Meal) -> ResourceItem {
    let ingredients = meal.ingredients();
    let mut item = ResourceItem::new(meal.id_meal, meal.str_meal)
        .with_optional_field("category", meal.str_category)
        .with_optional_field("area", meal.str_area)
        .with_optional_field("tags", meal.str_tags)
        .with_optional_field("instructions", meal.str_instructions)
        .with_optional_field("thumbnail", meal.str_meal_thumb)
        .with_optional_field("video", meal.str_youtube);
    for (i, line) in ingredients.into_iter().enumerate() {
        item = item.with_field(&format!("{INGREDIENT_PREFIX}{}", i + 1), line);
    }
    item
}

pub struct RecipeProvider {
    config: AdapterConfig,
    client: reqwest::Client,
}

impl RecipeProvider {
    pub fn new(config: AdapterConfig) -> Self {
        Self {
            client: build_client(&config),
            config,
        }
    }
}

#[async_trait]
impl ProviderAdapter for RecipeProvider {
    fn name(&self) -> &str {
        "recipes"
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities {
            requires_non_empty_query: true,
            has_separate_detail_fetch: false,
            has_category_list: false,
            local_text_search: false,
        }
    }

    fn filter_fields(&self) -> FilterFields {
        FilterFields::new(&["title", "category", "area", "tags"], Some("category"))
    }

    fn default_query(&self) -> Option<&str> {
        self.config.default_query.as_deref()
    }

    async fn fetch_list(&self, query: &str) -> Result<Vec<ResourceItem>, ProviderError> {
        info!("Recipe search request: s={}", query);
        let request = self
            .client
            .get(format!("{}/search.php", self.config.base()))
            .query(&[("s", query)]);
        let response: SearchResponse = send_json(self.name(), request).await?;
        Ok(response
            .meals
            .unwrap_or_default()
            .into_iter()
            .map(to_item)
            .collect())
    }

    fn detail_from_item(&self, item: &ResourceItem) -> DetailRecord {
        let mut detail = DetailRecord::new(item.id.clone(), item.display_title.clone())
            .optional_fact("Category", item.field("category"))
            .optional_fact("Cuisine", item.field("area"))
            .optional_fact("Tags", item.field("tags"));
        detail.entries = item
            .fields
            .iter()
            .filter(|(key, _)| key.starts_with(INGREDIENT_PREFIX))
            .map(|(_, value)| value.clone())
            .collect();
        detail.entries_label = Some("Ingredients".to_string());
        detail.body = item.field("instructions").map(str::to_string);
        detail.image_url = item.field("thumbnail").map(str::to_string);
        detail.link = item.field("video").map(str::to_string);
        detail
    }
}
