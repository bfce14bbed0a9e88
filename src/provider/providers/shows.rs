//! TVMaze show provider: search when a query is present, the first listing
//! page when it is not.

use async_trait::async_trait;
use log::info;
use serde::Deserialize;

use crate::provider::http::{build_client, send_json, strip_tags};
use crate::provider::{
    AdapterConfig, Capabilities, DetailRecord, FilterFields, ProviderAdapter, ProviderError,
    ResourceItem,
};

pub const DEFAULT_BASE_URL: &str = "https://api.tvmaze.com";

#[derive(Deserialize, Debug)]
struct SearchHit {
    show: Show,
}

#[derive(Deserialize, Debug)]
struct Show {
    id: u64,
    name: String,
    #[serde(rename = "type")]
    show_type: Option<String>,
    language: Option<String>,
    #[serde(default)]
    genres: Vec<String>,
    rating: Option<ShowRating>,
    image: Option<ShowImage>,
    summary: Option<String>,
    url: Option<String>,
    premiered: Option<String>,
    status: Option<String>,
}

#[derive(Deserialize, Debug)]
struct ShowRating {
    average: Option<f64>,
}

#[derive(Deserialize, Debug)]
struct ShowImage {
    medium: Option<String>,
    original: Option<String>,
}

fn to_item(show: Show) -> ResourceItem {
    let image = show.image.and_then(|i| i.original.or(i.medium));
    ResourceItem::new(show.id.to_string(), show.name)
        .with_field("type", show.show_type.unwrap_or_else(|| "Show".to_string()))
        .with_optional_field("language", show.language)
        .with_field("genres", show.genres.join(", "))
        .with_optional_field(
            "rating",
            show.rating
                .and_then(|r| r.average)
                .map(|avg| format!("{avg:.1}/10")),
        )
        .with_optional_field("premiered", show.premiered)
        .with_optional_field("status", show.status)
        .with_optional_field("summary", show.summary.map(|s| strip_tags(&s)))
        .with_optional_field("image", image)
        .with_optional_field("url", show.url)
}

pub struct ShowProvider {
    config: AdapterConfig,
    client: reqwest::Client,
}

impl ShowProvider {
    pub fn new(config: AdapterConfig) -> Self {
        Self {
            client: build_client(&config),
            config,
        }
    }
}

#[async_trait]
impl ProviderAdapter for ShowProvider {
    fn name(&self) -> &str {
        "shows"
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities {
            requires_non_empty_query: false,
            has_separate_detail_fetch: false,
            has_category_list: false,
            local_text_search: false,
        }
    }

    fn filter_fields(&self) -> FilterFields {
        FilterFields::new(&["title", "genres", "summary"], Some("type"))
    }

    fn default_query(&self) -> Option<&str> {
        self.config.default_query.as_deref()
    }

    async fn fetch_list(&self, query: &str) -> Result<Vec<ResourceItem>, ProviderError> {
        let shows: Vec<Show> = if query.is_empty() {
            info!("Show listing request: page=0");
            let request = self
                .client
                .get(format!("{}/shows", self.config.base()))
                .query(&[("page", "0")]);
            send_json(self.name(), request).await?
        } else {
            info!("Show search request: q={}", query);
            let request = self
                .client
                .get(format!("{}/search/shows", self.config.base()))
                .query(&[("q", query)]);
            let hits: Vec<SearchHit> = send_json(self.name(), request).await?;
            hits.into_iter().map(|hit| hit.show).collect()
        };
        Ok(shows.into_iter().map(to_item).collect())
    }

    fn detail_from_item(&self, item: &ResourceItem) -> DetailRecord {
        let mut detail = DetailRecord::new(item.id.clone(), item.display_title.clone())
            .optional_fact("Type", item.field("type"))
            .optional_fact("Rating", item.field("rating"))
            .optional_fact("Language", item.field("language"))
            .optional_fact("Premiered", item.field("premiered"))
            .optional_fact("Status", item.field("status"));
        if let Some(genres) = item.field("genres") {
            detail.entries = genres.split(", ").map(str::to_string).collect();
            detail.entries_label = Some("Genres".to_string());
        }
        detail.body = item.field("summary").map(str::to_string);
        detail.image_url = item.field("image").map(str::to_string);
        detail.link = item.field("url").map(str::to_string);
        detail
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_hit_unwraps_show() {
        let json = r#"[{"score": 0.9, "show": {
            "id": 169, "name": "Breaking Bad", "type": "Scripted", "language": "English",
            "genres": ["Drama", "Crime", "Thriller"],
            "rating": {"average": 9.2},
            "image": {"medium": "m.jpg", "original": "o.jpg"},
            "summary": "<p><b>Breaking Bad</b> follows Walter White.</p>",
            "url": "https://www.tvmaze.com/shows/169/breaking-bad"
        }}]"#;
        let hits: Vec<SearchHit> = serde_json::from_str(json).unwrap();
        let item = to_item(hits.into_iter().next().unwrap().show);
        assert_eq!(item.display_title, "Breaking Bad");
        assert_eq!(item.field("rating"), Some("9.2/10"));
        assert_eq!(item.field("summary"), Some("Breaking Bad follows Walter White."));
        assert_eq!(item.field("image"), Some("o.jpg"));
        assert_eq!(item.field("genres"), Some("Drama, Crime, Thriller"));
    }

    #[test]
    fn test_sparse_show_defaults_type() {
        let json = r#"{"id": 1, "name": "Under the Dome", "rating": {"average": null}, "image": null}"#;
        let show: Show = serde_json::from_str(json).unwrap();
        let item = to_item(show);
        assert_eq!(item.field("type"), Some("Show"));
        assert_eq!(item.field("rating"), None);
        assert_eq!(item.field("genres"), None);

        let provider = ShowProvider::new(AdapterConfig::new(DEFAULT_BASE_URL));
        let detail = provider.detail_from_item(&item);
        assert!(detail.entries.is_empty());
        assert_eq!(detail.facts, vec![("Type".to_string(), "Show".to_string())]);
    }
}
