//! GitHub user search provider. List items are thin; the profile view needs
//! a second request per user.

use async_trait::async_trait;
use log::info;
use serde::Deserialize;

use crate::provider::http::{build_client, send_json};
use crate::provider::{
    AdapterConfig, Capabilities, DetailRecord, FilterFields, ProviderAdapter, ProviderError,
    ResourceItem,
};

pub const DEFAULT_BASE_URL: &str = "https://api.github.com";
const PER_PAGE: &str = "12";

#[derive(Deserialize, Debug)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<UserSummary>,
}

#[derive(Deserialize, Debug)]
struct UserSummary {
    login: String,
    #[serde(rename = "type")]
    account_type: Option<String>,
    avatar_url: Option<String>,
    html_url: Option<String>,
}

#[derive(Deserialize, Debug)]
struct UserProfile {
    login: String,
    name: Option<String>,
    bio: Option<String>,
    location: Option<String>,
    company: Option<String>,
    blog: Option<String>,
    #[serde(default)]
    public_repos: u64,
    #[serde(default)]
    followers: u64,
    #[serde(default)]
    following: u64,
    avatar_url: Option<String>,
    html_url: Option<String>,
}

fn to_item(user: UserSummary) -> ResourceItem {
    // The login is what the profile endpoint is keyed on, so it doubles as the id.
    ResourceItem::new(user.login.clone(), user.login)
        .with_optional_field("type", user.account_type)
        .with_optional_field("avatar", user.avatar_url)
        .with_optional_field("url", user.html_url)
}

fn to_detail(profile: UserProfile) -> DetailRecord {
    let title = profile
        .name
        .clone()
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| profile.login.clone());
    let mut detail = DetailRecord::new(profile.login.clone(), title)
        .optional_fact("Location", profile.location)
        .optional_fact("Company", profile.company)
        .optional_fact("Website", profile.blog)
        .fact("Public repos", profile.public_repos.to_string())
        .fact("Followers", profile.followers.to_string())
        .fact("Following", profile.following.to_string());
    detail.subtitle = Some(format!("@{}", profile.login));
    detail.body = profile.bio.filter(|b| !b.is_empty());
    detail.image_url = profile.avatar_url;
    detail.link = profile.html_url;
    detail
}

pub struct UserProvider {
    config: AdapterConfig,
    client: reqwest::Client,
}

impl UserProvider {
    pub fn new(config: AdapterConfig) -> Self {
        Self {
            client: build_client(&config),
            config,
        }
    }

    fn get(&self, url: String) -> reqwest::RequestBuilder {
        let request = self
            .client
            .get(url)
            .header("Accept", "application/vnd.github+json");
        match &self.config.api_key {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

#[async_trait]
impl ProviderAdapter for UserProvider {
    fn name(&self) -> &str {
        "users"
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities {
            requires_non_empty_query: true,
            has_separate_detail_fetch: true,
            has_category_list: false,
            local_text_search: false,
        }
    }

    fn filter_fields(&self) -> FilterFields {
        FilterFields::new(&["title"], Some("type"))
    }

    fn default_query(&self) -> Option<&str> {
        self.config.default_query.as_deref()
    }

    async fn fetch_list(&self, query: &str) -> Result<Vec<ResourceItem>, ProviderError> {
        info!("User search request: q={}", query);
        let request = self
            .get(format!("{}/search/users", self.config.base()))
            .query(&[("q", query), ("per_page", PER_PAGE)]);
        let response: SearchResponse = send_json(self.name(), request).await?;
        Ok(response.items.into_iter().map(to_item).collect())
    }

    async fn fetch_detail(&self, id: &str) -> Result<DetailRecord, ProviderError> {
        info!("User profile request: login={}", id);
        let request = self.get(format!("{}/users/{}", self.config.base(), id));
        let profile: UserProfile = send_json(self.name(), request).await?;
        Ok(to_detail(profile))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_detail_prefers_display_name() {
        let json = r#"{
            "login": "torvalds", "name": "Linus Torvalds", "bio": null,
            "location": "Portland, OR", "company": "Linux Foundation", "blog": "",
            "public_repos": 8, "followers": 230000, "following": 0,
            "html_url": "https://github.com/torvalds"
        }"#;
        let profile: UserProfile = serde_json::from_str(json).unwrap();
        let detail = to_detail(profile);
        assert_eq!(detail.id, "torvalds");
        assert_eq!(detail.title, "Linus Torvalds");
        assert_eq!(detail.subtitle.as_deref(), Some("@torvalds"));
        assert!(detail.body.is_none());
        // Empty blog is dropped.
        assert!(!detail.facts.iter().any(|(label, _)| label == "Website"));
        assert!(detail.facts.contains(&("Followers".to_string(), "230000".to_string())));
    }

    #[test]
    fn test_to_detail_falls_back_to_login() {
        let json = r#"{"login": "octocat", "name": null}"#;
        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(to_detail(profile).title, "octocat");
    }

    #[test]
    fn test_search_without_items_is_empty() {
        let response: SearchResponse = serde_json::from_str(r#"{"total_count": 0}"#).unwrap();
        assert!(response.items.is_empty());
    }
}
