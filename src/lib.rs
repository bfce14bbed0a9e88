//! Explorer library exports for testing

use clap::ValueEnum;

pub mod core;
pub mod provider;
pub mod tui;

#[cfg(test)]
pub mod test_support;

/// The data providers Explorer knows how to browse.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ProviderKind {
    #[default]
    Weather,
    Recipes,
    Products,
    Shows,
    Users,
}

impl ProviderKind {
    /// Lowercase name, used for config sections and env var prefixes.
    pub fn name(self) -> &'static str {
        match self {
            ProviderKind::Weather => "weather",
            ProviderKind::Recipes => "recipes",
            ProviderKind::Products => "products",
            ProviderKind::Shows => "shows",
            ProviderKind::Users => "users",
        }
    }

    /// Parses a provider name case-insensitively (as accepted on the CLI).
    pub fn parse(name: &str) -> Option<Self> {
        <Self as ValueEnum>::from_str(name.trim(), true).ok()
    }
}
