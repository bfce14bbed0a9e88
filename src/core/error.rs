//! # Explorer Errors
//!
//! Every failure the core can surface to the presentation layer. None of
//! these are fatal; they become state and are rendered.

use std::fmt;

use crate::provider::ProviderError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    EmptyQuery,
    NoResults,
    ProviderError,
    DetailFetchError,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExplorerError {
    /// The provider needs a query and none was given. No request was made.
    EmptyQuery,
    /// The provider answered successfully with zero items.
    NoResults,
    /// The primary (list) request failed.
    Provider { status: Option<u16>, message: String },
    /// The detail request failed. The list is left as it was.
    DetailFetch { status: Option<u16>, message: String },
}

impl ExplorerError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ExplorerError::EmptyQuery => ErrorKind::EmptyQuery,
            ExplorerError::NoResults => ErrorKind::NoResults,
            ExplorerError::Provider { .. } => ErrorKind::ProviderError,
            ExplorerError::DetailFetch { .. } => ErrorKind::DetailFetchError,
        }
    }

    pub fn detail(err: ProviderError) -> Self {
        ExplorerError::DetailFetch {
            status: err.status(),
            message: err.to_string(),
        }
    }
}

impl From<ProviderError> for ExplorerError {
    fn from(err: ProviderError) -> Self {
        ExplorerError::Provider {
            status: err.status(),
            message: err.to_string(),
        }
    }
}

impl fmt::Display for ExplorerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExplorerError::EmptyQuery => write!(f, "Please enter a search term"),
            ExplorerError::NoResults => write!(f, "No results found. Try another search!"),
            ExplorerError::Provider { message, .. } => write!(f, "Error fetching results: {message}"),
            ExplorerError::DetailFetch { message, .. } => {
                write!(f, "Error fetching details: {message}")
            }
        }
    }
}

impl std::error::Error for ExplorerError {}
