//! # Search History
//!
//! A small most-recently-used list of queries that produced results, offered
//! for quick re-search. Lives for the session only.

/// Maximum number of remembered queries.
pub const HISTORY_CAPACITY: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryCache {
    entries: Vec<String>,
    capacity: usize,
}

impl Default for HistoryCache {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryCache {
    pub fn new() -> Self {
        Self::with_capacity(HISTORY_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Moves `query` to the front, evicting the oldest entry past capacity.
    /// Blank queries are ignored.
    pub fn record(&mut self, query: &str) {
        let query = query.trim();
        if query.is_empty() {
            return;
        }
        self.entries.retain(|entry| entry != query);
        self.entries.insert(0, query.to_string());
        self.entries.truncate(self.capacity);
    }

    /// Newest first.
    pub fn list(&self) -> &[String] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
