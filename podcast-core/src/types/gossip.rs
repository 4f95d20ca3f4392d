//! Celebrity gossip records and search results

use serde::Serialize;
use serde_json::Number;

/// Gossip category
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Relationships and romance
    Relacionamento,

    /// Career news
    Carreira,
}

/// A single celebrity-news record
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct GossipItem {
    pub title: &'static str,
    pub content: &'static str,
    pub celebrity: &'static str,
    pub category: Category,

    /// Relevance score, 0 to 10
    pub score: f64,

    /// Name of the outlet that published it
    pub source: &'static str,
    pub url: &'static str,
}

/// Search parameters as resolved after applying defaults
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SearchParamsEcho {
    pub limit: usize,

    /// Echoed in the caller's own numeric form (`7` stays `7`)
    pub min_score: Number,
}

/// Gossip search response payload
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SearchResult {
    pub gossips: Vec<GossipItem>,
    pub total_found: usize,

    /// Distinct categories among `gossips`, in first-seen order
    pub categories: Vec<Category>,
    pub search_params: SearchParamsEcho,
}
