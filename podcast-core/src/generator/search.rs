//! Gossip search over the fixture set

use crate::fixtures::GOSSIPS;
use crate::types::{Category, GossipItem, SearchParams, SearchParamsEcho, SearchResult};

/// Filter the fixture set by minimum score (inclusive), then truncate to the limit
pub fn search_gossips(params: &SearchParams) -> SearchResult {
    let limit = params.limit();
    let min_score = params.min_score();

    let gossips: Vec<GossipItem> = GOSSIPS
        .iter()
        .filter(|gossip| gossip.score >= min_score)
        .take(limit)
        .copied()
        .collect();

    let mut categories: Vec<Category> = Vec::new();
    for gossip in &gossips {
        if !categories.contains(&gossip.category) {
            categories.push(gossip.category);
        }
    }

    SearchResult {
        total_found: gossips.len(),
        gossips,
        categories,
        search_params: SearchParamsEcho {
            limit,
            min_score: params.min_score_echo(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn search(limit: Option<usize>, min_score: Option<f64>) -> SearchResult {
        search_gossips(&SearchParams::new(limit, min_score))
    }

    #[test]
    fn test_defaults_return_all_fixtures() {
        let result = search(None, None);
        assert_eq!(result.total_found, 3);
        assert_eq!(result.search_params.limit, 5);
        assert_eq!(result.search_params.min_score.as_f64(), Some(6.0));
        assert_eq!(
            result.categories,
            vec![Category::Relacionamento, Category::Carreira]
        );
    }

    #[test]
    fn test_limit_and_min_score() {
        let result = search(Some(2), Some(7.5));
        let names: Vec<&str> = result.gossips.iter().map(|g| g.celebrity).collect();
        assert_eq!(names, vec!["Anitta", "Bruna Marquezine"]);
        assert_eq!(result.categories, vec![Category::Relacionamento]);
    }

    #[test]
    fn test_min_score_is_inclusive() {
        let result = search(None, Some(7.2));
        assert_eq!(result.total_found, 3);

        let result = search(None, Some(7.21));
        assert_eq!(result.total_found, 2);
    }

    #[test]
    fn test_limit_applies_after_filtering() {
        // Filtering first leaves Xuxa out, so the single slot goes to Anitta
        let result = search(Some(1), Some(8.0));
        assert_eq!(result.total_found, 1);
        assert_eq!(result.gossips[0].celebrity, "Anitta");

        let result = search(Some(2), Some(7.8));
        assert_eq!(result.total_found, 2);
    }

    #[test]
    fn test_zero_limit_and_high_threshold() {
        assert_eq!(search(Some(0), None).total_found, 0);

        let result = search(None, Some(9.0));
        assert!(result.gossips.is_empty());
        assert!(result.categories.is_empty());
    }
}
