//! Domain-specific assertion macros for chwilio harnesses.
//!
//! These add context-rich failure messages that make it clear *which* ranking
//! property was violated, printing the full ranked title list.

use chwilio::SearchResult;

/// Titles of a result list, in rank order.
pub fn titles(results: &[SearchResult]) -> Vec<&str> {
    results.iter().map(|r| r.title.as_str()).collect()
}

// ---------------------------------------------------------------------------
// Ranking assertions
// ---------------------------------------------------------------------------

/// Assert that the first result has the expected title.
///
/// ```rust
/// assert_top_result!(results, "Funding & Grants");
/// ```
#[macro_export]
macro_rules! assert_top_result {
    ($results:expr, $title:expr) => {{
        let results: &[chwilio::SearchResult] = &$results;
        let expected: &str = $title;
        match results.first() {
            Some(top) if top.title == expected => {}
            Some(top) => panic!(
                "assert_top_result! failed:\n  expected: {:?}\n  actual:   {:?}\n  ranked:   {:?}",
                expected,
                top.title,
                $crate::common::titles(results)
            ),
            None => panic!("assert_top_result! failed: no results, expected {:?}", expected),
        }
    }};
}

/// Assert that `$higher` appears in the results and ranks above `$lower`
/// (or that `$lower` is absent entirely).
///
/// ```rust
/// assert_ranked_above!(results, "Sport in Schools", "Young Ambassadors");
/// ```
#[macro_export]
macro_rules! assert_ranked_above {
    ($results:expr, $higher:expr, $lower:expr) => {{
        let results: &[chwilio::SearchResult] = &$results;
        let ranked = $crate::common::titles(results);
        let higher: &str = $higher;
        let lower: &str = $lower;
        let hi = ranked.iter().position(|t| *t == higher).unwrap_or_else(|| {
            panic!("assert_ranked_above! failed: {:?} not in {:?}", higher, ranked)
        });
        if let Some(lo) = ranked.iter().position(|t| *t == lower) {
            if hi >= lo {
                panic!(
                    "assert_ranked_above! failed: {:?} (#{}) not above {:?} (#{})\n  ranked: {:?}",
                    higher,
                    hi + 1,
                    lower,
                    lo + 1,
                    ranked
                );
            }
        }
    }};
}

/// Assert that no serialised result object carries a `score` key.
pub fn assert_no_score_field(results: &[SearchResult]) {
    let json = serde_json::to_value(results).unwrap();
    for (i, obj) in json.as_array().unwrap().iter().enumerate() {
        let keys: Vec<&String> = obj.as_object().unwrap().keys().collect();
        assert!(
            !obj.as_object().unwrap().contains_key("score"),
            "result #{i} leaks a score field: {keys:?}"
        );
    }
}
