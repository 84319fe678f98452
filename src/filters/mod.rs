/// Explorer filtering: query-string derivation, predicate evaluation and
/// heading resolution over an immutable catalog snapshot.
mod criteria;
mod options;
mod predicate;
mod view;

pub use criteria::{FilterCriteria, FilterState};
pub use options::FilterOptions;
pub use predicate::matches;
pub use view::{resolve_view, ViewMetadata};

use crate::domain::Mission;
use serde::Serialize;
use std::collections::HashMap;

/// Outcome of one explorer query
#[derive(Debug, Clone, Serialize)]
pub struct Exploration {
    #[serde(flatten)]
    pub view: ViewMetadata,
    pub specific_mode: bool,
    pub criteria: FilterCriteria,
    /// Canonical `(key, value)` query pairs for replace-navigation
    pub canonical: Vec<(&'static str, String)>,
    pub total: usize,
    pub count: usize,
    pub missions: Vec<Mission>,
}

/// Run an explorer query against the catalog
pub fn explore(
    missions: &[Mission],
    params: &HashMap<String, String>,
    current_year: i32,
) -> Exploration {
    let state = FilterState::derive(params);
    let view = resolve_view(&state.criteria);

    let matched: Vec<Mission> = missions
        .iter()
        .filter(|m| matches(m, &state, current_year))
        .cloned()
        .collect();

    Exploration {
        view,
        specific_mode: state.specific_mode,
        total: missions.len(),
        count: matched.len(),
        canonical: state.criteria.to_query_pairs(),
        criteria: state.criteria,
        missions: matched,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<Mission> {
        serde_json::from_value(serde_json::json!([
            {"name": "Voyager 1", "agency": "NASA", "launchYear": 1977, "status": "Active",
             "target": "Outer Solar System", "missionType": "Flyby, Interstellar"},
            {"name": "Mangalyaan", "agency": "ISRO", "launchYear": 2013, "status": "Completed",
             "target": "Mars", "missionType": "Orbiter"},
            {"name": "Perseverance", "agency": "NASA", "launchYear": 2020, "status": "Active",
             "target": "Mars (Jezero Crater)", "missionType": "Rover"},
            {"name": "Artemis III", "agency": "NASA", "launchYear": 2027, "status": "Planned",
             "target": "Moon", "missionType": "Crewed Lander"}
        ]))
        .unwrap()
    }

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn names(e: &Exploration) -> Vec<&str> {
        e.missions.iter().map(|m| m.name.as_str()).collect()
    }

    #[test]
    fn test_unfiltered_view() {
        let e = explore(&catalog(), &HashMap::new(), 2024);
        assert_eq!(e.count, 4);
        assert_eq!(e.total, 4);
        assert_eq!(e.view, ViewMetadata::default());
    }

    #[test]
    fn test_type_link_with_specific_override() {
        let e = explore(&catalog(), &params(&[("type", "mars"), ("agency", "isro")]), 2024);
        assert!(e.specific_mode);
        assert_eq!(names(&e), ["Mangalyaan"]);
        assert_eq!(e.view.title, "Mars Missions");
    }

    #[test]
    fn test_type_link_alone() {
        let e = explore(&catalog(), &params(&[("type", "mars")]), 2024);
        assert_eq!(names(&e), ["Mangalyaan", "Perseverance"]);
    }

    #[test]
    fn test_all_sentinels_keep_type_link_matching() {
        let e = explore(
            &catalog(),
            &params(&[
                ("agency", "all"),
                ("status", "all"),
                ("target", "all"),
                ("year", "all"),
                ("missionType", "all"),
                ("type", "mars"),
            ]),
            2024,
        );
        assert!(!e.specific_mode);
        assert_eq!(names(&e), ["Mangalyaan", "Perseverance"]);
        assert_eq!(e.view.title, "Mars Missions");
    }

    #[test]
    fn test_query_with_trailing_space_matches_as_typed() {
        let e = explore(&catalog(), &params(&[("q", "voyager ")]), 2024);
        assert_eq!(names(&e), ["Voyager 1"]);
        // "Mars" alone no longer matches, "Mars (Jezero Crater)" does
        let e = explore(&catalog(), &params(&[("q", "mars ")]), 2024);
        assert_eq!(names(&e), ["Perseverance"]);
    }

    #[test]
    fn test_general_filters() {
        let recent = explore(&catalog(), &params(&[("filter", "recent")]), 2024);
        assert_eq!(names(&recent), ["Perseverance", "Artemis III"]);
        let future = explore(&catalog(), &params(&[("filter", "future")]), 2024);
        assert_eq!(names(&future), ["Artemis III"]);
        assert_eq!(future.view.title, "Future Missions");
    }

    #[test]
    fn test_empty_catalog_yields_empty_result() {
        let e = explore(&[], &params(&[("q", "mars")]), 2024);
        assert_eq!(e.count, 0);
        assert!(e.missions.is_empty());
    }

    #[test]
    fn test_serialized_shape() {
        let e = explore(&catalog(), &params(&[("filter", "iconic")]), 2024);
        let json = serde_json::to_value(&e).unwrap();
        assert_eq!(json["title"], "Iconic Missions");
        assert_eq!(json["specific_mode"], false);
        assert_eq!(json["criteria"]["general"], "iconic");
        assert_eq!(json["canonical"], serde_json::json!([["filter", "iconic"]]));
        assert_eq!(json["missions"][0]["name"], "Voyager 1");
    }
}
