//! Filter state derivation from the explorer's query string.
//!
//! Two modes exist. Specific mode is entered as soon as any precise field
//! (`q`, `agency`, `status`, `target`, `year`, `missionType`) carries a real
//! value, and it suppresses the `filter`/`type` link filters for matching.
//! The link filters are still kept so the heading can be resolved from them.

use crate::domain::GeneralFilter;
use crate::utils::{constraint, param, text_param};
use serde::Serialize;
use std::collections::HashMap;

pub const PARAM_QUERY: &str = "q";
pub const PARAM_FILTER: &str = "filter";
pub const PARAM_TYPE: &str = "type";
pub const PARAM_AGENCY: &str = "agency";
pub const PARAM_STATUS: &str = "status";
pub const PARAM_TARGET: &str = "target";
pub const PARAM_YEAR: &str = "year";
pub const PARAM_MISSION_TYPE: &str = "missionType";

/// Normalized explorer filters. `None` always means "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    pub query: Option<String>,
    pub general: Option<String>,
    pub type_slug: Option<String>,
    pub agency: Option<String>,
    pub status: Option<String>,
    pub target: Option<String>,
    pub year: Option<String>,
    pub mission_type: Option<String>,
}

impl FilterCriteria {
    pub fn from_query(params: &HashMap<String, String>) -> Self {
        let lower = |key| constraint(params, key).map(str::to_lowercase);
        Self {
            query: text_param(params, PARAM_QUERY).map(str::to_string),
            general: param(params, PARAM_FILTER).map(str::to_lowercase),
            type_slug: param(params, PARAM_TYPE).map(str::to_lowercase),
            agency: lower(PARAM_AGENCY),
            status: lower(PARAM_STATUS),
            target: lower(PARAM_TARGET),
            year: constraint(params, PARAM_YEAR).map(str::to_string),
            mission_type: lower(PARAM_MISSION_TYPE),
        }
    }

    pub fn is_specific(&self) -> bool {
        self.query.is_some()
            || self.agency.is_some()
            || self.status.is_some()
            || self.target.is_some()
            || self.year.is_some()
            || self.mission_type.is_some()
    }

    /// Recognized general filter; unknown slugs constrain nothing
    pub fn general_filter(&self) -> Option<GeneralFilter> {
        self.general.as_deref().and_then(GeneralFilter::from_slug)
    }

    /// The type that drives matching: the dropdown selection wins over the
    /// incoming `type=` link.
    pub fn effective_type(&self) -> Option<&str> {
        self.mission_type.as_deref().or(self.type_slug.as_deref())
    }

    /// Query pairs for a canonical explorer URL, absent values omitted
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        [
            (PARAM_QUERY, &self.query),
            (PARAM_FILTER, &self.general),
            (PARAM_TYPE, &self.type_slug),
            (PARAM_AGENCY, &self.agency),
            (PARAM_STATUS, &self.status),
            (PARAM_TARGET, &self.target),
            (PARAM_YEAR, &self.year),
            (PARAM_MISSION_TYPE, &self.mission_type),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.clone().map(|v| (key, v)))
        .collect()
    }
}

/// Derived filter state for one explorer request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterState {
    pub criteria: FilterCriteria,
    pub specific_mode: bool,
}

impl FilterState {
    pub fn derive(params: &HashMap<String, String>) -> Self {
        let criteria = FilterCriteria::from_query(params);
        let specific_mode = criteria.is_specific();
        Self {
            criteria,
            specific_mode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_empty_query_is_unconstrained() {
        let state = FilterState::derive(&HashMap::new());
        assert_eq!(state.criteria, FilterCriteria::default());
        assert!(!state.specific_mode);
    }

    #[test]
    fn test_all_sentinels_are_not_specific() {
        let state = FilterState::derive(&params(&[
            ("agency", "all"),
            ("status", "all"),
            ("target", "all"),
            ("year", "all"),
            ("missionType", "all"),
            ("type", "mars"),
        ]));
        assert!(!state.specific_mode);
        assert_eq!(state.criteria.type_slug.as_deref(), Some("mars"));
    }

    #[test]
    fn test_any_precise_field_enters_specific_mode() {
        for key in ["q", "agency", "status", "target", "year", "missionType"] {
            let state = FilterState::derive(&params(&[(key, "x"), ("filter", "iconic")]));
            assert!(state.specific_mode, "{key} should enter specific mode");
        }
    }

    #[test]
    fn test_link_filters_alone_are_not_specific() {
        let state = FilterState::derive(&params(&[("filter", "recent"), ("type", "rover")]));
        assert!(!state.specific_mode);
        assert_eq!(state.criteria.general_filter(), Some(GeneralFilter::Recent));
        assert_eq!(state.criteria.effective_type(), Some("rover"));
    }

    #[test]
    fn test_blank_values_are_absent() {
        let state = FilterState::derive(&params(&[("q", ""), ("agency", "   ")]));
        assert!(!state.specific_mode);
    }

    #[test]
    fn test_dropdown_type_overrides_link_type() {
        let state = FilterState::derive(&params(&[("type", "rover"), ("missionType", "Orbiter")]));
        assert_eq!(state.criteria.effective_type(), Some("orbiter"));
        assert_eq!(state.criteria.type_slug.as_deref(), Some("rover"));
    }

    #[test]
    fn test_values_are_lower_cased() {
        let state = FilterState::derive(&params(&[("agency", "NASA"), ("q", "Voyager")]));
        assert_eq!(state.criteria.agency.as_deref(), Some("nasa"));
        // free text is compared case-insensitively later, kept as typed
        assert_eq!(state.criteria.query.as_deref(), Some("Voyager"));
    }

    #[test]
    fn test_unknown_general_filter_is_ignored() {
        let state = FilterState::derive(&params(&[("filter", "popular")]));
        assert_eq!(state.criteria.general_filter(), None);
        assert_eq!(state.criteria.general.as_deref(), Some("popular"));
    }

    #[test]
    fn test_to_query_pairs_omits_absent_values() {
        let state = FilterState::derive(&params(&[
            ("agency", "esa"),
            ("year", "all"),
            ("type", "moon"),
        ]));
        assert_eq!(
            state.criteria.to_query_pairs(),
            vec![("type", "moon".to_string()), ("agency", "esa".to_string())]
        );
    }

    #[test]
    fn test_free_text_is_not_trimmed() {
        let state = FilterState::derive(&params(&[("q", " Mars ")]));
        assert_eq!(state.criteria.query.as_deref(), Some(" Mars "));
        assert!(state.specific_mode);
    }
}
