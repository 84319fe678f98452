//! Dropdown options for the explorer's filter panel.

use crate::domain::Mission;
use crate::utils::type_segments;
use serde::Serialize;
use std::cmp::Reverse;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    pub agencies: Vec<String>,
    pub statuses: Vec<String>,
    pub targets: Vec<String>,
    /// Newest first
    pub years: Vec<i32>,
    pub mission_types: Vec<String>,
}

impl FilterOptions {
    pub fn from_missions(missions: &[Mission]) -> Self {
        let mut agencies = BTreeSet::new();
        let mut statuses = BTreeSet::new();
        let mut targets = BTreeSet::new();
        let mut years = BTreeSet::new();
        let mut mission_types = BTreeSet::new();

        for m in missions {
            insert_trimmed(&mut agencies, &m.agency);
            insert_trimmed(&mut statuses, &m.status.to_lowercase());
            insert_trimmed(&mut targets, &m.target);
            if m.launch_year > 0 {
                years.insert(Reverse(m.launch_year));
            }
            mission_types.extend(type_segments(&m.mission_type));
        }

        Self {
            agencies: agencies.into_iter().collect(),
            statuses: statuses.into_iter().collect(),
            targets: targets.into_iter().collect(),
            years: years.into_iter().map(|Reverse(y)| y).collect(),
            mission_types: mission_types.into_iter().collect(),
        }
    }
}

fn insert_trimmed(set: &mut BTreeSet<String>, value: &str) {
    let value = value.trim();
    if !value.is_empty() {
        set.insert(value.to_string());
    }
}
