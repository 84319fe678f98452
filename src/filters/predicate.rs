//! Mission predicate evaluation over a derived [`FilterState`].

use super::criteria::{FilterCriteria, FilterState};
use crate::domain::{GeneralFilter, Mission, MissionType};
use crate::utils::{contains_ci, normalize_slug, type_segments};

/// Missions shown under the "iconic" filter.
// TODO: replace with an `iconic` flag on the catalog record once the upstream
// API exposes one.
pub const ICONIC_MISSIONS: [&str; 3] = [
    "Voyager 1",
    "Hubble Space Telescope",
    "James Webb Space Telescope",
];

/// A mission counts as recent when launched within this many years
pub const RECENT_YEARS: i32 = 5;

/// Does `mission` pass every active constraint in `state`?
pub fn matches(mission: &Mission, state: &FilterState, current_year: i32) -> bool {
    let criteria = &state.criteria;

    if let Some(q) = criteria.query.as_deref() {
        let hit = contains_ci(&mission.name, q)
            || contains_ci(&mission.agency, q)
            || contains_ci(&mission.target, q);
        if !hit {
            return false;
        }
    }

    if state.specific_mode {
        matches_specific(mission, criteria)
    } else {
        matches_general(mission, criteria, current_year) && matches_link_type(mission, criteria)
    }
}

fn matches_specific(mission: &Mission, criteria: &FilterCriteria) -> bool {
    criteria
        .agency
        .as_deref()
        .map_or(true, |a| mission.agency.to_lowercase() == a)
        && criteria
            .status
            .as_deref()
            .map_or(true, |s| mission.status.to_lowercase() == s)
        && criteria
            .target
            .as_deref()
            .map_or(true, |t| contains_ci(&mission.target, t))
        && criteria
            .year
            .as_deref()
            .map_or(true, |y| mission.launch_year.to_string() == y)
        && criteria
            .mission_type
            .as_deref()
            .map_or(true, |m| contains_ci(&mission.mission_type, m))
}

fn matches_general(mission: &Mission, criteria: &FilterCriteria, current_year: i32) -> bool {
    match criteria.general_filter() {
        None => true,
        Some(GeneralFilter::Iconic) => ICONIC_MISSIONS.contains(&mission.name.as_str()),
        Some(GeneralFilter::Recent) => mission.launch_year >= current_year - RECENT_YEARS,
        Some(GeneralFilter::Future) => mission.status.to_lowercase() == "planned",
        Some(GeneralFilter::Active) => mission.status.to_lowercase() == "active",
    }
}

fn matches_link_type(mission: &Mission, criteria: &FilterCriteria) -> bool {
    let Some(slug) = criteria.effective_type() else {
        return true;
    };
    let wanted = normalize_slug(slug);

    let target_based = MissionType::from_slug(slug).is_some_and(MissionType::is_target_based);
    if target_based {
        mission.target.to_lowercase().contains(&wanted)
    } else {
        type_segments(&mission.mission_type).any(|segment| segment.contains(&wanted))
    }
}
