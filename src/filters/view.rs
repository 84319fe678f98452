//! Explorer heading resolution.

use super::criteria::FilterCriteria;
use crate::domain::{GeneralFilter, MissionType};
use serde::Serialize;

pub const DEFAULT_TITLE: &str = "Explore Space Missions";
pub const DEFAULT_SUBTITLE: &str =
    "Discover humanity's journey through space, from historic milestones to the missions still ahead.";

/// Title and subtitle for the explorer page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ViewMetadata {
    pub title: &'static str,
    pub subtitle: &'static str,
}

impl Default for ViewMetadata {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE,
            subtitle: DEFAULT_SUBTITLE,
        }
    }
}

/// Resolve the heading from the link the user arrived through.
///
/// Only `type` (then `filter`) is consulted, never the `missionType`
/// dropdown, and specific mode does not reset it: the heading follows the
/// entry link while the result set follows the most specific filter.
pub fn resolve_view(criteria: &FilterCriteria) -> ViewMetadata {
    let Some(key) = criteria.type_slug.as_deref().or(criteria.general.as_deref()) else {
        return ViewMetadata::default();
    };

    if let Some(kind) = MissionType::from_slug(key) {
        return ViewMetadata {
            title: kind.display_name(),
            subtitle: kind.description(),
        };
    }
    if let Some(filter) = GeneralFilter::from_slug(key) {
        return ViewMetadata {
            title: filter.display_name(),
            subtitle: filter.description(),
        };
    }
    ViewMetadata::default()
}
