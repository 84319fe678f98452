//! Static classification tables for the explorer's type-browsing links and
//! general filters. Both are closed sets keyed by their URL slug.

use serde::Serialize;

/// Mission type or destination reachable through a `type=` link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MissionType {
    Mars,
    Moon,
    Solar,
    Asteroid,
    Orbiter,
    Flyby,
    Lander,
    Rover,
    SampleReturn,
    Telescope,
}

impl MissionType {
    pub const ALL: [MissionType; 10] = [
        MissionType::Mars,
        MissionType::Moon,
        MissionType::Solar,
        MissionType::Asteroid,
        MissionType::Orbiter,
        MissionType::Flyby,
        MissionType::Lander,
        MissionType::Rover,
        MissionType::SampleReturn,
        MissionType::Telescope,
    ];

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.slug() == slug)
    }

    pub fn slug(self) -> &'static str {
        match self {
            MissionType::Mars => "mars",
            MissionType::Moon => "moon",
            MissionType::Solar => "solar",
            MissionType::Asteroid => "asteroid",
            MissionType::Orbiter => "orbiter",
            MissionType::Flyby => "flyby",
            MissionType::Lander => "lander",
            MissionType::Rover => "rover",
            MissionType::SampleReturn => "sample-return",
            MissionType::Telescope => "telescope",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            MissionType::Mars => "Mars Missions",
            MissionType::Moon => "Moon Missions",
            MissionType::Solar => "Solar Missions",
            MissionType::Asteroid => "Asteroid Missions",
            MissionType::Orbiter => "Orbiter Missions",
            MissionType::Flyby => "Flyby Missions",
            MissionType::Lander => "Lander Missions",
            MissionType::Rover => "Rover Missions",
            MissionType::SampleReturn => "Sample Return Missions",
            MissionType::Telescope => "Space Telescopes",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            MissionType::Mars => "Orbiters, landers and rovers sent to explore the Red Planet.",
            MissionType::Moon => "Missions to Earth's closest neighbour, from Apollo to Artemis.",
            MissionType::Solar => "Spacecraft studying the Sun and its influence on the solar system.",
            MissionType::Asteroid => "Missions that visit, sample or redirect asteroids.",
            MissionType::Orbiter => "Spacecraft that circle another world to map and study it.",
            MissionType::Flyby => "Missions that gather data while passing by their targets.",
            MissionType::Lander => "Spacecraft that touch down on another world's surface.",
            MissionType::Rover => "Mobile explorers driving across alien terrain.",
            MissionType::SampleReturn => "Missions that bring pieces of other worlds back to Earth.",
            MissionType::Telescope => "Observatories looking deep into the universe from space.",
        }
    }

    /// Destination types match against a mission's target, the rest against
    /// its mission type segments.
    pub fn is_target_based(self) -> bool {
        matches!(
            self,
            MissionType::Mars | MissionType::Moon | MissionType::Solar | MissionType::Asteroid
        )
    }
}

/// General explorer filters reachable through a `filter=` link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GeneralFilter {
    Iconic,
    Recent,
    Future,
    Active,
}

impl GeneralFilter {
    pub const ALL: [GeneralFilter; 4] = [
        GeneralFilter::Iconic,
        GeneralFilter::Recent,
        GeneralFilter::Future,
        GeneralFilter::Active,
    ];

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.slug() == slug)
    }

    pub fn slug(self) -> &'static str {
        match self {
            GeneralFilter::Iconic => "iconic",
            GeneralFilter::Recent => "recent",
            GeneralFilter::Future => "future",
            GeneralFilter::Active => "active",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            GeneralFilter::Iconic => "Iconic Missions",
            GeneralFilter::Recent => "Recent Missions",
            GeneralFilter::Future => "Future Missions",
            GeneralFilter::Active => "Active Missions",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            GeneralFilter::Iconic => "The missions that defined the history of space exploration.",
            GeneralFilter::Recent => "Missions launched within the last five years.",
            GeneralFilter::Future => "Planned missions that are yet to leave the launch pad.",
            GeneralFilter::Active => "Missions that are currently operating in space.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mission_type_slugs_round_trip() {
        for t in MissionType::ALL {
            assert_eq!(MissionType::from_slug(t.slug()), Some(t));
        }
        assert_eq!(MissionType::from_slug("Sample-Return"), None);
    }

    #[test]
    fn test_target_based_split() {
        let targets: Vec<_> = MissionType::ALL
            .into_iter()
            .filter(|t| t.is_target_based())
            .map(MissionType::slug)
            .collect();
        assert_eq!(targets, ["mars", "moon", "solar", "asteroid"]);
    }

    #[test]
    fn test_general_filter_lookup() {
        assert_eq!(GeneralFilter::from_slug("future"), Some(GeneralFilter::Future));
        assert_eq!(GeneralFilter::from_slug("popular"), None);
    }

    #[test]
    fn test_serialized_as_slug() {
        assert_eq!(
            serde_json::to_value(MissionType::SampleReturn).unwrap(),
            "sample-return"
        );
        assert_eq!(serde_json::to_value(GeneralFilter::Iconic).unwrap(), "iconic");
    }
}
