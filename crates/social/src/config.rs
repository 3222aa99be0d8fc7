// Copyright (C) 2025 Ryan Daum <ryan.daum@gmail.com> This program is free
// software: you can redistribute it and/or modify it under the terms of the GNU
// General Public License as published by the Free Software Foundation, version
// 3.
//
// This program is distributed in the hope that it will be useful, but WITHOUT
// ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS
// FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along with
// this program. If not, see <https://www.gnu.org/licenses/>.
//

use murk_render::{DEFAULT_INSET, DEFAULT_WIDTH};
use serde::{Deserialize, Serialize};

/// An ordered ladder of permission levels, least trusted first. Checks
/// climb: holding a level passes every check at or below it.
#[derive(Clone, Eq, PartialEq, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionHierarchy(Vec<String>);

impl Default for PermissionHierarchy {
    fn default() -> Self {
        Self(
            [
                "Guest",
                "Denizen",
                "Citizen",
                "Helper",
                "Crafter",
                "Builder",
                "Helpstaff",
                "Mage",
                "Wizard",
                "Immortal",
            ]
            .map(String::from)
            .to_vec(),
        )
    }
}

impl PermissionHierarchy {
    pub fn new(levels: Vec<String>) -> Self {
        Self(levels)
    }

    pub fn levels(&self) -> &[String] {
        &self.0
    }

    /// Position of a level on the ladder, case-insensitively, or `None`
    /// for a level this ladder has never heard of.
    #[must_use]
    pub fn rank(&self, level: &str) -> Option<usize> {
        self.0
            .iter()
            .position(|known| known.eq_ignore_ascii_case(level))
    }

    /// Whether `level` sits at or above `floor`. Unknown levels fail every
    /// check; unknown floors are unpassable.
    #[must_use]
    pub fn at_least(&self, level: &str, floor: &str) -> bool {
        match (self.rank(level), self.rank(floor)) {
            (Some(level), Some(floor)) => level >= floor,
            _ => false,
        }
    }
}

/// Knobs for the social commands. The defaults reproduce the traditional
/// behavior; worlds override what they care about.
#[derive(Clone, Eq, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialConfig {
    /// Spoken verb used when the actor has not chosen one with `say/verb`.
    pub say_verb: String,
    /// Markup prefix applied inside the quotes of spoken text.
    pub say_prepend: String,
    /// Tag prefixed to out-of-character traffic.
    pub ooc_prefix: String,
    /// Column for the layout spoof modes.
    pub width: usize,
    /// Left margin for the indented spoof modes.
    pub inset: usize,
    /// Lowest permission level allowed to spoof with live markup.
    pub raw_spoof_floor: String,
    pub hierarchy: PermissionHierarchy,
}

impl Default for SocialConfig {
    fn default() -> Self {
        Self {
            say_verb: "says".to_string(),
            say_prepend: "|w".to_string(),
            ooc_prefix: "[OOC]".to_string(),
            width: DEFAULT_WIDTH,
            inset: DEFAULT_INSET,
            raw_spoof_floor: "Wizard".to_string(),
            hierarchy: PermissionHierarchy::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_ladder_order() {
        let hierarchy = PermissionHierarchy::default();
        assert_eq!(hierarchy.rank("Guest"), Some(0));
        assert_eq!(hierarchy.rank("Immortal"), Some(9));
        assert_eq!(hierarchy.rank("guest"), Some(0));
        assert_eq!(hierarchy.rank("Sovereign"), None);
    }

    #[test]
    fn test_at_least_climbs() {
        let hierarchy = PermissionHierarchy::default();
        assert!(hierarchy.at_least("Wizard", "Builder"));
        assert!(hierarchy.at_least("Builder", "Builder"));
        assert!(!hierarchy.at_least("Citizen", "Builder"));
        assert!(!hierarchy.at_least("Sovereign", "Guest"));
        assert!(!hierarchy.at_least("Wizard", "Sovereign"));
    }

    #[test]
    fn test_config_defaults() {
        let config = SocialConfig::default();
        assert_eq!(config.say_verb, "says");
        assert_eq!(config.say_prepend, "|w");
        assert_eq!(config.width, 72);
        assert_eq!(config.inset, 20);
    }

    #[test]
    fn test_config_partial_deserialization() {
        let config: SocialConfig =
            serde_json::from_str(r#"{ "say_verb": "exclaims", "width": 100 }"#).unwrap();
        assert_eq!(config.say_verb, "exclaims");
        assert_eq!(config.width, 100);
        // Everything unnamed keeps its default.
        assert_eq!(config.inset, 20);
        assert_eq!(config.hierarchy, PermissionHierarchy::default());
    }

    #[test]
    fn test_hierarchy_round_trips_as_plain_list() {
        let hierarchy = PermissionHierarchy::new(vec!["Low".to_string(), "High".to_string()]);
        let json = serde_json::to_string(&hierarchy).unwrap();
        assert_eq!(json, r#"["Low","High"]"#);
        let back: PermissionHierarchy = serde_json::from_str(&json).unwrap();
        assert_eq!(back, hierarchy);
    }
}
