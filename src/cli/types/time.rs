//! Time-related types for NFL seasons and weeks.

use crate::error::{Result, SleeperError};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for Season years.
///
/// Sleeper sends seasons as strings (`"2024"`) on drafts and traded picks,
/// so deserialization accepts both strings and integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Season(pub u16);

impl Season {
    pub fn new(year: u16) -> Self {
        Self(year)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Season {
    type Err = SleeperError;

    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse()
            .map(Self)
            .map_err(|_| SleeperError::UnresolvedReference {
                reference: format!("season {s:?}"),
            })
    }
}

impl Serialize for Season {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_u16(self.0)
    }
}

struct SeasonVisitor;

impl<'de> de::Visitor<'de> for SeasonVisitor {
    type Value = Season;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a season year as an integer or numeric string")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<Season, E> {
        u16::try_from(v).map(Season).map_err(E::custom)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<Season, E> {
        u16::try_from(v).map(Season).map_err(E::custom)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<Season, E> {
        v.trim().parse().map(Season).map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for Season {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_any(SeasonVisitor)
    }
}

/// Type-safe wrapper for Week numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Week(pub u16);

impl Week {
    pub fn new(week: u16) -> Self {
        Self(week)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }
}

impl fmt::Display for Week {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_season_from_string_and_number() {
        let from_str: Season = serde_json::from_str("\"2024\"").unwrap();
        let from_num: Season = serde_json::from_str("2024").unwrap();
        assert_eq!(from_str, Season::new(2024));
        assert_eq!(from_num, Season::new(2024));
    }

    #[test]
    fn test_season_rejects_garbage() {
        assert!(serde_json::from_str::<Season>("\"next year\"").is_err());
        assert!("twenty".parse::<Season>().is_err());
    }

    #[test]
    fn test_season_as_map_key() {
        let mut map = BTreeMap::new();
        map.insert(Season::new(2023), 1);
        map.insert(Season::new(2024), 2);

        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"2023":1,"2024":2}"#);

        let back: BTreeMap<Season, i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(back.get(&Season::new(2024)), Some(&2));
    }

    #[test]
    fn test_season_ordering() {
        assert!(Season::new(2022) < Season::new(2023));
        assert_eq!(Season::new(2025).to_string(), "2025");
    }
}
