//! Simplified player records built from the NFL player catalog.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::{
    cli::types::PlayerId,
    config::SleeperConfig,
    sleeper::types::{Player, PlayerCatalog},
};

/// Flattened player record used by roster and trade views
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimplePlayer {
    pub player_id: PlayerId,
    pub full_name: Option<String>,
    pub position: Option<String>,
    pub team: Option<String>,
    pub college: Option<String>,
    pub years_exp: Option<u32>,
    pub birth_date: Option<String>,
    pub number: Option<String>,
    pub weight: Option<String>,
    pub height: Option<String>,
    pub avatar_url: String,
}

impl SimplePlayer {
    pub fn from_player(id: &PlayerId, player: &Player, config: &SleeperConfig) -> Self {
        let player_id = player.player_id.clone().unwrap_or_else(|| id.clone());
        Self {
            avatar_url: config.player_avatar_url(player_id.as_str()),
            player_id,
            full_name: player.display_name(),
            position: player.position.clone(),
            team: player.team.clone(),
            college: player.college.clone(),
            years_exp: player.years_exp,
            birth_date: player.birth_date.clone(),
            number: player.number.clone(),
            weight: player.weight.clone(),
            height: player.height.clone(),
        }
    }
}

/// Simplified view of the whole player catalog
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerDirectory(HashMap<PlayerId, SimplePlayer>);

impl PlayerDirectory {
    pub fn from_catalog(catalog: &PlayerCatalog, config: &SleeperConfig) -> Self {
        Self(
            catalog
                .iter()
                .map(|(id, player)| (id.clone(), SimplePlayer::from_player(id, player, config)))
                .collect(),
        )
    }

    pub fn get(&self, id: &PlayerId) -> Option<&SimplePlayer> {
        self.0.get(id)
    }

    pub fn full_name(&self, id: &PlayerId) -> Option<&str> {
        self.get(id)?.full_name.as_deref()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> PlayerCatalog {
        let mut catalog = PlayerCatalog::new();
        catalog.insert(
            PlayerId::new("4046"),
            Player {
                player_id: Some(PlayerId::new("4046")),
                position: Some("QB".into()),
                full_name: Some("Patrick Mahomes".into()),
                team: Some("KC".into()),
                number: Some("15".into()),
                ..Player::default()
            },
        );
        catalog.insert(
            PlayerId::new("DET"),
            Player {
                position: Some("DEF".into()),
                first_name: Some("Detroit".into()),
                last_name: Some("Lions".into()),
                ..Player::default()
            },
        );
        catalog
    }

    #[test]
    fn test_from_catalog() {
        let directory = PlayerDirectory::from_catalog(&catalog(), &SleeperConfig::default());
        assert_eq!(directory.len(), 2);

        let mahomes = directory.get(&PlayerId::new("4046")).unwrap();
        assert_eq!(mahomes.position.as_deref(), Some("QB"));
        assert_eq!(mahomes.number.as_deref(), Some("15"));
        assert_eq!(
            mahomes.avatar_url,
            "https://sleepercdn.com/content/nfl/players/4046.jpg"
        );
    }

    #[test]
    fn test_missing_player_id_falls_back_to_key() {
        let directory = PlayerDirectory::from_catalog(&catalog(), &SleeperConfig::default());
        let det = directory.get(&PlayerId::new("DET")).unwrap();
        assert_eq!(det.player_id.as_str(), "DET");
        assert_eq!(directory.full_name(&PlayerId::new("DET")), Some("Detroit Lions"));
    }

    #[test]
    fn test_unknown_player() {
        let directory = PlayerDirectory::default();
        assert!(directory.is_empty());
        assert!(directory.full_name(&PlayerId::new("1")).is_none());
    }
}
