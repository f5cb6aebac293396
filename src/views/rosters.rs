//! Roster view with owner names and position-ordered players

use serde::{Deserialize, Serialize};

use super::{PlayerDirectory, SimplePlayer};
use crate::{
    cli::types::{PlayerId, Position, RosterId, UserId},
    sleeper::types::{Roster, User},
    Result, SleeperError,
};

const UNKNOWN_OWNER: &str = "UNKNOWN";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterView {
    pub roster_id: RosterId,
    pub player_ids: Vec<PlayerId>,
    pub taxi: Vec<PlayerId>,
    pub starters: Vec<PlayerId>,
    pub owner_id: Option<UserId>,
    pub owner_name: String,
    /// Ordered QB, RB, WR, TE, then everything else
    pub players: Vec<SimplePlayer>,
}

pub fn build_rosters(
    rosters: &[Roster],
    users: &[User],
    directory: &PlayerDirectory,
) -> Result<Vec<RosterView>> {
    rosters
        .iter()
        .map(|roster| build_roster(roster, users, directory))
        .collect()
}

fn build_roster(roster: &Roster, users: &[User], directory: &PlayerDirectory) -> Result<RosterView> {
    let owner_name = roster
        .owner_id
        .as_ref()
        .and_then(|owner| users.iter().find(|u| &u.user_id == owner))
        .map(|u| u.display_name.clone())
        .unwrap_or_else(|| UNKNOWN_OWNER.to_string());

    let mut players = roster
        .players
        .iter()
        .map(|id| {
            directory
                .get(id)
                .cloned()
                .ok_or_else(|| SleeperError::not_found("Player", id))
        })
        .collect::<Result<Vec<_>>>()?;
    // sort_by_key is stable: same-position players keep roster order
    players.sort_by_key(|p| Position::roster_rank(p.position.as_deref()));

    Ok(RosterView {
        roster_id: roster.roster_id,
        player_ids: roster.players.clone(),
        taxi: roster.taxi.clone(),
        starters: roster.starters.clone(),
        owner_id: roster.owner_id.clone(),
        owner_name,
        players,
    })
}
