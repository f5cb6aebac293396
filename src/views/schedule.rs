//! Regular-season schedule grouped by week and matchup id

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ops::RangeInclusive;
use tracing::debug;

use super::owner_of;
use crate::{
    cli::types::{RosterId, Week},
    config::SleeperConfig,
    sleeper::types::{Matchup, Roster, User},
    Result,
};

/// Regular-season weeks included in the schedule view.
pub const REGULAR_SEASON_WEEKS: RangeInclusive<u16> = 1..=12;

/// One team in a head-to-head matchup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchupSide {
    pub team: String,
    pub avatar: Option<String>,
    pub roster: RosterId,
}

/// Matchup id → the sides playing in it
pub type WeekSchedule = BTreeMap<u32, Vec<MatchupSide>>;

pub type Schedule = BTreeMap<Week, WeekSchedule>;

/// Group one week's matchup rows by matchup id. Rows without a matchup id
/// (byes, non-playoff weeks) are left out.
pub fn build_week(
    matchups: &[Matchup],
    rosters: &[Roster],
    users: &[User],
    config: &SleeperConfig,
) -> Result<WeekSchedule> {
    let mut week = WeekSchedule::new();
    for row in matchups {
        let Some(matchup_id) = row.matchup_id else {
            debug!(roster = %row.roster_id, "matchup row without matchup id skipped");
            continue;
        };
        let owner = owner_of(rosters, users, row.roster_id)?;
        week.entry(matchup_id).or_default().push(MatchupSide {
            team: owner.team_name().to_string(),
            avatar: owner.avatar.as_deref().map(|a| config.user_avatar_url(a)),
            roster: row.roster_id,
        });
    }
    Ok(week)
}
