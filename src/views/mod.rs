//! Presentation views derived from fetched league data.

pub mod players;
pub mod rosters;
pub mod schedule;
pub mod trades;
pub mod waivers;

use crate::{
    cli::types::RosterId,
    sleeper::types::{Roster, User},
    Result, SleeperError,
};

pub use players::{PlayerDirectory, SimplePlayer};
pub use rosters::{build_rosters, RosterView};
pub use schedule::{build_week, MatchupSide, Schedule, WeekSchedule, REGULAR_SEASON_WEEKS};
pub use trades::{build_trades, describe_pick, ordinal, TradePart, TradeSummary};
pub use waivers::build_waiver_order;

pub(crate) fn find_roster(rosters: &[Roster], roster_id: RosterId) -> Result<&Roster> {
    rosters
        .iter()
        .find(|r| r.roster_id == roster_id)
        .ok_or_else(|| SleeperError::not_found("Roster", roster_id))
}

/// The user owning `roster`. Orphaned rosters and unknown users are errors.
pub(crate) fn find_owner<'a>(users: &'a [User], roster: &Roster) -> Result<&'a User> {
    let owner_id = roster
        .owner_id
        .as_ref()
        .ok_or_else(|| SleeperError::not_found("Roster owner", roster.roster_id))?;
    users
        .iter()
        .find(|u| &u.user_id == owner_id)
        .ok_or_else(|| SleeperError::not_found("User", owner_id))
}

pub(crate) fn owner_of<'a>(
    rosters: &[Roster],
    users: &'a [User],
    roster_id: RosterId,
) -> Result<&'a User> {
    find_owner(users, find_roster(rosters, roster_id)?)
}
