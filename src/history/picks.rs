//! Draft pick ownership: which player each (season, round, original roster)
//! slot turned into.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::warn;

use crate::{
    cli::types::{PlayerId, RosterId, Season},
    sleeper::types::{Draft, DraftPick},
    Result, SleeperError,
};

type RoundPicks = BTreeMap<RosterId, PlayerId>;

/// season → round → originally-assigned roster → player selected.
///
/// Keyed by the roster that held the draft slot when the draft ran, not by
/// whoever made the selection after pick trades. A traded pick carries the
/// original roster id, so this is what lets "2024 3rd from roster 5" be
/// resolved to a player.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PickOwnershipTable(BTreeMap<Season, BTreeMap<u32, RoundPicks>>);

impl PickOwnershipTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one selection. Returns the player previously stored under the
    /// same key; the new value always wins.
    pub fn record(
        &mut self,
        season: Season,
        round: u32,
        roster: RosterId,
        player: PlayerId,
    ) -> Option<PlayerId> {
        self.0
            .entry(season)
            .or_default()
            .entry(round)
            .or_default()
            .insert(roster, player)
    }

    /// Merge every pick of one draft. Rounds already present for the season
    /// (from another draft event) are kept; only identical keys are replaced.
    ///
    /// Fails if a pick's slot is missing from the draft's slot map.
    pub fn merge_draft(&mut self, draft: &Draft, picks: &[DraftPick]) -> Result<usize> {
        for pick in picks {
            let roster = draft
                .slot_to_roster_id
                .get(&pick.draft_slot)
                .copied()
                .ok_or_else(|| SleeperError::UnresolvedReference {
                    reference: format!("draft {} slot {}", draft.draft_id, pick.draft_slot),
                })?;

            if let Some(previous) =
                self.record(draft.season, pick.round, roster, pick.player_id.clone())
            {
                if previous != pick.player_id {
                    warn!(
                        season = %draft.season,
                        round = pick.round,
                        %roster,
                        %previous,
                        replacement = %pick.player_id,
                        "pick ownership overwritten by later draft"
                    );
                }
            }
        }
        Ok(picks.len())
    }

    pub fn lookup(&self, season: Season, round: u32, roster: RosterId) -> Option<&PlayerId> {
        self.0.get(&season)?.get(&round)?.get(&roster)
    }

    pub fn contains_season(&self, season: Season) -> bool {
        self.0.contains_key(&season)
    }

    pub fn seasons(&self) -> impl Iterator<Item = Season> + '_ {
        self.0.keys().copied()
    }

    /// Rounds recorded for a season, in ascending order.
    pub fn rounds(&self, season: Season) -> impl Iterator<Item = (u32, &RoundPicks)> + '_ {
        self.0
            .get(&season)
            .into_iter()
            .flat_map(|rounds| rounds.iter().map(|(r, picks)| (*r, picks)))
    }

    /// Number of recorded selections across all seasons.
    pub fn len(&self) -> usize {
        self.0
            .values()
            .flat_map(|rounds| rounds.values())
            .map(BTreeMap::len)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
