//! Trade summaries: what each roster received in every completed trade.

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::{owner_of, PlayerDirectory};
use crate::{
    cli::types::RosterId,
    history::PickOwnershipTable,
    sleeper::types::{Roster, TradedPick, Transaction, User},
    Result, SleeperError,
};

/// One side of a trade: what a roster received
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradePart {
    pub roster_id: RosterId,
    /// Display name of the roster's owner
    pub new_roster: String,
    pub adds: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeSummary {
    /// Milliseconds since the epoch
    pub timestamp: i64,
    pub transaction_id: String,
    pub trade_parts: Vec<TradePart>,
}

/// `1st`, `2nd`, `3rd`, `4th`, ... with `11th`-`13th` in every hundred.
pub fn ordinal(n: u32) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

/// `"{season} {round}"`, plus `" ({player})"` once the pick has been used.
pub fn describe_pick(
    pick: &TradedPick,
    picks: &PickOwnershipTable,
    directory: &PlayerDirectory,
) -> String {
    let label = format!("{} {}", pick.season, ordinal(pick.round));
    if !picks.contains_season(pick.season) {
        return label;
    }

    match picks
        .lookup(pick.season, pick.round, pick.roster_id)
        .and_then(|player| directory.full_name(player))
    {
        Some(name) => format!("{label} ({name})"),
        None => {
            warn!(
                season = %pick.season,
                round = pick.round,
                roster = %pick.roster_id,
                "drafted season has no player for traded pick"
            );
            label
        }
    }
}

/// Completed trades, in the order of `transactions` (newest first once the
/// history has been frozen).
pub fn build_trades(
    transactions: &[Transaction],
    rosters: &[Roster],
    users: &[User],
    picks: &PickOwnershipTable,
    directory: &PlayerDirectory,
) -> Result<Vec<TradeSummary>> {
    transactions
        .iter()
        .filter(|t| t.is_completed_trade())
        .map(|trade| summarize_trade(trade, rosters, users, picks, directory))
        .collect()
}

fn summarize_trade(
    trade: &Transaction,
    rosters: &[Roster],
    users: &[User],
    picks: &PickOwnershipTable,
    directory: &PlayerDirectory,
) -> Result<TradeSummary> {
    let mut parts: Vec<TradePart> = Vec::with_capacity(trade.roster_ids.len());
    for &roster_id in &trade.roster_ids {
        if parts.iter().any(|p| p.roster_id == roster_id) {
            continue;
        }
        let owner = owner_of(rosters, users, roster_id)?;
        parts.push(TradePart {
            roster_id,
            new_roster: owner.display_name.clone(),
            adds: Vec::new(),
        });
    }

    for (player_id, roster_id) in &trade.adds {
        let name = match directory.full_name(player_id) {
            Some(name) => name.to_string(),
            None => {
                warn!(%player_id, "traded player missing from catalog");
                player_id.to_string()
            }
        };
        part_for(&mut parts, *roster_id, &trade.transaction_id)?
            .adds
            .push(name);
    }

    for pick in &trade.draft_picks {
        let label = describe_pick(pick, picks, directory);
        part_for(&mut parts, pick.owner_id, &trade.transaction_id)?
            .adds
            .push(label);
    }

    Ok(TradeSummary {
        timestamp: trade.status_updated,
        transaction_id: trade.transaction_id.clone(),
        trade_parts: parts,
    })
}

fn part_for<'a>(
    parts: &'a mut [TradePart],
    roster_id: RosterId,
    transaction_id: &str,
) -> Result<&'a mut TradePart> {
    parts
        .iter_mut()
        .find(|p| p.roster_id == roster_id)
        .ok_or_else(|| {
            SleeperError::not_found("Trade participant", format!("{roster_id} in {transaction_id}"))
        })
}
