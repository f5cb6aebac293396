//! League history: every transaction and every draft result across the chain
//! of prior-season leagues.
//!
//! A `HistoryContext` is threaded through the walk, accumulating transactions
//! and pick ownership, then frozen into an immutable `LeagueHistory`.

pub mod picks;

use std::collections::HashSet;
use std::ops::RangeInclusive;
use tracing::{debug, info, warn};

use crate::{
    cli::types::{DraftId, LeagueId, Week},
    sleeper::{types::Transaction, LeagueSource},
    Result,
};
pub use picks::PickOwnershipTable;

/// Weeks whose transactions are collected for a completed prior season.
pub const PAST_SEASON_WEEKS: RangeInclusive<u16> = 0..=16;

/// Mutable accumulator used while history is being assembled.
#[derive(Debug, Default)]
pub struct HistoryContext {
    transactions: Vec<Transaction>,
    picks: PickOwnershipTable,
    visited: Vec<LeagueId>,
    seen: HashSet<LeagueId>,
}

impl HistoryContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a league as already processed so the walk never re-enters it.
    pub fn mark_visited(&mut self, league_id: &LeagueId) -> bool {
        self.seen.insert(league_id.clone())
    }

    /// Append a league's transactions for each week in `weeks`.
    pub async fn collect_transactions<S: LeagueSource>(
        &mut self,
        source: &S,
        league_id: &LeagueId,
        weeks: RangeInclusive<u16>,
    ) -> Result<()> {
        for week in weeks {
            let txns = source.get_transactions(league_id, Week::new(week)).await?;
            debug!(%league_id, week, count = txns.len(), "transactions fetched");
            self.transactions.extend(txns);
        }
        Ok(())
    }

    /// Fetch one draft and its picks and merge them into the pick table.
    pub async fn collect_draft<S: LeagueSource>(
        &mut self,
        source: &S,
        draft_id: &DraftId,
    ) -> Result<()> {
        let draft = source.get_draft(draft_id).await?;
        let picks = source.get_draft_picks(draft_id).await?;
        let merged = self.picks.merge_draft(&draft, &picks)?;
        debug!(%draft_id, season = %draft.season, merged, "draft resolved");
        Ok(())
    }

    /// Walk prior seasons starting at `previous`, most recent first.
    ///
    /// Each visited league contributes weeks `PAST_SEASON_WEEKS` of
    /// transactions and every one of its drafts. The walk stops when a
    /// league has no valid previous-league link. Any fetch failure aborts
    /// the whole walk.
    pub async fn walk<S: LeagueSource>(
        &mut self,
        source: &S,
        previous: Option<LeagueId>,
    ) -> Result<()> {
        let mut pending: Vec<LeagueId> = previous.into_iter().collect();

        while let Some(league_id) = pending.pop() {
            if !self.mark_visited(&league_id) {
                warn!(%league_id, "league already visited; stopping history walk");
                continue;
            }

            let league = source.get_league(&league_id).await?;
            match league.previous_league() {
                Some(prev) => pending.push(prev),
                None => debug!(
                    %league_id,
                    raw = ?league.previous_league_id,
                    "no previous league; end of chain"
                ),
            }

            self.collect_transactions(source, &league_id, PAST_SEASON_WEEKS)
                .await?;

            for draft in source.get_drafts(&league_id).await? {
                self.collect_draft(source, &draft.draft_id).await?;
            }

            info!(%league_id, season = ?league.season, "prior season loaded");
            self.visited.push(league_id);
        }

        Ok(())
    }

    /// Freeze the context. Transactions are ordered newest first by
    /// `status_updated`; ties keep their fetch order.
    pub fn finish(mut self) -> LeagueHistory {
        self.transactions
            .sort_by_key(|t| std::cmp::Reverse(t.status_updated));
        LeagueHistory {
            transactions: self.transactions,
            picks: self.picks,
            visited: self.visited,
        }
    }
}

/// Completed history for a league and all of its prior seasons
#[derive(Debug, Clone, Default)]
pub struct LeagueHistory {
    transactions: Vec<Transaction>,
    picks: PickOwnershipTable,
    visited: Vec<LeagueId>,
}

impl LeagueHistory {
    /// Transactions from every season, newest first
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn picks(&self) -> &PickOwnershipTable {
        &self.picks
    }

    /// Prior-season leagues in the order they were walked
    pub fn visited(&self) -> &[LeagueId] {
        &self.visited
    }
}
