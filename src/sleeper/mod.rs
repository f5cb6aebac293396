//! Sleeper API access: wire types, the HTTP client, and the `LeagueSource`
//! seam the aggregator is generic over.

pub mod http;
pub mod types;

use async_trait::async_trait;

use crate::{
    cli::types::{DraftId, LeagueId, Week},
    Result,
};
use types::{Draft, DraftPick, League, Matchup, PlayerCatalog, Roster, Transaction, User};

pub use http::SleeperClient;

/// Read-only league data provider.
///
/// `SleeperClient` is the production implementation; tests substitute an
/// in-memory one. Every call is awaited one at a time by the aggregator.
#[async_trait]
pub trait LeagueSource {
    async fn get_league(&self, league_id: &LeagueId) -> Result<League>;

    async fn get_rosters(&self, league_id: &LeagueId) -> Result<Vec<Roster>>;

    async fn get_users(&self, league_id: &LeagueId) -> Result<Vec<User>>;

    async fn get_transactions(&self, league_id: &LeagueId, week: Week) -> Result<Vec<Transaction>>;

    async fn get_matchups(&self, league_id: &LeagueId, week: Week) -> Result<Vec<Matchup>>;

    /// All drafts attached to a league (rookie draft, supplemental drafts, ...)
    async fn get_drafts(&self, league_id: &LeagueId) -> Result<Vec<Draft>>;

    async fn get_draft(&self, draft_id: &DraftId) -> Result<Draft>;

    async fn get_draft_picks(&self, draft_id: &DraftId) -> Result<Vec<DraftPick>>;

    /// The full NFL player directory. Large (several MB); callers memoize it.
    async fn get_players(&self) -> Result<PlayerCatalog>;
}
