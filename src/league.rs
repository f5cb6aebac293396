//! League aggregator: fetches a league's current state and full history once,
//! then serves presentation views from it.

use std::collections::BTreeMap;
use tracing::info;

use crate::{
    cli::types::{LeagueId, Week},
    config::SleeperConfig,
    history::{HistoryContext, LeagueHistory, PickOwnershipTable},
    sleeper::{
        types::{League, PlayerCatalog, Roster, Transaction, User},
        LeagueSource,
    },
    views::{
        build_rosters, build_trades, build_waiver_order, build_week, PlayerDirectory, RosterView,
        Schedule, TradeSummary, REGULAR_SEASON_WEEKS,
    },
    Result,
};

/// Lazily fetched player data. Filled at most once per aggregator.
#[derive(Debug, Default)]
struct PlayerCache {
    catalog: Option<PlayerCatalog>,
    directory: Option<PlayerDirectory>,
}

impl PlayerCache {
    async fn catalog<S: LeagueSource>(&mut self, source: &S) -> Result<&PlayerCatalog> {
        let catalog = match self.catalog.take() {
            Some(catalog) => catalog,
            None => {
                info!("fetching NFL player catalog");
                let catalog = source.get_players().await?;
                info!(players = catalog.len(), "player catalog loaded");
                catalog
            }
        };
        Ok(self.catalog.insert(catalog))
    }

    async fn directory<S: LeagueSource>(
        &mut self,
        source: &S,
        config: &SleeperConfig,
    ) -> Result<&PlayerDirectory> {
        let directory = match self.directory.take() {
            Some(directory) => directory,
            None => PlayerDirectory::from_catalog(self.catalog(source).await?, config),
        };
        Ok(self.directory.insert(directory))
    }
}

/// Snapshot of one Sleeper league and every season before it.
///
/// All structural data (league, rosters, users, transactions, drafts) is
/// fetched by [`LeagueAggregator::load`]; construct a new aggregator to see
/// newer remote state. The player catalog and schedule are fetched on first
/// use and cached. Accessors that fill a cache take `&mut self`.
#[derive(Debug)]
pub struct LeagueAggregator<S> {
    source: S,
    config: SleeperConfig,
    league_id: LeagueId,
    league: League,
    rosters: Vec<Roster>,
    users: Vec<User>,
    history: LeagueHistory,
    players: PlayerCache,
    schedule: Option<Schedule>,
}

impl<S: LeagueSource> LeagueAggregator<S> {
    /// Fetch the league, its rosters and users, this season's transactions
    /// (weeks 0 through the current week) and draft, then walk every prior
    /// season. Fails as a whole if any fetch fails.
    pub async fn load(source: S, config: SleeperConfig, league_id: LeagueId) -> Result<Self> {
        info!(%league_id, "loading league");
        let league = source.get_league(&league_id).await?;
        let rosters = source.get_rosters(&league_id).await?;
        let users = source.get_users(&league_id).await?;

        let mut ctx = HistoryContext::new();
        ctx.mark_visited(&league_id);
        ctx.collect_transactions(&source, &league_id, 0..=league.settings.leg)
            .await?;
        if let Some(draft_id) = &league.draft_id {
            ctx.collect_draft(&source, draft_id).await?;
        }
        ctx.walk(&source, league.previous_league()).await?;
        let history = ctx.finish();

        info!(
            %league_id,
            rosters = rosters.len(),
            transactions = history.transactions().len(),
            prior_seasons = history.visited().len(),
            drafted_picks = history.picks().len(),
            "league loaded"
        );

        Ok(Self {
            source,
            config,
            league_id,
            league,
            rosters,
            users,
            history,
            players: PlayerCache::default(),
            schedule: None,
        })
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn league_id(&self) -> &LeagueId {
        &self.league_id
    }

    pub fn league(&self) -> &League {
        &self.league
    }

    pub fn current_week(&self) -> Week {
        Week::new(self.league.settings.leg)
    }

    pub fn rosters(&self) -> &[Roster] {
        &self.rosters
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Every season's transactions, newest first
    pub fn transactions(&self) -> &[Transaction] {
        self.history.transactions()
    }

    pub fn history(&self) -> &LeagueHistory {
        &self.history
    }

    /// season → round → original roster → drafted player
    pub fn picks(&self) -> &PickOwnershipTable {
        self.history.picks()
    }

    pub async fn players(&mut self) -> Result<&PlayerCatalog> {
        self.players.catalog(&self.source).await
    }

    pub async fn player_directory(&mut self) -> Result<&PlayerDirectory> {
        self.players.directory(&self.source, &self.config).await
    }

    /// The pick table alongside the player directory needed to name its entries.
    pub async fn picks_with_names(&mut self) -> Result<(&PickOwnershipTable, &PlayerDirectory)> {
        let directory = self.players.directory(&self.source, &self.config).await?;
        Ok((self.history.picks(), directory))
    }

    /// Completed trades, newest first, with what each roster received.
    pub async fn trades(&mut self) -> Result<Vec<TradeSummary>> {
        let directory = self.players.directory(&self.source, &self.config).await?;
        build_trades(
            self.history.transactions(),
            &self.rosters,
            &self.users,
            self.history.picks(),
            directory,
        )
    }

    pub async fn roster_views(&mut self) -> Result<Vec<RosterView>> {
        let directory = self.players.directory(&self.source, &self.config).await?;
        build_rosters(&self.rosters, &self.users, directory)
    }

    /// Waiver priority → team name
    pub fn waiver_order(&self) -> Result<BTreeMap<u32, String>> {
        build_waiver_order(&self.rosters, &self.users)
    }

    /// Regular-season matchups by week, fetched on first call.
    pub async fn schedule(&mut self) -> Result<&Schedule> {
        let schedule = match self.schedule.take() {
            Some(schedule) => schedule,
            None => self.fetch_schedule().await?,
        };
        Ok(self.schedule.insert(schedule))
    }

    async fn fetch_schedule(&self) -> Result<Schedule> {
        let mut schedule = Schedule::new();
        for week in REGULAR_SEASON_WEEKS.map(Week::new) {
            let matchups = self.source.get_matchups(&self.league_id, week).await?;
            let grouped = build_week(&matchups, &self.rosters, &self.users, &self.config)?;
            schedule.insert(week, grouped);
        }
        Ok(schedule)
    }
}
