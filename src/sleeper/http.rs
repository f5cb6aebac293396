use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use super::types::{Draft, DraftPick, League, Matchup, PlayerCatalog, Roster, Transaction, User};
use super::LeagueSource;
use crate::{
    cli::types::{DraftId, LeagueId, Week},
    config::SleeperConfig,
    Result, SleeperError,
};


const USER_AGENT: &str = concat!("sleeper-ffl/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the public Sleeper v1 API
#[derive(Debug, Clone)]
pub struct SleeperClient {
    client: Client,
    config: SleeperConfig,
}

impl SleeperClient {
    pub fn new(config: SleeperConfig) -> Result<Self> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &SleeperConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.api_base_url, path)
    }

    /// GET `path`, rejecting any non-2xx response.
    async fn get_ok(&self, path: &str) -> Result<Response> {
        let url = self.url(path);
        debug!(%url, "GET");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SleeperError::RemoteUnavailable {
                url,
                status: status.as_u16(),
            });
        }

        Ok(response)
    }

    /// Decode straight from the body so object key order survives into
    /// order-sensitive fields such as `Transaction::adds`.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let body = self.get_ok(path).await?.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// List endpoints answer `null` instead of `[]` for some empty weeks.
    async fn get_list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>> {
        let list: Option<Vec<T>> = self.get_json(path).await?;
        Ok(list.unwrap_or_default())
    }

    /// Traded picks for a draft, passed through verbatim.
    pub async fn get_traded_picks(&self, draft_id: &DraftId) -> Result<Value> {
        self.get_json(&format!("/draft/{draft_id}/traded_picks"))
            .await
    }

    /// Current NFL state (season, week, season type), passed through verbatim.
    pub async fn get_nfl_state(&self) -> Result<Value> {
        self.get_json("/state/nfl").await
    }
}

#[async_trait]
impl LeagueSource for SleeperClient {
    async fn get_league(&self, league_id: &LeagueId) -> Result<League> {
        self.get_json(&format!("/league/{league_id}")).await
    }

    async fn get_rosters(&self, league_id: &LeagueId) -> Result<Vec<Roster>> {
        self.get_list(&format!("/league/{league_id}/rosters")).await
    }

    async fn get_users(&self, league_id: &LeagueId) -> Result<Vec<User>> {
        self.get_list(&format!("/league/{league_id}/users")).await
    }

    async fn get_transactions(&self, league_id: &LeagueId, week: Week) -> Result<Vec<Transaction>> {
        self.get_list(&format!("/league/{league_id}/transactions/{week}"))
            .await
    }

    async fn get_matchups(&self, league_id: &LeagueId, week: Week) -> Result<Vec<Matchup>> {
        self.get_list(&format!("/league/{league_id}/matchups/{week}"))
            .await
    }

    async fn get_drafts(&self, league_id: &LeagueId) -> Result<Vec<Draft>> {
        self.get_list(&format!("/league/{league_id}/drafts")).await
    }

    async fn get_draft(&self, draft_id: &DraftId) -> Result<Draft> {
        self.get_json(&format!("/draft/{draft_id}")).await
    }

    async fn get_draft_picks(&self, draft_id: &DraftId) -> Result<Vec<DraftPick>> {
        self.get_list(&format!("/draft/{draft_id}/picks")).await
    }

    async fn get_players(&self) -> Result<PlayerCatalog> {
        self.get_json("/players/nfl").await
    }
}
