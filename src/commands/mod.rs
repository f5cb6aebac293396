//! Command implementations for the Sleeper league CLI

pub mod league_views;
pub mod nfl_state;

use serde::Serialize;

use crate::{
    config::SleeperConfig, league::LeagueAggregator, sleeper::SleeperClient, LeagueId, Result,
    SleeperError, LEAGUE_ID_ENV_VAR,
};

/// Use the `--league-id` value, falling back to `SLEEPER_LEAGUE_ID`.
pub fn resolve_league_id(league_id: Option<LeagueId>) -> Result<LeagueId> {
    resolve_league_id_with(league_id, |var| std::env::var(var).ok())
}

/// [`resolve_league_id`] with the environment read through `lookup`.
pub fn resolve_league_id_with<F>(league_id: Option<LeagueId>, lookup: F) -> Result<LeagueId>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(id) = league_id {
        return Ok(id);
    }
    match lookup(LEAGUE_ID_ENV_VAR) {
        Some(raw) => raw.parse(),
        None => Err(SleeperError::MissingLeagueId {
            env_var: LEAGUE_ID_ENV_VAR.to_string(),
        }),
    }
}

/// Load a league (and its full history) from the live Sleeper API.
pub async fn load_league(league_id: Option<LeagueId>) -> Result<LeagueAggregator<SleeperClient>> {
    let league_id = resolve_league_id(league_id)?;
    let config = SleeperConfig::from_env();
    let client = SleeperClient::new(config.clone())?;
    LeagueAggregator::load(client, config, league_id).await
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
