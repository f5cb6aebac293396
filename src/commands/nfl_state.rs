//! Pass-through commands that print Sleeper responses verbatim.

use super::print_json;
use crate::{config::SleeperConfig, sleeper::SleeperClient, DraftId, Result};

pub async fn handle_nfl_state() -> Result<()> {
    let client = SleeperClient::new(SleeperConfig::from_env())?;
    print_json(&client.get_nfl_state().await?)
}

pub async fn handle_traded_picks(draft_id: DraftId) -> Result<()> {
    let client = SleeperClient::new(SleeperConfig::from_env())?;
    print_json(&client.get_traded_picks(&draft_id).await?)
}
