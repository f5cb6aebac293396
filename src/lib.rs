//! Sleeper Fantasy Football League Library
//!
//! Aggregates a Sleeper league's rosters, users, transactions and drafts
//! across every prior season, and derives presentation views from them.
//!
//! ## Features
//!
//! - **History Walk**: Follows `previous_league_id` links back through every prior season
//! - **Pick Resolution**: Maps traded draft picks to the players they became
//! - **Trade Summaries**: Who received what in every completed trade, newest first
//! - **Rosters, Waivers, Schedule**: Flattened views ready for display or JSON output
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sleeper_ffl::{LeagueAggregator, SleeperClient, SleeperConfig};
//!
//! # async fn example() -> sleeper_ffl::Result<()> {
//! let config = SleeperConfig::from_env();
//! let client = SleeperClient::new(config.clone())?;
//! let mut league = LeagueAggregator::load(client, config, "1048273".parse()?).await?;
//!
//! for trade in league.trades().await? {
//!     println!("{}: {} sides", trade.transaction_id, trade.trade_parts.len());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Set your Sleeper league ID to avoid passing it in every command:
//! ```bash
//! export SLEEPER_LEAGUE_ID=1048273
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod history;
pub mod league;
pub mod logging;
pub mod sleeper;
pub mod views;

// Re-export commonly used types
pub use cli::types::{DraftId, LeagueId, PlayerId, Position, RosterId, Season, UserId, Week};
pub use config::SleeperConfig;
pub use error::{Result, SleeperError};
pub use history::{LeagueHistory, PickOwnershipTable};
pub use league::LeagueAggregator;
pub use sleeper::{LeagueSource, SleeperClient};

pub const LEAGUE_ID_ENV_VAR: &str = "SLEEPER_LEAGUE_ID";
