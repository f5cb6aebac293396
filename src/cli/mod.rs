//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use types::{DraftId, LeagueId};

/// Arguments shared by every league view
#[derive(Debug, Args)]
pub struct LeagueArgs {
    /// League ID (or set `SLEEPER_LEAGUE_ID` env var).
    #[clap(long, short)]
    pub league_id: Option<LeagueId>,

    /// Output results as JSON instead of text lines.
    #[clap(long)]
    pub json: bool,
}

#[derive(Debug, Subcommand)]
pub enum GetCmd {
    /// Completed trades across every season, newest first.
    ///
    /// Traded draft picks are labelled with the player they became once
    /// that season's draft has run.
    Trades {
        #[clap(flatten)]
        league: LeagueArgs,
    },

    /// Current rosters with players ordered QB, RB, WR, TE.
    Rosters {
        #[clap(flatten)]
        league: LeagueArgs,
    },

    /// Waiver priority for every team.
    Waivers {
        #[clap(flatten)]
        league: LeagueArgs,
    },

    /// Regular-season matchups grouped by week.
    Schedule {
        #[clap(flatten)]
        league: LeagueArgs,
    },

    /// Draft results from every season: season, round, original roster, player.
    Picks {
        #[clap(flatten)]
        league: LeagueArgs,
    },

    /// Raw traded picks for a draft, as returned by Sleeper.
    TradedPicks {
        /// Draft ID
        #[clap(long, short)]
        draft_id: DraftId,
    },

    /// Raw current NFL state (season, week), as returned by Sleeper.
    NflState,
}

#[derive(Debug, Parser)]
#[clap(name = "sleeper-ffl", about = "Sleeper Fantasy Football league history CLI")]
pub struct Sleeper {
    /// Log debug detail (every request) to stderr.
    #[clap(long, short, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Get data from a Sleeper league
    Get {
        #[clap(subcommand)]
        cmd: GetCmd,
    },
}
