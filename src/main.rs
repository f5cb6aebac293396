//! Entry point: parse CLI and dispatch to command handlers.

use anyhow::Context;
use clap::Parser;
use sleeper_ffl::{
    cli::{Commands, GetCmd, Sleeper},
    commands::{
        league_views::{
            handle_picks, handle_rosters, handle_schedule, handle_trades, handle_waivers,
        },
        nfl_state::{handle_nfl_state, handle_traded_picks},
    },
    logging::setup_logging,
};

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app = Sleeper::parse();
    setup_logging(app.verbose);

    match app.command {
        Commands::Get { cmd } => match cmd {
            GetCmd::Trades { league } => handle_trades(league)
                .await
                .context("failed to build trade history")?,
            GetCmd::Rosters { league } => handle_rosters(league)
                .await
                .context("failed to build rosters")?,
            GetCmd::Waivers { league } => handle_waivers(league)
                .await
                .context("failed to build waiver order")?,
            GetCmd::Schedule { league } => handle_schedule(league)
                .await
                .context("failed to build schedule")?,
            GetCmd::Picks { league } => handle_picks(league)
                .await
                .context("failed to build draft pick table")?,
            GetCmd::TradedPicks { draft_id } => handle_traded_picks(draft_id)
                .await
                .context("failed to fetch traded picks")?,
            GetCmd::NflState => handle_nfl_state()
                .await
                .context("failed to fetch NFL state")?,
        },
    }

    Ok(())
}
