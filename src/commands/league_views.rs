//! Handlers for the league views: trades, rosters, waivers, schedule, picks.

use std::collections::BTreeMap;

use super::{load_league, print_json};
use crate::{
    cli::LeagueArgs,
    history::PickOwnershipTable,
    views::{PlayerDirectory, RosterView, TradeSummary, WeekSchedule},
    Result, Week,
};

pub async fn handle_trades(args: LeagueArgs) -> Result<()> {
    let mut league = load_league(args.league_id).await?;
    let trades = league.trades().await?;

    if args.json {
        return print_json(&trades);
    }
    for trade in &trades {
        for line in render_trade(trade) {
            println!("{line}");
        }
    }
    Ok(())
}

pub async fn handle_rosters(args: LeagueArgs) -> Result<()> {
    let mut league = load_league(args.league_id).await?;
    let rosters = league.roster_views().await?;

    if args.json {
        return print_json(&rosters);
    }
    for roster in &rosters {
        for line in render_roster(roster) {
            println!("{line}");
        }
    }
    Ok(())
}

pub async fn handle_waivers(args: LeagueArgs) -> Result<()> {
    let league = load_league(args.league_id).await?;
    let order = league.waiver_order()?;

    if args.json {
        return print_json(&order);
    }
    for line in render_waivers(&order) {
        println!("{line}");
    }
    Ok(())
}

pub async fn handle_schedule(args: LeagueArgs) -> Result<()> {
    let mut league = load_league(args.league_id).await?;
    let schedule = league.schedule().await?;

    if args.json {
        return print_json(schedule);
    }
    for (week, matchups) in schedule {
        for line in render_week(*week, matchups) {
            println!("{line}");
        }
    }
    Ok(())
}

pub async fn handle_picks(args: LeagueArgs) -> Result<()> {
    let mut league = load_league(args.league_id).await?;

    if args.json {
        return print_json(league.picks());
    }
    let (picks, directory) = league.picks_with_names().await?;
    for line in render_picks(picks, directory) {
        println!("{line}");
    }
    Ok(())
}

pub fn render_trade(trade: &TradeSummary) -> Vec<String> {
    let mut lines = vec![format!("Trade {} @ {}", trade.transaction_id, trade.timestamp)];
    for part in &trade.trade_parts {
        let received = if part.adds.is_empty() {
            "nothing".to_string()
        } else {
            part.adds.join(", ")
        };
        lines.push(format!("  {} receives: {}", part.new_roster, received));
    }
    lines
}

pub fn render_roster(roster: &RosterView) -> Vec<String> {
    let mut lines = vec![format!("Roster {} ({})", roster.roster_id, roster.owner_name)];
    for player in &roster.players {
        lines.push(format!(
            "  {:<4} {:<28} {}",
            player.position.as_deref().unwrap_or("-"),
            player.full_name.as_deref().unwrap_or(player.player_id.as_str()),
            player.team.as_deref().unwrap_or("FA"),
        ));
    }
    lines
}

pub fn render_waivers(order: &BTreeMap<u32, String>) -> Vec<String> {
    order
        .iter()
        .map(|(position, team)| format!("{position:>2}. {team}"))
        .collect()
}

pub fn render_week(week: Week, matchups: &WeekSchedule) -> Vec<String> {
    let mut lines = vec![format!("Week {week}")];
    for (matchup_id, sides) in matchups {
        let teams: Vec<&str> = sides.iter().map(|s| s.team.as_str()).collect();
        lines.push(format!("  #{matchup_id}: {}", teams.join(" vs ")));
    }
    lines
}

pub fn render_picks(picks: &PickOwnershipTable, directory: &PlayerDirectory) -> Vec<String> {
    let mut lines = Vec::new();
    for season in picks.seasons() {
        lines.push(format!("{season}"));
        for (round, slots) in picks.rounds(season) {
            for (roster, player) in slots {
                let name = directory.full_name(player).unwrap_or(player.as_str());
                lines.push(format!("  R{round} roster {roster}: {name}"));
            }
        }
    }
    lines
}
