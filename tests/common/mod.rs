//! In-memory `LeagueSource` for integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::{json, Value};
use sleeper_ffl::{
    sleeper::types::{Draft, DraftPick, League, Matchup, PlayerCatalog, Roster, Transaction, User},
    DraftId, LeagueId, LeagueSource, Result, SleeperError, Week,
};
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Debug, Default)]
pub struct FakeLeague {
    pub league: Value,
    pub rosters: Value,
    pub users: Value,
    pub transactions: HashMap<u16, Value>,
    pub matchups: HashMap<u16, Value>,
    pub drafts: Value,
}

/// Serves canned JSON and records every call in order.
#[derive(Debug, Default)]
pub struct FakeSleeper {
    pub leagues: HashMap<String, FakeLeague>,
    pub drafts: HashMap<String, (Value, Value)>,
    pub players: Value,
    pub fail_league: Option<String>,
    pub calls: Mutex<Vec<String>>,
}

impl FakeSleeper {
    pub fn add_league(&mut self, id: &str, league: FakeLeague) {
        self.leagues.insert(id.to_string(), league);
    }

    pub fn add_draft(&mut self, id: &str, draft: Value, picks: Value) {
        self.drafts.insert(id.to_string(), (draft, picks));
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, prefix: &str) -> usize {
        self.calls().iter().filter(|c| c.starts_with(prefix)).count()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    fn league(&self, id: &LeagueId) -> Result<&FakeLeague> {
        if self.fail_league.as_deref() == Some(id.as_str()) {
            return Err(SleeperError::RemoteUnavailable {
                url: format!("/league/{id}"),
                status: 500,
            });
        }
        self.leagues
            .get(id.as_str())
            .ok_or_else(|| SleeperError::RemoteUnavailable {
                url: format!("/league/{id}"),
                status: 404,
            })
    }

    fn draft(&self, id: &DraftId) -> Result<&(Value, Value)> {
        self.drafts
            .get(id.as_str())
            .ok_or_else(|| SleeperError::RemoteUnavailable {
                url: format!("/draft/{id}"),
                status: 404,
            })
    }
}

fn decode<T: serde::de::DeserializeOwned>(value: &Value) -> Result<T> {
    Ok(serde_json::from_value(value.clone())?)
}

fn decode_list<T: serde::de::DeserializeOwned>(value: Option<&Value>) -> Result<Vec<T>> {
    match value {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(v) => decode(v),
    }
}

#[async_trait]
impl LeagueSource for FakeSleeper {
    async fn get_league(&self, league_id: &LeagueId) -> Result<League> {
        self.record(format!("league {league_id}"));
        decode(&self.league(league_id)?.league)
    }

    async fn get_rosters(&self, league_id: &LeagueId) -> Result<Vec<Roster>> {
        self.record(format!("rosters {league_id}"));
        decode_list(Some(&self.league(league_id)?.rosters))
    }

    async fn get_users(&self, league_id: &LeagueId) -> Result<Vec<User>> {
        self.record(format!("users {league_id}"));
        decode_list(Some(&self.league(league_id)?.users))
    }

    async fn get_transactions(&self, league_id: &LeagueId, week: Week) -> Result<Vec<Transaction>> {
        self.record(format!("transactions {league_id} {week}"));
        decode_list(self.league(league_id)?.transactions.get(&week.as_u16()))
    }

    async fn get_matchups(&self, league_id: &LeagueId, week: Week) -> Result<Vec<Matchup>> {
        self.record(format!("matchups {league_id} {week}"));
        decode_list(self.league(league_id)?.matchups.get(&week.as_u16()))
    }

    async fn get_drafts(&self, league_id: &LeagueId) -> Result<Vec<Draft>> {
        self.record(format!("drafts {league_id}"));
        decode_list(Some(&self.league(league_id)?.drafts))
    }

    async fn get_draft(&self, draft_id: &DraftId) -> Result<Draft> {
        self.record(format!("draft {draft_id}"));
        decode(&self.draft(draft_id)?.0)
    }

    async fn get_draft_picks(&self, draft_id: &DraftId) -> Result<Vec<DraftPick>> {
        self.record(format!("picks {draft_id}"));
        decode_list(Some(&self.draft(draft_id)?.1))
    }

    async fn get_players(&self) -> Result<PlayerCatalog> {
        self.record("players".to_string());
        decode(&self.players)
    }
}

pub fn league_json(id: &str, season: &str, previous: Value, draft_id: &str, leg: u16) -> Value {
    json!({
        "league_id": id,
        "season": season,
        "previous_league_id": previous,
        "draft_id": draft_id,
        "settings": { "leg": leg }
    })
}

pub fn draft_json(id: &str, season: &str, slots: Value) -> Value {
    json!({
        "draft_id": id,
        "season": season,
        "status": "complete",
        "slot_to_roster_id": slots
    })
}

pub fn trade_json(id: &str, ts: i64, roster_ids: Value, adds: Value, picks: Value) -> Value {
    json!({
        "transaction_id": id,
        "type": "trade",
        "status": "complete",
        "status_updated": ts,
        "roster_ids": roster_ids,
        "adds": adds,
        "draft_picks": picks
    })
}

/// Two-team dynasty league: 100 (2022) → 200 (2023) → 300 (2024, current week 2).
///
/// Roster 1 belongs to `u1` ("Mahomes Alone"), roster 2 to `u2` (no team name).
/// The 2023 season ran a rookie draft (rounds 1-2) and a separate
/// supplemental draft (round 4). The 2024 draft has not started.
pub fn dynasty() -> FakeSleeper {
    let mut fake = FakeSleeper::default();

    let mut current = FakeLeague {
        league: league_json("300", "2024", json!("200"), "d2024", 2),
        rosters: json!([
            { "roster_id": 1, "owner_id": "u1", "players": ["6794", "9226", "4046"],
              "starters": ["4046"], "taxi": null, "settings": { "waiver_position": 2 } },
            { "roster_id": 2, "owner_id": "u2", "players": ["9509", "8150"],
              "starters": [], "taxi": ["8150"], "settings": { "waiver_position": 1 } }
        ]),
        users: json!([
            { "user_id": "u1", "display_name": "greg", "avatar": "av1",
              "metadata": { "team_name": "Mahomes Alone" } },
            { "user_id": "u2", "display_name": "wendy", "avatar": null, "metadata": {} }
        ]),
        ..FakeLeague::default()
    };
    current.transactions.insert(
        1,
        json!([
            trade_json("c-trade", 3000, json!([1, 2]), json!({ "9509": 2, "4046": 1 }), json!([
                { "season": "2025", "round": 1, "roster_id": 1, "previous_owner_id": 1, "owner_id": 2 }
            ])),
            { "transaction_id": "c-fa", "type": "free_agent", "status": "complete",
              "status_updated": 3500, "roster_ids": [2], "adds": { "8150": 2 }, "draft_picks": [] }
        ]),
    );
    let mut failed = trade_json("c-failed", 4000, json!([1, 2]), json!({ "4046": 2 }), json!([]));
    failed["status"] = json!("failed");
    current.transactions.insert(2, json!([failed]));
    for week in 1..=12u16 {
        current.matchups.insert(
            week,
            json!([
                { "roster_id": 1, "matchup_id": 1, "points": 100.0 },
                { "roster_id": 2, "matchup_id": 1, "points": 90.0 }
            ]),
        );
    }
    fake.add_league("300", current);
    fake.add_draft("d2024", draft_json("d2024", "2024", json!(null)), json!([]));

    let mut b = FakeLeague {
        league: league_json("200", "2023", json!("100"), "d2023", 17),
        drafts: json!([
            draft_json("d2023", "2023", json!({ "1": 2, "2": 1 })),
            draft_json("d2023s", "2023", json!({ "1": 1, "2": 2 }))
        ]),
        ..FakeLeague::default()
    };
    b.transactions.insert(
        5,
        json!([
            trade_json("b-trade", 2000, json!([1, 2]), json!({ "6794": 1 }), json!([
                { "season": "2023", "round": 4, "roster_id": 1, "previous_owner_id": 1, "owner_id": 2 },
                { "season": "2023", "round": 3, "roster_id": 1, "previous_owner_id": 1, "owner_id": 2 }
            ])),
        ]),
    );
    fake.add_league("200", b);
    fake.add_draft(
        "d2023",
        draft_json("d2023", "2023", json!({ "1": 2, "2": 1 })),
        json!([
            { "round": 1, "draft_slot": 1, "pick_no": 1, "player_id": "9509", "roster_id": 1 },
            { "round": 1, "draft_slot": 2, "pick_no": 2, "player_id": "9226", "roster_id": 1 },
            { "round": 2, "draft_slot": 1, "pick_no": 3, "player_id": "7000", "roster_id": 2 }
        ]),
    );
    fake.add_draft(
        "d2023s",
        draft_json("d2023s", "2023", json!({ "1": 1, "2": 2 })),
        json!([
            { "round": 4, "draft_slot": 1, "pick_no": 1, "player_id": "8150", "roster_id": 2 }
        ]),
    );

    let mut a = FakeLeague {
        league: league_json("100", "2022", json!(null), "d2022", 17),
        drafts: json!([draft_json("d2022", "2022", json!({ "1": 1, "2": 2 }))]),
        ..FakeLeague::default()
    };
    a.transactions.insert(
        16,
        json!([
            trade_json("a-trade", 1000, json!([2, 1]), json!(null), json!([
                { "season": "2023", "round": 1, "roster_id": 2, "previous_owner_id": 2, "owner_id": 1 }
            ])),
        ]),
    );
    fake.add_league("100", a);
    fake.add_draft(
        "d2022",
        draft_json("d2022", "2022", json!({ "1": 1, "2": 2 })),
        json!([
            { "round": 1, "draft_slot": 1, "pick_no": 1, "player_id": "4046", "roster_id": 1 },
            { "round": 1, "draft_slot": 2, "pick_no": 2, "player_id": "6794", "roster_id": 2 }
        ]),
    );

    fake.players = json!({
        "4046": { "player_id": "4046", "position": "QB", "full_name": "Patrick Mahomes", "team": "KC" },
        "6794": { "player_id": "6794", "position": "WR", "full_name": "Justin Jefferson", "team": "MIN" },
        "9509": { "player_id": "9509", "position": "RB", "full_name": "Bijan Robinson", "team": "ATL" },
        "9226": { "player_id": "9226", "position": "RB", "full_name": "Jahmyr Gibbs", "team": "DET" },
        "8150": { "player_id": "8150", "position": "TE", "full_name": "Sam LaPorta", "team": "DET" },
        "7000": { "player_id": "7000", "position": "K", "full_name": "Some Kicker", "team": null }
    });

    fake
}

pub fn league_id(id: &str) -> LeagueId {
    id.parse().unwrap()
}
