use crate::cli::types::{DraftId, LeagueId, PlayerId, RosterId, Season, UserId};
use serde::{de, de::Error, Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::marker::PhantomData;


/// Treat an explicit `null` the same as a missing field.
fn de_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Sleeper is inconsistent about numbers vs strings (`"weight": "220"`,
/// `"number": 12`, `"previous_league_id": null`); normalise to text.
fn de_opt_lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(D::Error::custom(format!(
            "expected string or number, got {other}"
        ))),
    }
}

/// Draft slot map: keys come in as strings, empty slots as `null`.
fn de_slot_map<'de, D>(deserializer: D) -> Result<BTreeMap<u32, RosterId>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<BTreeMap<String, Option<RosterId>>> = Deserialize::deserialize(deserializer)?;
    raw.unwrap_or_default()
        .into_iter()
        .filter_map(|(k, v)| v.map(|roster| (k, roster)))
        .map(|(k, roster)| {
            k.parse::<u32>()
                .map(|slot| (slot, roster))
                .map_err(D::Error::custom)
        })
        .collect()
}

/// A JSON object read as `(key, value)` pairs in document order.
fn de_ordered_pairs<'de, D, K, V>(deserializer: D) -> Result<Vec<(K, V)>, D::Error>
where
    D: Deserializer<'de>,
    K: Deserialize<'de>,
    V: Deserialize<'de>,
{
    struct PairsVisitor<K, V>(PhantomData<(K, V)>);

    impl<'de, K, V> de::Visitor<'de> for PairsVisitor<K, V>
    where
        K: Deserialize<'de>,
        V: Deserialize<'de>,
    {
        type Value = Vec<(K, V)>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("an object or null")
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(Vec::new())
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(Vec::new())
        }

        fn visit_some<D2: Deserializer<'de>>(self, d: D2) -> Result<Self::Value, D2::Error> {
            d.deserialize_map(self)
        }

        fn visit_map<A: de::MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
            let mut out = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some(entry) = map.next_entry()? {
                out.push(entry);
            }
            Ok(out)
        }
    }

    deserializer.deserialize_option(PairsVisitor(PhantomData))
}

/// `GET /league/{league_id}`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct League {
    pub league_id: LeagueId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub season: Option<Season>,
    #[serde(default, deserialize_with = "de_opt_lenient_string")]
    pub previous_league_id: Option<String>,
    #[serde(default)]
    pub draft_id: Option<DraftId>,
    #[serde(default, deserialize_with = "de_null_default")]
    pub settings: LeagueSettings,
}

impl League {
    /// The prior season's league, or `None` at the start of the chain.
    pub fn previous_league(&self) -> Option<LeagueId> {
        LeagueId::from_link(self.previous_league_id.as_deref())
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LeagueSettings {
    /// Current week ("leg") of the season
    #[serde(default)]
    pub leg: u16,
}

/// `GET /league/{league_id}/rosters`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Roster {
    pub roster_id: RosterId,
    #[serde(default)]
    pub owner_id: Option<UserId>,
    #[serde(default, deserialize_with = "de_null_default")]
    pub players: Vec<PlayerId>,
    #[serde(default, deserialize_with = "de_null_default")]
    pub starters: Vec<PlayerId>,
    #[serde(default, deserialize_with = "de_null_default")]
    pub taxi: Vec<PlayerId>,
    #[serde(default, deserialize_with = "de_null_default")]
    pub settings: RosterSettings,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RosterSettings {
    #[serde(default)]
    pub waiver_position: Option<u32>,
}

/// `GET /league/{league_id}/users`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct User {
    pub user_id: UserId,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default, deserialize_with = "de_null_default")]
    pub metadata: UserMetadata,
}

impl User {
    /// Custom team name if the owner set one, else their display name.
    pub fn team_name(&self) -> &str {
        self.metadata
            .team_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(&self.display_name)
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct UserMetadata {
    #[serde(default)]
    pub team_name: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    Trade,
    Waiver,
    FreeAgent,
    Commissioner,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionStatus {
    Complete,
    Pending,
    Failed,
    #[serde(other)]
    Other,
}

/// `GET /league/{league_id}/transactions/{week}`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Transaction {
    pub transaction_id: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub status: TransactionStatus,
    /// Milliseconds since the epoch
    #[serde(default)]
    pub status_updated: i64,
    #[serde(default, deserialize_with = "de_null_default")]
    pub roster_ids: Vec<RosterId>,
    /// Player added → receiving roster, in the order Sleeper lists them
    #[serde(default, deserialize_with = "de_ordered_pairs")]
    pub adds: Vec<(PlayerId, RosterId)>,
    #[serde(default, deserialize_with = "de_null_default")]
    pub draft_picks: Vec<TradedPick>,
}

impl Transaction {
    pub fn is_completed_trade(&self) -> bool {
        self.kind == TransactionKind::Trade && self.status == TransactionStatus::Complete
    }
}

/// A future draft pick moved by a trade
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TradedPick {
    pub season: Season,
    pub round: u32,
    /// Roster the pick originally belonged to
    pub roster_id: RosterId,
    #[serde(default)]
    pub previous_owner_id: Option<RosterId>,
    /// Roster receiving the pick
    pub owner_id: RosterId,
}

/// `GET /draft/{draft_id}` and entries of `GET /league/{league_id}/drafts`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Draft {
    pub draft_id: DraftId,
    pub season: Season,
    #[serde(default, deserialize_with = "de_slot_map")]
    pub slot_to_roster_id: BTreeMap<u32, RosterId>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

/// `GET /draft/{draft_id}/picks`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DraftPick {
    pub round: u32,
    pub draft_slot: u32,
    #[serde(default)]
    pub pick_no: Option<u32>,
    pub player_id: PlayerId,
    /// Roster that made the selection (after any pick trades)
    #[serde(default)]
    pub roster_id: Option<RosterId>,
}

/// `GET /league/{league_id}/matchups/{week}`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Matchup {
    pub roster_id: RosterId,
    #[serde(default)]
    pub matchup_id: Option<u32>,
    #[serde(default)]
    pub points: Option<f64>,
}

/// Entry of `GET /players/nfl`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Player {
    #[serde(default)]
    pub player_id: Option<PlayerId>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub college: Option<String>,
    #[serde(default)]
    pub years_exp: Option<u32>,
    #[serde(default)]
    pub birth_date: Option<String>,
    #[serde(default, deserialize_with = "de_opt_lenient_string")]
    pub number: Option<String>,
    #[serde(default, deserialize_with = "de_opt_lenient_string")]
    pub weight: Option<String>,
    #[serde(default, deserialize_with = "de_opt_lenient_string")]
    pub height: Option<String>,
    #[serde(default)]
    pub team: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

impl Player {
    /// Full name, falling back to first/last (team defenses only carry those).
    pub fn display_name(&self) -> Option<String> {
        if let Some(name) = self.full_name.as_deref().filter(|n| !n.is_empty()) {
            return Some(name.to_string());
        }
        match (self.first_name.as_deref(), self.last_name.as_deref()) {
            (Some(first), Some(last)) => Some(format!("{first} {last}")),
            (Some(only), None) | (None, Some(only)) => Some(only.to_string()),
            (None, None) => None,
        }
    }
}

/// Full league-wide player directory keyed by player id
pub type PlayerCatalog = HashMap<PlayerId, Player>;
