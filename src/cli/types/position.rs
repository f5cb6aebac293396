//! Fantasy football position types and roster ordering.

use crate::error::SleeperError;
use std::fmt;
use std::str::FromStr;

/// Fantasy football player positions as reported by Sleeper.
///
/// # Examples
///
/// ```rust
/// use sleeper_ffl::Position;
///
/// let qb: Position = "qb".parse().unwrap();
/// assert_eq!(qb, Position::QB);
/// assert_eq!(Position::DEF.to_string(), "DEF");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    QB,
    RB,
    WR,
    TE,
    K,
    DEF,
}

impl Position {
    /// Display order for roster views.
    pub const ROSTER_ORDER: [Position; 4] = [Position::QB, Position::RB, Position::WR, Position::TE];

    /// Sort key for a raw position string. Anything outside `ROSTER_ORDER`
    /// (kickers, defenses, missing positions) shares one trailing bucket.
    pub fn roster_rank(raw: Option<&str>) -> usize {
        raw.and_then(|s| s.parse::<Position>().ok())
            .and_then(|p| Self::ROSTER_ORDER.iter().position(|o| *o == p))
            .unwrap_or(Self::ROSTER_ORDER.len())
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Position::QB => "QB",
            Position::RB => "RB",
            Position::WR => "WR",
            Position::TE => "TE",
            Position::K => "K",
            Position::DEF => "DEF",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Position {
    type Err = SleeperError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "QB" => Ok(Position::QB),
            "RB" => Ok(Position::RB),
            "WR" => Ok(Position::WR),
            "TE" => Ok(Position::TE),
            "K" => Ok(Position::K),
            "DEF" | "D/ST" | "DST" => Ok(Position::DEF),
            _ => Err(SleeperError::InvalidPosition {
                position: s.to_string(),
            }),
        }
    }
}
