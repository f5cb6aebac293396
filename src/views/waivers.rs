//! Waiver priority by team name

use std::collections::BTreeMap;

use super::find_owner;
use crate::{
    sleeper::types::{Roster, User},
    Result, SleeperError,
};

/// Waiver priority → team name
pub fn build_waiver_order(rosters: &[Roster], users: &[User]) -> Result<BTreeMap<u32, String>> {
    let mut order = BTreeMap::new();
    for roster in rosters {
        let position = roster
            .settings
            .waiver_position
            .ok_or_else(|| SleeperError::not_found("Waiver position", roster.roster_id))?;
        let owner = find_owner(users, roster)?;
        order.insert(position, owner.team_name().to_string());
    }
    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::fixtures::{roster, user};

    #[test]
    fn test_waiver_order_uses_team_names() {
        let rosters = vec![
            roster(1, Some("u1"), &[], Some(3)),
            roster(2, Some("u2"), &[], Some(1)),
            roster(3, Some("u3"), &[], Some(2)),
        ];
        let users = vec![
            user("u1", "greg", Some("Mahomes Alone"), None),
            user("u2", "wendy", None, None),
            user("u3", "sam", Some("Kittle Big Planet"), None),
        ];

        let order = build_waiver_order(&rosters, &users).unwrap();
        let names: Vec<(&u32, &str)> = order.iter().map(|(k, v)| (k, v.as_str())).collect();
        assert_eq!(
            names,
            vec![(&1, "wendy"), (&2, "Kittle Big Planet"), (&3, "Mahomes Alone")]
        );
    }

    #[test]
    fn test_missing_waiver_position() {
        let rosters = vec![roster(5, Some("u1"), &[], None)];
        let users = vec![user("u1", "greg", None, None)];

        let err = build_waiver_order(&rosters, &users).unwrap_err();
        assert_eq!(err.to_string(), "Waiver position not found: 5");
    }

    #[test]
    fn test_missing_owner() {
        let rosters = vec![roster(1, Some("ghost"), &[], Some(1))];
        assert!(build_waiver_order(&rosters, &[]).is_err());
    }
}
