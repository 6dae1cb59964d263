//! Roster aggregation: official groups with per-user medal and award tallies

use std::collections::HashMap;

use serde::Serialize;

use crate::models::{Award, OfficialGroup, User};

use super::MedalTally;

/// A group member as shown on the roster
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RosterUser {
    pub username: String,
    pub nickname: String,
    pub cf_rating: i32,
    /// Non-empty award labels in award order
    pub awards: Vec<String>,
    pub medals: MedalTally,
}

impl From<&User> for RosterUser {
    fn from(user: &User) -> Self {
        Self {
            username: user.username.clone(),
            nickname: user.nickname.clone(),
            cf_rating: user.cf_rating,
            awards: Vec::new(),
            medals: MedalTally::default(),
        }
    }
}

/// An official group with its aggregated members
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RosterGroup {
    pub group_id: i32,
    pub group_name: String,
    pub users: Vec<RosterUser>,
}

/// Fold awards into the members of `groups`.
///
/// Awards whose username is not a member of any group are skipped. Groups
/// left without members are dropped. The result is ordered by group name
/// descending, members by username ascending.
pub fn aggregate_roster(groups: Vec<OfficialGroup>, awards: &[Award]) -> Vec<RosterGroup> {
    let mut members: HashMap<&str, RosterUser> = HashMap::new();
    for user in groups.iter().flat_map(|group| &group.users) {
        members.insert(user.username.as_str(), RosterUser::from(user));
    }

    for award in awards {
        let Some(member) = members.get_mut(award.username.as_str()) else {
            continue;
        };
        if award.medal > 0 && !member.medals.record(award.medal) {
            tracing::warn!(
                username = %award.username,
                xcpc_id = award.xcpc_id,
                medal = award.medal,
                "Ignoring unknown medal code"
            );
        }
        if !award.award.is_empty() {
            member.awards.push(award.award.clone());
        }
    }

    let mut roster: Vec<RosterGroup> = groups
        .iter()
        .filter_map(|group| {
            let mut users: Vec<RosterUser> = group
                .users
                .iter()
                .filter_map(|user| members.get(user.username.as_str()).cloned())
                .collect();
            if users.is_empty() {
                return None;
            }
            users.sort_by(|a, b| a.username.cmp(&b.username));

            Some(RosterGroup {
                group_id: group.group_id,
                group_name: group.group_name.clone(),
                users,
            })
        })
        .collect();

    roster.sort_by(|a, b| b.group_name.cmp(&a.group_name));

    tracing::debug!(
        groups = roster.len(),
        members = members.len(),
        awards = awards.len(),
        "Aggregated roster"
    );

    roster
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(username: &str) -> User {
        User {
            username: username.to_string(),
            nickname: username.to_uppercase(),
            cf_rating: 1500,
            ..User::default()
        }
    }

    fn group(group_id: i32, group_name: &str, usernames: &[&str]) -> OfficialGroup {
        OfficialGroup {
            group_id,
            group_name: group_name.to_string(),
            users: usernames.iter().map(|u| user(u)).collect(),
        }
    }

    fn award(username: &str, medal: i32, label: &str) -> Award {
        Award {
            username: username.to_string(),
            medal,
            award: label.to_string(),
            xcpc_id: 1,
        }
    }

    #[test]
    fn test_medals_and_awards() {
        let groups = vec![group(1, "A", &["alice", "bob"])];
        let awards = vec![award("alice", 1, "Gold"), award("bob", 0, "")];
        let roster = aggregate_roster(groups, &awards);

        assert_eq!(roster.len(), 1);
        let alice = &roster[0].users[0];
        let bob = &roster[0].users[1];
        assert_eq!(alice.username, "alice");
        assert_eq!(alice.medals.as_array(), [1, 0, 0]);
        assert_eq!(alice.awards, vec!["Gold".to_string()]);
        assert_eq!(bob.medals.as_array(), [0, 0, 0]);
        assert!(bob.awards.is_empty());
    }

    #[test]
    fn test_award_labels_keep_input_order() {
        let groups = vec![group(1, "2020", &["carol"])];
        let awards = vec![
            award("carol", 3, "Bronze, Shenyang"),
            award("carol", 0, "Honorable mention"),
            award("carol", 2, ""),
            award("carol", 1, "Champion"),
        ];
        let roster = aggregate_roster(groups, &awards);
        let carol = &roster[0].users[0];

        assert_eq!(carol.medals.as_array(), [1, 1, 1]);
        assert_eq!(
            carol.awards,
            vec!["Bronze, Shenyang", "Honorable mention", "Champion"]
        );
    }

    #[test]
    fn test_sorting() {
        let groups = vec![
            group(1, "2019", &["zed", "amy"]),
            group(2, "2021", &["mike"]),
            group(3, "2020", &["lee", "dan", "kim"]),
        ];
        let roster = aggregate_roster(groups, &[]);

        let names: Vec<&str> = roster.iter().map(|g| g.group_name.as_str()).collect();
        assert_eq!(names, vec!["2021", "2020", "2019"]);
        let users: Vec<&str> = roster[1].users.iter().map(|u| u.username.as_str()).collect();
        assert_eq!(users, vec!["dan", "kim", "lee"]);
        assert_eq!(roster[2].users[0].username, "amy");
    }

    #[test]
    fn test_empty_groups_dropped() {
        let groups = vec![group(1, "2018", &[]), group(2, "2022", &["eve"])];
        let roster = aggregate_roster(groups, &[]);

        assert_eq!(roster.len(), 1);
        assert_eq!(roster[0].group_id, 2);
        assert!(roster.iter().all(|g| !g.users.is_empty()));
    }

    #[test]
    fn test_awards_for_non_members_ignored() {
        let groups = vec![group(1, "2020", &["alice"])];
        let awards = vec![award("mallory", 1, "Gold"), award("alice", 2, "Silver")];
        let roster = aggregate_roster(groups, &awards);

        assert_eq!(roster[0].users.len(), 1);
        assert_eq!(roster[0].users[0].medals.as_array(), [0, 1, 0]);
    }

    #[test]
    fn test_unknown_medal_code_keeps_label() {
        let groups = vec![group(1, "2020", &["alice"])];
        let roster = aggregate_roster(groups, &[award("alice", 7, "Special prize")]);

        assert_eq!(roster[0].users[0].medals, MedalTally::default());
        assert_eq!(roster[0].users[0].awards, vec!["Special prize"]);
    }
}
