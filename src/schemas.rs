use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_IMAGE_URL: &str = "https://i.pravatar.cc/48";

#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(transparent)]
pub struct FriendId(String);

impl FriendId {
    pub fn new(id: impl Into<String>) -> Self {
        FriendId(id.into())
    }

    pub fn generate() -> Self {
        FriendId(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FriendId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Friend {
    pub id: FriendId,
    pub name: String,
    pub image: String,
    /// Negative when the user owes this friend, positive when the friend owes the user
    pub balance: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PaidBy {
    User,
    Friend,
}

impl PaidBy {
    /// Anything other than the two known values counts as an unset select.
    pub fn parse(value: &str) -> Option<PaidBy> {
        match value {
            "user" => Some(PaidBy::User),
            "friend" => Some(PaidBy::Friend),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PaidBy::User => "user",
            PaidBy::Friend => "friend",
        }
    }
}

pub fn seed_image_url(id: &FriendId) -> String {
    format!("{}?u={}", DEFAULT_IMAGE_URL, id)
}

pub fn initial_friends() -> Vec<Friend> {
    [("118836", "Clark", -7.0), ("933372", "Sarah", 20.0), ("499476", "Anthony", 0.0)]
        .into_iter()
        .map(|(id, name, balance)| {
            let id = FriendId::new(id);
            Friend {
                image: seed_image_url(&id),
                id,
                name: name.to_string(),
                balance,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_friends_use_pravatar_pattern() {
        let friends = initial_friends();
        assert_eq!(friends.len(), 3);
        assert_eq!(friends[0].name, "Clark");
        assert_eq!(friends[0].image, "https://i.pravatar.cc/48?u=118836");
        assert_eq!(friends[0].balance, -7.0);
        assert_eq!(friends[1].balance, 20.0);
        assert_eq!(friends[2].balance, 0.0);
    }

    #[test]
    fn generated_ids_differ() {
        assert_ne!(FriendId::generate(), FriendId::generate());
    }

    #[test]
    fn paid_by_parses_only_known_values() {
        assert_eq!(PaidBy::parse("user"), Some(PaidBy::User));
        assert_eq!(PaidBy::parse("friend"), Some(PaidBy::Friend));
        assert_eq!(PaidBy::parse(""), None);
        assert_eq!(PaidBy::parse("someone"), None);
    }

    #[test]
    fn friend_serializes_id_as_plain_string() {
        let friend = &initial_friends()[1];
        let json = serde_json::to_value(friend).unwrap();
        assert_eq!(json["id"], "933372");
        assert_eq!(json["balance"], 20.0);
    }
}
