use std::sync::Arc;

use log::debug;
use serde::{Serialize, Serializer};

use crate::schemas::{Friend, FriendId};

/// Ordered list of friends. Every update returns a new registry and leaves
/// the one it was called on untouched, so snapshots handed out earlier keep
/// their contents.
#[derive(Clone, Debug, PartialEq)]
pub struct FriendRegistry {
    friends: Arc<[Friend]>,
}

impl Default for FriendRegistry {
    fn default() -> Self {
        FriendRegistry::new(Vec::new())
    }
}

impl FriendRegistry {
    pub fn new(friends: Vec<Friend>) -> Self {
        FriendRegistry {
            friends: friends.into(),
        }
    }

    pub fn append(&self, name: String, image: String) -> (FriendRegistry, FriendId) {
        let id = FriendId::generate();
        let friend = Friend {
            id: id.clone(),
            name,
            image,
            balance: 0.0,
        };
        debug!("appending friend {} ({})", friend.name, id);
        let friends = self
            .friends
            .iter()
            .cloned()
            .chain(std::iter::once(friend))
            .collect();
        (FriendRegistry { friends }, id)
    }

    pub fn apply_balance_delta(&self, id: &FriendId, delta: f64) -> FriendRegistry {
        let friends = self
            .friends
            .iter()
            .map(|friend| {
                if &friend.id == id {
                    debug!(
                        "balance of {} goes from {} to {}",
                        friend.name,
                        friend.balance,
                        friend.balance + delta
                    );
                    Friend {
                        balance: friend.balance + delta,
                        ..friend.clone()
                    }
                } else {
                    friend.clone()
                }
            })
            .collect();
        FriendRegistry { friends }
    }

    pub fn get(&self, id: &FriendId) -> Option<&Friend> {
        self.friends.iter().find(|friend| &friend.id == id)
    }

    pub fn contains(&self, id: &FriendId) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Friend> {
        self.friends.iter()
    }

    pub fn len(&self) -> usize {
        self.friends.len()
    }

    pub fn is_empty(&self) -> bool {
        self.friends.is_empty()
    }
}

impl Serialize for FriendRegistry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.friends.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schemas::initial_friends;
    use std::collections::HashSet;

    fn clark() -> FriendId {
        FriendId::new("118836")
    }

    #[test]
    fn append_adds_friend_with_zero_balance_and_fresh_id() {
        let registry = FriendRegistry::new(initial_friends());
        let (updated, id) = registry.append("Bob".to_string(), "http://x/y".to_string());

        assert_eq!(updated.len(), registry.len() + 1);
        assert!(!registry.contains(&id));
        let bob = updated.get(&id).unwrap();
        assert_eq!(bob.name, "Bob");
        assert_eq!(bob.image, "http://x/y");
        assert_eq!(bob.balance, 0.0);

        let ids: HashSet<_> = updated.iter().map(|friend| friend.id.clone()).collect();
        assert_eq!(ids.len(), updated.len());
        assert_eq!(updated.iter().last().unwrap().id, id);
    }

    #[test]
    fn delta_only_touches_the_matching_friend() {
        let registry = FriendRegistry::new(initial_friends());
        let updated = registry.apply_balance_delta(&clark(), 15.0);

        assert_eq!(updated.get(&clark()).unwrap().balance, 8.0);
        assert_eq!(updated.get(&FriendId::new("933372")).unwrap().balance, 20.0);
        assert_eq!(updated.get(&FriendId::new("499476")).unwrap().balance, 0.0);
    }

    #[test]
    fn previous_snapshot_keeps_old_balance() {
        let registry = FriendRegistry::new(initial_friends());
        let snapshot = registry.clone();
        let updated = registry.apply_balance_delta(&clark(), -5.0);

        assert_eq!(updated.get(&clark()).unwrap().balance, -12.0);
        assert_eq!(snapshot.get(&clark()).unwrap().balance, -7.0);
        assert_eq!(registry.get(&clark()).unwrap().balance, -7.0);
    }

    #[test]
    fn unknown_id_leaves_registry_unchanged() {
        let registry = FriendRegistry::new(initial_friends());
        let updated = registry.apply_balance_delta(&FriendId::new("nobody"), 3.0);
        assert_eq!(updated, registry);
    }

    #[test]
    fn order_is_preserved() {
        let registry = FriendRegistry::new(initial_friends());
        let names: Vec<_> = registry
            .apply_balance_delta(&FriendId::new("933372"), 1.0)
            .iter()
            .map(|friend| friend.name.clone())
            .collect();
        assert_eq!(names, ["Clark", "Sarah", "Anthony"]);
    }
}
