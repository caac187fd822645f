use crate::registry::FriendRegistry;
use crate::schemas::{Friend, FriendId};

/// The friend currently targeted by the split-bill form, held by id and
/// looked up in whichever registry is current.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Selection {
    selected: Option<FriendId>,
}

impl Selection {
    pub fn toggle(&mut self, id: &FriendId) {
        if self.is_selected(id) {
            self.selected = None;
        } else {
            self.selected = Some(id.clone());
        }
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&FriendId> {
        self.selected.as_ref()
    }

    pub fn is_selected(&self, id: &FriendId) -> bool {
        self.selected.as_ref() == Some(id)
    }

    pub fn resolve<'a>(&self, registry: &'a FriendRegistry) -> Option<&'a Friend> {
        self.selected.as_ref().and_then(|id| registry.get(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schemas::initial_friends;

    #[test]
    fn toggling_twice_clears() {
        for friend in initial_friends() {
            let mut selection = Selection::default();
            selection.toggle(&friend.id);
            assert!(selection.is_selected(&friend.id));
            selection.toggle(&friend.id);
            assert_eq!(selection.selected(), None);
        }
    }

    #[test]
    fn toggling_another_friend_switches() {
        let mut selection = Selection::default();
        selection.toggle(&FriendId::new("118836"));
        selection.toggle(&FriendId::new("933372"));
        assert_eq!(selection.selected(), Some(&FriendId::new("933372")));
    }

    #[test]
    fn resolves_against_current_registry() {
        let registry = FriendRegistry::new(initial_friends());
        let mut selection = Selection::default();
        selection.toggle(&FriendId::new("118836"));
        let updated = registry.apply_balance_delta(&FriendId::new("118836"), 1.0);

        assert_eq!(selection.resolve(&registry).unwrap().balance, -7.0);
        assert_eq!(selection.resolve(&updated).unwrap().balance, -6.0);

        selection.toggle(&FriendId::new("gone"));
        assert!(selection.resolve(&updated).is_none());

        selection.clear();
        assert!(selection.resolve(&updated).is_none());
    }
}
