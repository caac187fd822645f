use log::debug;

use crate::error::AppError;
use crate::forms::{AddFriendForm, SplitBillFields, SplitBillForm};
use crate::registry::FriendRegistry;
use crate::schemas::{initial_friends, Friend, FriendId};
use crate::selection::Selection;
use crate::view::{self, PageView};

/// Whole state of the page. Each public `&mut self` method is one user
/// action and leaves the state ready to be rendered again.
#[derive(Clone, Debug)]
pub struct SplitApp {
    friends: FriendRegistry,
    selection: Selection,
    add_form_open: bool,
    add_form: AddFriendForm,
    split_form: Option<SplitBillForm>,
}

impl Default for SplitApp {
    fn default() -> Self {
        SplitApp::new(initial_friends())
    }
}

impl SplitApp {
    pub fn new(friends: Vec<Friend>) -> Self {
        SplitApp {
            friends: FriendRegistry::new(friends),
            selection: Selection::default(),
            add_form_open: false,
            add_form: AddFriendForm::default(),
            split_form: None,
        }
    }

    pub fn friends(&self) -> &FriendRegistry {
        &self.friends
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn add_form_open(&self) -> bool {
        self.add_form_open
    }

    pub fn split_form(&self) -> Option<&SplitBillForm> {
        self.split_form.as_ref()
    }

    pub fn toggle_add_form(&mut self) {
        self.add_form_open = !self.add_form_open;
        if self.add_form_open {
            self.add_form = AddFriendForm::default();
        }
        debug!("add friend form open: {}", self.add_form_open);
    }

    pub fn select_friend(&mut self, id: &FriendId) -> Result<(), AppError> {
        if !self.friends.contains(id) {
            return Err(AppError::FriendNotFound(id.clone()));
        }
        self.selection.toggle(id);
        self.add_form_open = false;
        self.rekey_split_form();
        debug!("selected friend: {:?}", self.selection.selected());
        Ok(())
    }

    /// Returns the id of the new friend, or `None` when nothing was added.
    pub fn submit_add_friend(&mut self, form: AddFriendForm) -> Option<FriendId> {
        if !self.add_form_open {
            debug!("ignoring add friend submission while the form is closed");
            return None;
        }
        self.add_form = form;
        let (name, image) = self.add_form.submission()?;
        let (friends, id) = self.friends.append(name, image);
        self.friends = friends;
        self.add_form_open = false;
        self.add_form = AddFriendForm::default();
        Some(id)
    }

    /// Returns the delta applied to the selected friend, or `None` when the
    /// submission was refused. A refused submission keeps the entered values.
    pub fn submit_split_bill(&mut self, fields: &SplitBillFields) -> Option<f64> {
        let form = self.split_form.as_mut()?;
        form.update(fields);
        let delta = form.delta()?;
        let id = form.friend().clone();
        self.friends = self.friends.apply_balance_delta(&id, delta);
        self.selection.clear();
        self.rekey_split_form();
        Some(delta)
    }

    pub fn view(&self, currency: &str) -> PageView {
        let friends = self
            .friends
            .iter()
            .map(|friend| {
                view::friend_row(friend, self.selection.is_selected(&friend.id), currency)
            })
            .collect();
        let split_bill = self
            .selection
            .resolve(&self.friends)
            .zip(self.split_form.as_ref())
            .map(|(friend, form)| view::split_bill_view(friend, form));
        PageView {
            friends,
            add_friend: self
                .add_form_open
                .then(|| view::add_friend_view(&self.add_form)),
            add_friend_toggle_label: view::add_friend_toggle_label(self.add_form_open),
            split_bill,
        }
    }

    // The split form belongs to one friend; a new selection starts from scratch.
    fn rekey_split_form(&mut self) {
        self.split_form = match (self.selection.selected(), self.split_form.take()) {
            (None, _) => None,
            (Some(id), Some(form)) if form.friend() == id => Some(form),
            (Some(id), _) => Some(SplitBillForm::for_friend(id.clone())),
        };
    }
}
