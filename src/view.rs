//! View model of the page. Everything here is computed from the current
//! state and holds no state of its own.

use serde::Serialize;

use crate::forms::{AddFriendForm, SplitBillForm};
use crate::schemas::{Friend, FriendId, PaidBy};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BalanceTone {
    Debt,
    Credit,
    Even,
}

impl BalanceTone {
    pub fn css_class(&self) -> Option<&'static str> {
        match self {
            BalanceTone::Debt => Some("red"),
            BalanceTone::Credit => Some("green"),
            BalanceTone::Even => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BalanceLine {
    pub tone: BalanceTone,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FriendRow {
    pub id: FriendId,
    pub name: String,
    pub image: String,
    pub balance: BalanceLine,
    pub selected: bool,
    pub toggle_label: &'static str,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AddFriendView {
    pub name: String,
    pub image_url: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SplitBillView {
    pub title: String,
    pub friend_name: String,
    pub bill: Option<f64>,
    pub user_expense: Option<f64>,
    pub friend_expense_label: String,
    pub friend_expense: f64,
    pub paid_by: Option<PaidBy>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PageView {
    pub friends: Vec<FriendRow>,
    pub add_friend: Option<AddFriendView>,
    pub add_friend_toggle_label: &'static str,
    pub split_bill: Option<SplitBillView>,
}

pub fn balance_line(name: &str, balance: f64, currency: &str) -> BalanceLine {
    if balance < 0.0 {
        BalanceLine {
            tone: BalanceTone::Debt,
            text: format!("You owe {} {}{}", name, balance.abs(), currency),
        }
    } else if balance > 0.0 {
        BalanceLine {
            tone: BalanceTone::Credit,
            text: format!("{} owes you {}{}", name, balance, currency),
        }
    } else {
        BalanceLine {
            tone: BalanceTone::Even,
            text: format!("You and {} are even", name),
        }
    }
}

pub fn friend_row(friend: &Friend, selected: bool, currency: &str) -> FriendRow {
    FriendRow {
        id: friend.id.clone(),
        name: friend.name.clone(),
        image: friend.image.clone(),
        balance: balance_line(&friend.name, friend.balance, currency),
        selected,
        toggle_label: if selected { "Close" } else { "Select" },
    }
}

pub fn add_friend_view(form: &AddFriendForm) -> AddFriendView {
    AddFriendView {
        name: form.name.clone(),
        image_url: form.image_url.clone(),
    }
}

pub fn split_bill_view(friend: &Friend, form: &SplitBillForm) -> SplitBillView {
    SplitBillView {
        title: format!("SPLIT A BILL WITH {}", friend.name.to_uppercase()),
        friend_name: friend.name.clone(),
        bill: form.bill,
        user_expense: form.user_expense,
        friend_expense_label: format!("{}'s expense", friend.name),
        friend_expense: form.friend_expense(),
        paid_by: form.paid_by,
    }
}

pub fn add_friend_toggle_label(open: bool) -> &'static str {
    if open {
        "Close"
    } else {
        "Add friend"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_balance_is_a_debt() {
        let line = balance_line("Clark", -7.0, "€");
        assert_eq!(line.tone, BalanceTone::Debt);
        assert_eq!(line.text, "You owe Clark 7€");
        assert_eq!(line.tone.css_class(), Some("red"));
    }

    #[test]
    fn positive_balance_is_a_credit() {
        let line = balance_line("Sarah", 20.5, "$");
        assert_eq!(line.tone, BalanceTone::Credit);
        assert_eq!(line.text, "Sarah owes you 20.5$");
    }

    #[test]
    fn zero_balance_is_even() {
        let line = balance_line("Anthony", 0.0, "€");
        assert_eq!(line.tone, BalanceTone::Even);
        assert_eq!(line.text, "You and Anthony are even");
        assert_eq!(line.tone.css_class(), None);
    }

    #[test]
    fn row_label_follows_selection() {
        let friend = Friend {
            id: FriendId::new("1"),
            name: "Clark".to_string(),
            image: "img".to_string(),
            balance: 0.0,
        };
        assert_eq!(friend_row(&friend, false, "€").toggle_label, "Select");
        assert_eq!(friend_row(&friend, true, "€").toggle_label, "Close");
    }

    #[test]
    fn split_view_titles_with_uppercase_name() {
        let friend = Friend {
            id: FriendId::new("1"),
            name: "Sarah".to_string(),
            image: "img".to_string(),
            balance: 20.0,
        };
        let mut form = SplitBillForm::for_friend(friend.id.clone());
        form.bill = Some(30.0);
        form.user_expense = Some(10.0);
        let view = split_bill_view(&friend, &form);
        assert_eq!(view.title, "SPLIT A BILL WITH SARAH");
        assert_eq!(view.friend_expense_label, "Sarah's expense");
        assert_eq!(view.friend_expense, 20.0);
    }
}
