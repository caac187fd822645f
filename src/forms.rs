use serde::{Deserialize, Serialize};

use crate::schemas::{FriendId, PaidBy, DEFAULT_IMAGE_URL};

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AddFriendForm {
    pub name: String,
    #[serde(rename = "image")]
    pub image_url: String,
}

impl Default for AddFriendForm {
    fn default() -> Self {
        AddFriendForm {
            name: String::new(),
            image_url: DEFAULT_IMAGE_URL.to_string(),
        }
    }
}

impl AddFriendForm {
    /// Name and image of the friend to create, or `None` when both fields
    /// are empty. A single filled-in field is enough to go through.
    pub fn submission(&self) -> Option<(String, String)> {
        if self.name.is_empty() && self.image_url.is_empty() {
            return None;
        }
        Some((self.name.clone(), self.image_url.clone()))
    }
}

/// Raw text of a posted split-bill form.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct SplitBillFields {
    pub bill: String,
    pub user_expense: String,
    pub paid_by: String,
}

/// Split-bill inputs for one selected friend. A different selection gets a
/// fresh form.
#[derive(Clone, Debug, PartialEq)]
pub struct SplitBillForm {
    friend: FriendId,
    pub bill: Option<f64>,
    pub user_expense: Option<f64>,
    pub paid_by: Option<PaidBy>,
}

impl SplitBillForm {
    pub fn for_friend(friend: FriendId) -> Self {
        SplitBillForm {
            friend,
            bill: None,
            user_expense: None,
            paid_by: Some(PaidBy::User),
        }
    }

    pub fn friend(&self) -> &FriendId {
        &self.friend
    }

    pub fn update(&mut self, fields: &SplitBillFields) {
        self.bill = parse_amount(&fields.bill);
        self.user_expense = parse_amount(&fields.user_expense);
        self.paid_by = PaidBy::parse(&fields.paid_by);
    }

    pub fn friend_expense(&self) -> f64 {
        self.bill.unwrap_or(0.0) - self.user_expense.unwrap_or(0.0)
    }

    /// Balance change for the friend, or `None` when the form can't be
    /// submitted: no bill (empty, zero or not a number), no payer, or an
    /// expense that doesn't produce a finite amount.
    pub fn delta(&self) -> Option<f64> {
        let bill = self.bill.filter(|bill| *bill != 0.0 && !bill.is_nan())?;
        let user_expense = self.user_expense.unwrap_or(0.0);
        let delta = match self.paid_by? {
            PaidBy::User => bill - user_expense,
            PaidBy::Friend => -user_expense,
        };
        // A NaN balance would render as neither owed nor even; keep balances finite.
        delta.is_finite().then_some(delta)
    }
}

/// Reads a numeric input. Empty stays empty; anything unparseable becomes NaN.
pub fn parse_amount(input: &str) -> Option<f64> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    Some(input.parse().unwrap_or(f64::NAN))
}
