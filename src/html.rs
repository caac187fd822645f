use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::schemas::PaidBy;
use crate::view::{AddFriendView, FriendRow, PageView, SplitBillView};

const STYLE: &str = "\
body{font-family:sans-serif;color:#495057;margin:0}\
.app{display:grid;grid-template-columns:34rem 44rem;column-gap:4rem;align-items:start;justify-content:center;padding:4rem}\
.sidebar ul{list-style:none;padding:0;display:flex;flex-direction:column;gap:0.4rem}\
li{display:grid;grid-template-columns:48px 1fr auto;column-gap:1.6rem;align-items:center;padding:1.2rem;border-radius:7px}\
li.selected,li:hover{background-color:#fff4e6}\
li img{border-radius:50%;grid-row:span 2}\
li h3,li p{margin:0}\
li form{grid-row:span 2}\
.red{color:#e03131}\
.green{color:#66a80f}\
.button{background-color:#ffa94d;color:#343a40;padding:0.8rem 1.2rem;border:none;border-radius:7px;font-weight:bold;cursor:pointer}\
form.form-add-friend,form.form-split-bill{display:grid;grid-template-columns:1fr 1.5fr;align-items:center;gap:1.2rem;background-color:#fff4e6;border-radius:7px;padding:3.2rem 4rem}\
form h2{grid-column:1/-1}\
form button{grid-column:2/-1}";

pub fn render_page(page: &PageView) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html><html><head><meta charset=\"utf-8\"><title>Eat-'n-Split</title><style>");
    html.push_str(STYLE);
    html.push_str("</style></head><body><div class=\"app\"><div class=\"sidebar\"><ul>");
    for row in &page.friends {
        html.push_str(&render_row(row));
    }
    html.push_str("</ul>");
    if let Some(add_friend) = &page.add_friend {
        html.push_str(&render_add_friend(add_friend));
    }
    html.push_str(&format!(
        "<form method=\"post\" action=\"/add-friend/toggle\"><button class=\"button\">{}</button></form>",
        encode_text(page.add_friend_toggle_label)
    ));
    html.push_str("</div>");
    if let Some(split_bill) = &page.split_bill {
        html.push_str(&render_split_bill(split_bill));
    }
    html.push_str("</div></body></html>");
    html
}

fn render_row(row: &FriendRow) -> String {
    let class = if row.selected { " class=\"selected\"" } else { "" };
    let balance = match row.balance.tone.css_class() {
        Some(tone) => format!("<p class=\"{}\">{}</p>", tone, encode_text(&row.balance.text)),
        None => format!("<p>{}</p>", encode_text(&row.balance.text)),
    };
    format!(
        "<li{}><img src=\"{}\" alt=\"{}\"><h3>{}</h3>{}\
         <form method=\"post\" action=\"/friends/{}/toggle\"><button class=\"button\">{}</button></form></li>",
        class,
        encode_double_quoted_attribute(&row.image),
        encode_double_quoted_attribute(&row.name),
        encode_text(&row.name),
        balance,
        encode_double_quoted_attribute(&urlencoding::encode(row.id.as_str())),
        row.toggle_label
    )
}

fn render_add_friend(form: &AddFriendView) -> String {
    format!(
        "<form class=\"form-add-friend\" method=\"post\" action=\"/add-friend\">\
         <label for=\"fname\">👫 Friend name</label><input id=\"fname\" name=\"name\" value=\"{}\">\
         <label for=\"imageurl\">🌄 Image URL</label><input id=\"imageurl\" name=\"image\" value=\"{}\">\
         <button class=\"button\">Add</button></form>",
        encode_double_quoted_attribute(&form.name),
        encode_double_quoted_attribute(&form.image_url)
    )
}

fn render_split_bill(form: &SplitBillView) -> String {
    format!(
        "<form class=\"form-split-bill\" method=\"post\" action=\"/split-bill\"><h2>{}</h2>\
         <label for=\"bill\">💰 Bill value</label><input id=\"bill\" name=\"bill\" value=\"{}\">\
         <label for=\"userexpense\">🧍‍♀️ Your expense</label><input id=\"userexpense\" name=\"user_expense\" value=\"{}\">\
         <label for=\"friendexpense\">👫 {}</label><input id=\"friendexpense\" value=\"{}\" disabled>\
         <label for=\"payer\">🤑 Who is paying the bill</label><select id=\"payer\" name=\"paid_by\">{}{}</select>\
         <button class=\"button\">Split bill</button></form>",
        encode_text(&form.title),
        amount_value(form.bill),
        amount_value(form.user_expense),
        encode_text(&form.friend_expense_label),
        form.friend_expense,
        option(PaidBy::User, "You", form.paid_by),
        option(PaidBy::Friend, &form.friend_name, form.paid_by)
    )
}

fn option(value: PaidBy, label: &str, current: Option<PaidBy>) -> String {
    let selected = if current == Some(value) { " selected" } else { "" };
    format!(
        "<option value=\"{}\"{}>{}</option>",
        value.as_str(),
        selected,
        encode_text(label)
    )
}

fn amount_value(amount: Option<f64>) -> String {
    amount.map(|amount| amount.to_string()).unwrap_or_default()
}
