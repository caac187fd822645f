use std::sync::{Mutex, MutexGuard};

use actix_web::{get, http::header, post, web, HttpResponse};
use log::info;

use crate::app::SplitApp;
use crate::config::Config;
use crate::error::AppError;
use crate::forms::{AddFriendForm, SplitBillFields};
use crate::html::render_page;
use crate::schemas::FriendId;

pub type State = web::Data<Mutex<SplitApp>>;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(index)
        .service(toggle_friend)
        .service(toggle_add_friend)
        .service(add_friend)
        .service(split_bill);
}

/// Read-only JSON endpoints, mounted under `/api`.
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.service(get_view).service(get_friends);
}

fn lock(state: &State) -> Result<MutexGuard<'_, SplitApp>, AppError> {
    state.lock().map_err(|_| AppError::StatePoisoned)
}

fn back_to_page() -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, "/"))
        .finish()
}

#[get("/")]
async fn index(state: State, config: web::Data<Config>) -> Result<HttpResponse, AppError> {
    let page = lock(&state)?.view(&config.currency);
    Ok(HttpResponse::Ok()
        .content_type(header::ContentType::html())
        .body(render_page(&page)))
}

#[get("/view")]
async fn get_view(state: State, config: web::Data<Config>) -> Result<HttpResponse, AppError> {
    let page = lock(&state)?.view(&config.currency);
    Ok(HttpResponse::Ok().json(page))
}

#[get("/friends")]
async fn get_friends(state: State) -> Result<HttpResponse, AppError> {
    let friends = lock(&state)?.friends().clone();
    Ok(HttpResponse::Ok().json(friends))
}

#[post("/friends/{id}/toggle")]
async fn toggle_friend(state: State, id: web::Path<String>) -> Result<HttpResponse, AppError> {
    let id = FriendId::new(id.into_inner());
    lock(&state)?.select_friend(&id)?;
    Ok(back_to_page())
}

#[post("/add-friend/toggle")]
async fn toggle_add_friend(state: State) -> Result<HttpResponse, AppError> {
    lock(&state)?.toggle_add_form();
    Ok(back_to_page())
}

#[post("/add-friend")]
async fn add_friend(
    state: State,
    form: web::Form<AddFriendForm>,
) -> Result<HttpResponse, AppError> {
    if let Some(id) = lock(&state)?.submit_add_friend(form.into_inner()) {
        info!("Friend {} added", id);
    }
    Ok(back_to_page())
}

#[post("/split-bill")]
async fn split_bill(
    state: State,
    form: web::Form<SplitBillFields>,
) -> Result<HttpResponse, AppError> {
    if let Some(delta) = lock(&state)?.submit_split_bill(&form) {
        info!("Bill split, balance changed by {}", delta);
    }
    Ok(back_to_page())
}
