use axum::routing::{delete, get, patch, post, put};
use axum::Router;

use crate::backend::{handlers, AppState};

pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/user", user_routes())
        .nest("/income", income_routes())
        .nest("/outcome", outcome_routes())
        .nest("/outcome_plan", outcome_plan_routes())
        .nest("/budget", budget_routes())
        .nest("/saving", saving_routes())
        .nest("/general", general_routes())
}

fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(handlers::user::login))
        .route("/id/:id", get(handlers::user::get_by_id))
        .route("/all", get(handlers::user::get_all))
        .route("/add", post(handlers::user::add))
        .route("/update/id/:id", put(handlers::user::update_by_id))
        .route(
            "/update/discord_username/:discord_username",
            patch(handlers::user::update_by_username),
        )
        .route("/delete/id/:id", delete(handlers::user::delete_by_id))
        .route(
            "/delete/discord_username/:discord_username",
            delete(handlers::user::delete_by_username),
        )
}

fn income_routes() -> Router<AppState> {
    Router::new()
        .route("/id/:id", get(handlers::income::get_by_id))
        .route("/all", get(handlers::income::get_all))
        .route("/user_id/:user_id/all", get(handlers::income::get_all_by_user_id))
        .route("/add", post(handlers::income::add))
        .route("/update/id/:id", put(handlers::income::update_by_id))
        .route("/delete/id/:id", delete(handlers::income::delete_by_id))
}

fn outcome_routes() -> Router<AppState> {
    Router::new()
        .route("/id/:id", get(handlers::outcome::get_by_id))
        .route("/all", get(handlers::outcome::get_all))
        .route("/user_id/:user_id/all", get(handlers::outcome::get_all_by_user_id))
        .route("/add", post(handlers::outcome::add))
        .route("/update/id/:id", put(handlers::outcome::update_by_id))
        .route("/delete/id/:id", delete(handlers::outcome::delete_by_id))
}

fn outcome_plan_routes() -> Router<AppState> {
    Router::new()
        .route("/id/:id", get(handlers::outcome_plan::get_by_id))
        .route("/all", get(handlers::outcome_plan::get_all))
        .route(
            "/user_id/:user_id/all",
            get(handlers::outcome_plan::get_all_by_user_id),
        )
        .route("/add", post(handlers::outcome_plan::add))
        .route("/update/id/:id", put(handlers::outcome_plan::update_by_id))
        .route("/delete/id/:id", delete(handlers::outcome_plan::delete_by_id))
}

fn budget_routes() -> Router<AppState> {
    Router::new()
        .route("/id/:id", get(handlers::budget::get_by_id))
        .route("/all", get(handlers::budget::get_all))
        .route("/user_id/:user_id/all", get(handlers::budget::get_all_by_user_id))
        .route("/add", post(handlers::budget::add))
        .route("/update/id/:id", put(handlers::budget::update_by_id))
        .route("/delete/id/:id", delete(handlers::budget::delete_by_id))
}

fn saving_routes() -> Router<AppState> {
    Router::new()
        .route("/id/:id", get(handlers::saving::get_by_id))
        .route("/all", get(handlers::saving::get_all))
        .route("/user_id/:user_id/all", get(handlers::saving::get_all_by_user_id))
        .route("/add", post(handlers::saving::add))
        .route("/update/id/:id", put(handlers::saving::update_by_id))
        .route("/delete/id/:id", delete(handlers::saving::delete_by_id))
}

fn general_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/monthly_summary/:user_id",
            get(handlers::general::monthly_summary),
        )
        .route("/income_categories", get(handlers::general::income_categories))
        .route("/outcome_categories", get(handlers::general::outcome_categories))
}
