use axum::{Router, response::Html};

use crate::db::DbPool;

pub mod doc;
pub mod health;
pub mod pizzas;
pub mod restaurant_pizzas;
pub mod restaurants;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<DbPool> {
    Router::new()
        .nest("/restaurants", restaurants::router())
        .nest("/pizzas", pizzas::router())
        .nest("/restaurant_pizzas", restaurant_pizzas::router())
}

pub async fn index() -> Html<&'static str> {
    Html("<h1>Pizzeria API</h1>")
}
