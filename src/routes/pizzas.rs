use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};

use crate::{db::DbPool, dto::pizzas::PizzaDto, error::AppResult, services::pizza_service};

pub fn router() -> Router<DbPool> {
    Router::new()
        .route("/", get(list_pizzas))
        .route("/{id}", get(get_pizza))
}

#[utoipa::path(
    get,
    path = "/pizzas",
    responses(
        (status = 200, description = "List pizzas", body = Vec<PizzaDto>)
    ),
    tag = "Pizzas"
)]
pub async fn list_pizzas(State(pool): State<DbPool>) -> AppResult<Json<Vec<PizzaDto>>> {
    let pizzas = pizza_service::list_pizzas(&pool).await?;
    Ok(Json(pizzas))
}

#[utoipa::path(
    get,
    path = "/pizzas/{id}",
    params(
        ("id" = i64, Path, description = "Pizza ID")
    ),
    responses(
        (status = 200, description = "Get pizza", body = PizzaDto),
        (status = 404, description = "Pizza not found"),
    ),
    tag = "Pizzas"
)]
pub async fn get_pizza(
    Path(id): Path<i64>,
    State(pool): State<DbPool>,
) -> AppResult<Json<PizzaDto>> {
    let pizza = pizza_service::get_pizza(&pool, id).await?;
    Ok(Json(pizza))
}
