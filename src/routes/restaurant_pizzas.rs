use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::post,
};

use crate::{
    db::DbPool,
    dto::restaurant_pizzas::{CreateRestaurantPizzaRequest, RestaurantPizzaDto},
    error::AppResult,
    services::restaurant_pizza_service,
};

pub fn router() -> Router<DbPool> {
    Router::new().route("/", post(create_restaurant_pizza))
}

#[utoipa::path(
    post,
    path = "/restaurant_pizzas",
    request_body = CreateRestaurantPizzaRequest,
    responses(
        (status = 201, description = "Created join row with nested pizza and restaurant", body = RestaurantPizzaDto),
        (status = 400, description = "Validation errors"),
    ),
    tag = "RestaurantPizzas"
)]
pub async fn create_restaurant_pizza(
    State(pool): State<DbPool>,
    Json(payload): Json<CreateRestaurantPizzaRequest>,
) -> AppResult<(StatusCode, Json<RestaurantPizzaDto>)> {
    let restaurant_pizza =
        restaurant_pizza_service::create_restaurant_pizza(&pool, payload).await?;
    Ok((StatusCode::CREATED, Json(restaurant_pizza)))
}
