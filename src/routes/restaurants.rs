use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get},
};

use crate::{
    db::DbPool, dto::restaurants::RestaurantDto, error::AppResult,
    services::restaurant_service,
};

pub fn router() -> Router<DbPool> {
    Router::new()
        .route("/", get(list_restaurants))
        .route("/{id}", get(get_restaurant))
        .route("/{id}", delete(delete_restaurant))
}

#[utoipa::path(
    get,
    path = "/restaurants",
    responses(
        (status = 200, description = "List restaurants", body = Vec<RestaurantDto>)
    ),
    tag = "Restaurants"
)]
pub async fn list_restaurants(
    State(pool): State<DbPool>,
) -> AppResult<Json<Vec<RestaurantDto>>> {
    let restaurants = restaurant_service::list_restaurants(&pool).await?;
    Ok(Json(restaurants))
}

#[utoipa::path(
    get,
    path = "/restaurants/{id}",
    params(
        ("id" = i64, Path, description = "Restaurant ID")
    ),
    responses(
        (status = 200, description = "Restaurant with its priced pizzas", body = RestaurantDto),
        (status = 404, description = "Restaurant not found"),
    ),
    tag = "Restaurants"
)]
pub async fn get_restaurant(
    Path(id): Path<i64>,
    State(pool): State<DbPool>,
) -> AppResult<Json<RestaurantDto>> {
    let restaurant = restaurant_service::get_restaurant(&pool, id).await?;
    Ok(Json(restaurant))
}

#[utoipa::path(
    delete,
    path = "/restaurants/{id}",
    params(
        ("id" = i64, Path, description = "Restaurant ID")
    ),
    responses(
        (status = 204, description = "Restaurant and its pizzas deleted"),
        (status = 404, description = "Restaurant not found"),
    ),
    tag = "Restaurants"
)]
pub async fn delete_restaurant(
    Path(id): Path<i64>,
    State(pool): State<DbPool>,
) -> AppResult<StatusCode> {
    restaurant_service::delete_restaurant(&pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
