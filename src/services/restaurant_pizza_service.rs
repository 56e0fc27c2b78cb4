use crate::{
    audit::log_audit,
    db::DbPool,
    dto::{
        pizzas::PizzaDto,
        restaurant_pizzas::{CreateRestaurantPizzaRequest, RestaurantPizzaDto},
        restaurants::RestaurantDto,
    },
    error::{AppError, AppResult},
    models::{Pizza, Restaurant, RestaurantPizza},
};

const MIN_PRICE: i64 = 1;
const MAX_PRICE: i64 = 30;

pub async fn create_restaurant_pizza(
    pool: &DbPool,
    payload: CreateRestaurantPizzaRequest,
) -> AppResult<RestaurantPizzaDto> {
    let (Some(price), Some(pizza_id), Some(restaurant_id)) =
        (payload.price, payload.pizza_id, payload.restaurant_id)
    else {
        return Err(AppError::Validation);
    };

    if !(MIN_PRICE..=MAX_PRICE).contains(&price) {
        return Err(AppError::Validation);
    }

    // Referenced rows are re-read inside the insert transaction so the
    // nested objects in the response match what the row was created against.
    let mut txn = pool.begin().await?;

    let pizza = sqlx::query_as::<_, Pizza>("SELECT * FROM pizzas WHERE id = ?")
        .bind(pizza_id)
        .fetch_optional(&mut *txn)
        .await?
        .ok_or(AppError::Validation)?;

    let restaurant = sqlx::query_as::<_, Restaurant>("SELECT * FROM restaurants WHERE id = ?")
        .bind(restaurant_id)
        .fetch_optional(&mut *txn)
        .await?
        .ok_or(AppError::Validation)?;

    let restaurant_pizza = sqlx::query_as::<_, RestaurantPizza>(
        r#"
        INSERT INTO restaurant_pizzas (price, pizza_id, restaurant_id)
        VALUES (?, ?, ?)
        RETURNING *
        "#,
    )
    .bind(price)
    .bind(pizza_id)
    .bind(restaurant_id)
    .fetch_one(&mut *txn)
    .await?;

    txn.commit().await?;

    if let Err(err) = log_audit(
        pool,
        "restaurant_pizza_create",
        Some("restaurant_pizzas"),
        Some(serde_json::json!({
            "restaurant_id": restaurant_id,
            "pizza_id": pizza_id,
            "price": price,
        })),
    )
    .await
    {
        tracing::warn!(error = %err, "audit log failed");
    }

    Ok(RestaurantPizzaDto::from(restaurant_pizza)
        .with_pizza(PizzaDto::from(pizza))
        .with_restaurant(RestaurantDto::from(restaurant)))
}
