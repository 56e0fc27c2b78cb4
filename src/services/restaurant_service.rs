use sqlx::FromRow;

use crate::{
    audit::log_audit,
    db::DbPool,
    dto::{pizzas::PizzaDto, restaurant_pizzas::RestaurantPizzaDto, restaurants::RestaurantDto},
    error::{AppError, AppResult},
    models::Restaurant,
};

#[derive(FromRow)]
struct RestaurantPizzaWithPizzaRow {
    rp_id: i64,
    price: i64,
    pizza_id: i64,
    restaurant_id: i64,
    pizza_name: String,
    pizza_ingredients: String,
}

pub async fn list_restaurants(pool: &DbPool) -> AppResult<Vec<RestaurantDto>> {
    let restaurants = sqlx::query_as::<_, Restaurant>("SELECT * FROM restaurants ORDER BY id")
        .fetch_all(pool)
        .await?;

    Ok(restaurants.into_iter().map(RestaurantDto::from).collect())
}

pub async fn get_restaurant(pool: &DbPool, id: i64) -> AppResult<RestaurantDto> {
    let restaurant = sqlx::query_as::<_, Restaurant>("SELECT * FROM restaurants WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or(AppError::NotFound("Restaurant"))?;

    let rows = sqlx::query_as::<_, RestaurantPizzaWithPizzaRow>(
        r#"
        SELECT rp.id AS rp_id, rp.price, rp.pizza_id, rp.restaurant_id,
               p.name AS pizza_name, p.ingredients AS pizza_ingredients
        FROM restaurant_pizzas rp
        JOIN pizzas p ON p.id = rp.pizza_id
        WHERE rp.restaurant_id = ?
        ORDER BY rp.id
        "#,
    )
    .bind(id)
    .fetch_all(pool)
    .await?;

    let restaurant_pizzas = rows
        .into_iter()
        .map(|row| RestaurantPizzaDto {
            id: row.rp_id,
            price: row.price,
            pizza_id: row.pizza_id,
            restaurant_id: row.restaurant_id,
            pizza: Some(PizzaDto {
                id: row.pizza_id,
                name: row.pizza_name,
                ingredients: row.pizza_ingredients,
            }),
            restaurant: None,
        })
        .collect();

    Ok(RestaurantDto::from(restaurant).with_restaurant_pizzas(restaurant_pizzas))
}

/// Deletes the restaurant together with its join rows in one transaction.
pub async fn delete_restaurant(pool: &DbPool, id: i64) -> AppResult<()> {
    let mut txn = pool.begin().await?;

    sqlx::query("DELETE FROM restaurant_pizzas WHERE restaurant_id = ?")
        .bind(id)
        .execute(&mut *txn)
        .await?;

    let result = sqlx::query("DELETE FROM restaurants WHERE id = ?")
        .bind(id)
        .execute(&mut *txn)
        .await?;

    if result.rows_affected() == 0 {
        txn.rollback().await?;
        return Err(AppError::NotFound("Restaurant"));
    }

    txn.commit().await?;

    if let Err(err) = log_audit(
        pool,
        "restaurant_delete",
        Some("restaurants"),
        Some(serde_json::json!({ "restaurant_id": id })),
    )
    .await
    {
        tracing::warn!(error = %err, "audit log failed");
    }

    Ok(())
}
