use crate::{
    db::DbPool,
    dto::pizzas::PizzaDto,
    error::{AppError, AppResult},
    models::Pizza,
};

pub async fn list_pizzas(pool: &DbPool) -> AppResult<Vec<PizzaDto>> {
    let pizzas = sqlx::query_as::<_, Pizza>("SELECT * FROM pizzas ORDER BY id")
        .fetch_all(pool)
        .await?;

    Ok(pizzas.into_iter().map(PizzaDto::from).collect())
}

pub async fn get_pizza(pool: &DbPool, id: i64) -> AppResult<PizzaDto> {
    let pizza = sqlx::query_as::<_, Pizza>("SELECT * FROM pizzas WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or(AppError::NotFound("Pizza"))?;

    Ok(PizzaDto::from(pizza))
}
