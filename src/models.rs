use chrono::NaiveDateTime;
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct Restaurant {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, FromRow)]
pub struct Pizza {
    pub id: i64,
    pub name: String,
    pub ingredients: String,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, FromRow)]
pub struct RestaurantPizza {
    pub id: i64,
    pub price: i64,
    pub pizza_id: i64,
    pub restaurant_id: i64,
    pub created_at: NaiveDateTime,
}
