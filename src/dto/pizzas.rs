use serde::Serialize;
use utoipa::ToSchema;

use crate::models::Pizza;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PizzaDto {
    pub id: i64,
    pub name: String,
    pub ingredients: String,
}

impl From<Pizza> for PizzaDto {
    fn from(pizza: Pizza) -> Self {
        Self {
            id: pizza.id,
            name: pizza.name,
            ingredients: pizza.ingredients,
        }
    }
}
