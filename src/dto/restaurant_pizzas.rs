use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    dto::{pizzas::PizzaDto, restaurants::RestaurantDto},
    models::RestaurantPizza,
};

/// All fields optional so a missing field reaches the validation path instead
/// of being rejected by the JSON extractor.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateRestaurantPizzaRequest {
    pub price: Option<i64>,
    pub pizza_id: Option<i64>,
    pub restaurant_id: Option<i64>,
}

/// Join row with optional expansions. The nested restaurant is only present
/// on creation responses; embedding it under a restaurant's own
/// `restaurant_pizzas` would recurse.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RestaurantPizzaDto {
    pub id: i64,
    pub price: i64,
    pub pizza_id: i64,
    pub restaurant_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pizza: Option<PizzaDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restaurant: Option<RestaurantDto>,
}

impl From<RestaurantPizza> for RestaurantPizzaDto {
    fn from(rp: RestaurantPizza) -> Self {
        Self {
            id: rp.id,
            price: rp.price,
            pizza_id: rp.pizza_id,
            restaurant_id: rp.restaurant_id,
            pizza: None,
            restaurant: None,
        }
    }
}

impl RestaurantPizzaDto {
    pub fn with_pizza(mut self, pizza: PizzaDto) -> Self {
        self.pizza = Some(pizza);
        self
    }

    pub fn with_restaurant(mut self, restaurant: RestaurantDto) -> Self {
        self.restaurant = Some(restaurant);
        self
    }
}
