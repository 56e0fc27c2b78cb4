use serde::Serialize;
use utoipa::ToSchema;

use crate::{dto::restaurant_pizzas::RestaurantPizzaDto, models::Restaurant};

/// One serializer for both the list and detail shapes: the listing leaves
/// `restaurant_pizzas` unset and the key disappears from the JSON.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RestaurantDto {
    pub id: i64,
    pub name: String,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restaurant_pizzas: Option<Vec<RestaurantPizzaDto>>,
}

impl From<Restaurant> for RestaurantDto {
    fn from(restaurant: Restaurant) -> Self {
        Self {
            id: restaurant.id,
            name: restaurant.name,
            address: restaurant.address,
            restaurant_pizzas: None,
        }
    }
}

impl RestaurantDto {
    pub fn with_restaurant_pizzas(mut self, restaurant_pizzas: Vec<RestaurantPizzaDto>) -> Self {
        self.restaurant_pizzas = Some(restaurant_pizzas);
        self
    }
}
