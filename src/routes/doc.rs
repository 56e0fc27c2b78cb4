use utoipa::OpenApi;
use utoipa::openapi::OpenApi as OpenApiSpec;
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        pizzas::PizzaDto,
        restaurant_pizzas::{CreateRestaurantPizzaRequest, RestaurantPizzaDto},
        restaurants::RestaurantDto,
    },
    routes::{health, pizzas, restaurant_pizzas, restaurants},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        restaurants::list_restaurants,
        restaurants::get_restaurant,
        restaurants::delete_restaurant,
        pizzas::list_pizzas,
        pizzas::get_pizza,
        restaurant_pizzas::create_restaurant_pizza,
    ),
    components(
        schemas(
            RestaurantDto,
            PizzaDto,
            RestaurantPizzaDto,
            CreateRestaurantPizzaRequest,
            health::HealthData,
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Restaurants", description = "Restaurant endpoints"),
        (name = "Pizzas", description = "Pizza endpoints"),
        (name = "RestaurantPizzas", description = "Restaurant pizza endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
