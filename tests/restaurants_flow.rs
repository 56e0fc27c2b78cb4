use axum_pizzeria_api::{
    db::DbPool,
    dto::restaurant_pizzas::CreateRestaurantPizzaRequest,
    error::AppError,
    services::{pizza_service, restaurant_pizza_service, restaurant_service},
};
use sqlx::sqlite::SqlitePoolOptions;

// Integration flow against an in-memory database: seed rows, read them back
// through the services, delete a restaurant and check nothing is left behind.

async fn setup_pool() -> anyhow::Result<DbPool> {
    // A single connection keeps every query on the same in-memory database.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await?;
    sqlx::migrate!("./migrations").run(&pool).await?;
    Ok(pool)
}

async fn insert_restaurant(pool: &DbPool, name: &str, address: &str) -> anyhow::Result<i64> {
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO restaurants (name, address) VALUES (?, ?) RETURNING id",
    )
    .bind(name)
    .bind(address)
    .fetch_one(pool)
    .await?;
    Ok(id)
}

async fn insert_pizza(pool: &DbPool, name: &str, ingredients: &str) -> anyhow::Result<i64> {
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO pizzas (name, ingredients) VALUES (?, ?) RETURNING id",
    )
    .bind(name)
    .bind(ingredients)
    .fetch_one(pool)
    .await?;
    Ok(id)
}

fn create_request(price: i64, pizza_id: i64, restaurant_id: i64) -> CreateRestaurantPizzaRequest {
    CreateRestaurantPizzaRequest {
        price: Some(price),
        pizza_id: Some(pizza_id),
        restaurant_id: Some(restaurant_id),
    }
}

#[tokio::test]
async fn get_restaurant_expands_its_pizzas() -> anyhow::Result<()> {
    let pool = setup_pool().await?;

    let restaurant_id = insert_restaurant(&pool, "Kiki's Pizza", "address3").await?;
    let other_id = insert_restaurant(&pool, "Sanjay's Pizza", "address2").await?;
    let margherita = insert_pizza(&pool, "Margherita", "Dough, Tomato Sauce, Cheese").await?;
    let diavola = insert_pizza(&pool, "Diavola", "Dough, Tomato Sauce, Spicy Salami").await?;

    restaurant_pizza_service::create_restaurant_pizza(
        &pool,
        create_request(10, margherita, restaurant_id),
    )
    .await?;
    restaurant_pizza_service::create_restaurant_pizza(
        &pool,
        create_request(12, diavola, restaurant_id),
    )
    .await?;
    restaurant_pizza_service::create_restaurant_pizza(&pool, create_request(8, diavola, other_id))
        .await?;

    let restaurant = restaurant_service::get_restaurant(&pool, restaurant_id).await?;
    assert_eq!(restaurant.id, restaurant_id);
    assert_eq!(restaurant.name, "Kiki's Pizza");

    let restaurant_pizzas = restaurant.restaurant_pizzas.expect("detail view expands");
    assert_eq!(restaurant_pizzas.len(), 2);
    for rp in &restaurant_pizzas {
        assert_eq!(rp.restaurant_id, restaurant_id);
        let pizza = rp.pizza.as_ref().expect("nested pizza");
        assert_eq!(pizza.id, rp.pizza_id);
        assert!(rp.restaurant.is_none(), "no back-reference to the restaurant");
    }
    assert_eq!(restaurant_pizzas[0].pizza.as_ref().unwrap().name, "Margherita");
    assert_eq!(restaurant_pizzas[1].pizza.as_ref().unwrap().name, "Diavola");

    // The listing stays flat.
    let listed = restaurant_service::list_restaurants(&pool).await?;
    assert_eq!(listed.len(), 2);
    assert!(listed.iter().all(|r| r.restaurant_pizzas.is_none()));

    Ok(())
}

#[tokio::test]
async fn delete_restaurant_cascades_and_then_404s() -> anyhow::Result<()> {
    let pool = setup_pool().await?;

    let doomed = insert_restaurant(&pool, "Karen's Pizza Shack", "address1").await?;
    let survivor = insert_restaurant(&pool, "Kiki's Pizza", "address3").await?;
    let pizza = insert_pizza(&pool, "Margherita", "Dough, Tomato Sauce, Cheese").await?;

    restaurant_pizza_service::create_restaurant_pizza(&pool, create_request(10, pizza, doomed))
        .await?;
    restaurant_pizza_service::create_restaurant_pizza(&pool, create_request(15, pizza, survivor))
        .await?;

    restaurant_service::delete_restaurant(&pool, doomed).await?;

    let result = restaurant_service::get_restaurant(&pool, doomed).await;
    assert!(matches!(result, Err(AppError::NotFound("Restaurant"))));

    // No orphaned join rows for the deleted restaurant.
    let orphans: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM restaurant_pizzas WHERE restaurant_id = ?",
    )
    .bind(doomed)
    .fetch_one(&pool)
    .await?;
    assert_eq!(orphans, 0);

    // The other restaurant keeps its menu.
    let kept: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM restaurant_pizzas WHERE restaurant_id = ?",
    )
    .bind(survivor)
    .fetch_one(&pool)
    .await?;
    assert_eq!(kept, 1);

    // Deleting again reports NotFound.
    let again = restaurant_service::delete_restaurant(&pool, doomed).await;
    assert!(matches!(again, Err(AppError::NotFound("Restaurant"))));

    Ok(())
}

#[tokio::test]
async fn create_restaurant_pizza_validates_price_boundaries() -> anyhow::Result<()> {
    let pool = setup_pool().await?;

    let restaurant = insert_restaurant(&pool, "Sanjay's Pizza", "address2").await?;
    let pizza = insert_pizza(&pool, "Diavola", "Dough, Tomato Sauce, Spicy Salami").await?;

    for price in [0, 31, -5] {
        let result = restaurant_pizza_service::create_restaurant_pizza(
            &pool,
            create_request(price, pizza, restaurant),
        )
        .await;
        assert!(matches!(result, Err(AppError::Validation)), "price {price}");
    }

    // Boundaries are inclusive.
    let low = restaurant_pizza_service::create_restaurant_pizza(
        &pool,
        create_request(1, pizza, restaurant),
    )
    .await?;
    assert_eq!(low.price, 1);
    let high = restaurant_pizza_service::create_restaurant_pizza(
        &pool,
        create_request(30, pizza, restaurant),
    )
    .await?;
    assert_eq!(high.price, 30);

    Ok(())
}

#[tokio::test]
async fn create_restaurant_pizza_requires_existing_references() -> anyhow::Result<()> {
    let pool = setup_pool().await?;

    let restaurant = insert_restaurant(&pool, "Kiki's Pizza", "address3").await?;
    let pizza = insert_pizza(&pool, "Margherita", "Dough, Tomato Sauce, Cheese").await?;

    let missing_pizza = restaurant_pizza_service::create_restaurant_pizza(
        &pool,
        create_request(5, pizza + 999, restaurant),
    )
    .await;
    assert!(matches!(missing_pizza, Err(AppError::Validation)));

    let missing_restaurant = restaurant_pizza_service::create_restaurant_pizza(
        &pool,
        create_request(5, pizza, restaurant + 999),
    )
    .await;
    assert!(matches!(missing_restaurant, Err(AppError::Validation)));

    let missing_field = restaurant_pizza_service::create_restaurant_pizza(
        &pool,
        CreateRestaurantPizzaRequest {
            price: None,
            pizza_id: Some(pizza),
            restaurant_id: Some(restaurant),
        },
    )
    .await;
    assert!(matches!(missing_field, Err(AppError::Validation)));

    // None of the failed attempts left a row behind.
    let rows: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM restaurant_pizzas")
        .fetch_one(&pool)
        .await?;
    assert_eq!(rows, 0);

    Ok(())
}

#[tokio::test]
async fn create_restaurant_pizza_returns_nested_objects() -> anyhow::Result<()> {
    let pool = setup_pool().await?;

    let restaurant = insert_restaurant(&pool, "Karen's Pizza Shack", "address1").await?;
    let pizza = insert_pizza(&pool, "Margherita", "Dough, Tomato Sauce, Cheese").await?;

    let created = restaurant_pizza_service::create_restaurant_pizza(
        &pool,
        create_request(5, pizza, restaurant),
    )
    .await?;

    assert_eq!(created.price, 5);
    assert_eq!(created.pizza_id, pizza);
    assert_eq!(created.restaurant_id, restaurant);

    let nested_pizza = created.pizza.expect("nested pizza");
    assert_eq!(nested_pizza.id, pizza);
    assert_eq!(nested_pizza.name, "Margherita");

    let nested_restaurant = created.restaurant.expect("nested restaurant");
    assert_eq!(nested_restaurant.id, restaurant);
    assert_eq!(nested_restaurant.address, "address1");

    // Pizzas remain listable on their own.
    let pizzas = pizza_service::list_pizzas(&pool).await?;
    assert_eq!(pizzas.len(), 1);
    assert_eq!(pizzas[0].name, "Margherita");

    Ok(())
}
