use axum_pizzeria_api::{config::AppConfig, db::create_pool};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let pool = create_pool(&config.database_url).await?;
    // Ensure migrations are applied.
    sqlx::migrate!("./migrations").run(&pool).await?;

    seed_pizzas(&pool).await?;
    seed_restaurants(&pool).await?;
    seed_menu(&pool).await?;

    println!("Seed completed.");
    Ok(())
}

async fn seed_pizzas(pool: &sqlx::SqlitePool) -> anyhow::Result<()> {
    let pizzas = vec![
        ("Margherita", "Dough, Tomato Sauce, Mozzarella, Basil"),
        ("Quattro Formaggi", "Dough, Mozzarella, Gorgonzola, Parmesan, Fontina"),
        ("Diavola", "Dough, Tomato Sauce, Mozzarella, Spicy Salami"),
        ("Capricciosa", "Dough, Tomato Sauce, Mozzarella, Ham, Mushrooms, Artichokes"),
    ];

    for (name, ingredients) in pizzas {
        sqlx::query(
            r#"
            INSERT INTO pizzas (name, ingredients)
            VALUES (?, ?)
            ON CONFLICT (name) DO NOTHING
            "#,
        )
        .bind(name)
        .bind(ingredients)
        .execute(pool)
        .await?;
    }

    println!("Seeded pizzas");
    Ok(())
}

async fn seed_restaurants(pool: &sqlx::SqlitePool) -> anyhow::Result<()> {
    let restaurants = vec![
        ("Karen's Pizza Shack", "address1"),
        ("Sanjay's Pizza", "address2"),
        ("Kiki's Pizza", "address3"),
    ];

    for (name, address) in restaurants {
        sqlx::query(
            r#"
            INSERT INTO restaurants (name, address)
            VALUES (?, ?)
            ON CONFLICT (name) DO NOTHING
            "#,
        )
        .bind(name)
        .bind(address)
        .execute(pool)
        .await?;
    }

    println!("Seeded restaurants");
    Ok(())
}

// Price one pizza per restaurant; skipped when the pairing already exists so
// the seed stays idempotent.
async fn seed_menu(pool: &sqlx::SqlitePool) -> anyhow::Result<()> {
    let menu = vec![
        ("Karen's Pizza Shack", "Margherita", 10_i64),
        ("Sanjay's Pizza", "Diavola", 12_i64),
        ("Kiki's Pizza", "Quattro Formaggi", 15_i64),
    ];

    for (restaurant, pizza, price) in menu {
        sqlx::query(
            r#"
            INSERT INTO restaurant_pizzas (price, pizza_id, restaurant_id)
            SELECT ?, p.id, r.id
            FROM pizzas p, restaurants r
            WHERE p.name = ? AND r.name = ?
              AND NOT EXISTS (
                  SELECT 1 FROM restaurant_pizzas rp
                  WHERE rp.pizza_id = p.id AND rp.restaurant_id = r.id
              )
            "#,
        )
        .bind(price)
        .bind(pizza)
        .bind(restaurant)
        .execute(pool)
        .await?;
    }

    println!("Seeded restaurant pizzas");
    Ok(())
}
