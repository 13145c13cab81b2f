//! # Seed Data Generator
//!
//! Populates the database with a development catalog of restaurants and
//! dishes.
//!
//! ## Usage
//! ```bash
//! # Seed the default database file
//! cargo run -p sabor-db --bin seed
//!
//! # Specify database path
//! cargo run -p sabor-db --bin seed -- --db ./data/sabor.db
//! ```
//!
//! ## Generated Catalog
//! One restaurant per entry in RESTAURANTS, each with its dish list. Prices,
//! discounts and delivery fees are deterministic pseudo-random so repeated
//! seeds of a fresh database produce the same catalog.

use chrono::Utc;
use std::env;

use sabor_core::{Product, Restaurant};
use sabor_db::{Database, DbConfig};
use uuid::Uuid;

/// Restaurants with (name, dish list) for realistic test data.
const RESTAURANTS: &[(&str, &[&str])] = &[
    (
        "Burguer Mania",
        &[
            "X-Salada",
            "X-Bacon",
            "X-Tudo",
            "Cheeseburguer Duplo",
            "Batata Frita Grande",
            "Onion Rings",
            "Milkshake de Chocolate",
            "Suco de Laranja",
        ],
    ),
    (
        "Pizza da Vila",
        &[
            "Pizza Margherita",
            "Pizza Calabresa",
            "Pizza Quatro Queijos",
            "Pizza Portuguesa",
            "Pizza de Frango com Catupiry",
            "Esfiha de Carne",
            "Refrigerante 2L",
        ],
    ),
    (
        "Cantina da Nona",
        &[
            "Lasanha à Bolonhesa",
            "Nhoque ao Sugo",
            "Fettuccine Alfredo",
            "Risoto de Funghi",
            "Polenta Frita",
            "Tiramisù",
        ],
    ),
    (
        "Sushi do Bairro",
        &[
            "Combo 20 Peças",
            "Hot Roll de Salmão",
            "Temaki de Atum",
            "Yakisoba de Frango",
            "Missoshiru",
            "Suco de Maracujá",
        ],
    ),
    (
        "Açaí do Ponto",
        &[
            "Açaí 300ml",
            "Açaí 500ml",
            "Açaí 700ml com Granola",
            "Vitamina de Banana",
            "Suco de Morango",
            "Salada de Frutas",
        ],
    ),
    (
        "Doceria Doce Lar",
        &[
            "Bolo de Cenoura",
            "Brigadeiro Gourmet",
            "Pudim de Leite",
            "Torta de Limão",
            "Brownie com Sorvete",
            "Café Coado",
        ],
    ),
];

/// Discount percentages sampled per dish (mostly no discount).
const DISCOUNTS: &[u32] = &[0, 0, 0, 5, 10, 15, 20, 30];

/// Delivery fees in centavos (0 = "Entrega grátis").
const DELIVERY_FEES: &[i64] = &[0, 0, 399, 499, 599, 799];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut db_path = String::from("./sabor_dev.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Sabor Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>    Database file path (default: ./sabor_dev.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("🌱 Sabor Seed Data Generator");
    println!("============================");
    println!("Database: {}", db_path);
    println!();

    // Connect to database
    let config = DbConfig::new(&db_path);
    let db = Database::new(config).await?;

    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    // Check existing catalog
    let existing = db.restaurants().count().await?;
    if existing > 0 {
        println!("⚠ Database already has {} restaurants", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    println!();
    println!("Generating catalog...");

    let start = std::time::Instant::now();
    let mut product_count = 0usize;

    for (restaurant_idx, (restaurant_name, dishes)) in RESTAURANTS.iter().enumerate() {
        let restaurant = generate_restaurant(restaurant_name, restaurant_idx);
        db.restaurants().insert(&restaurant).await?;

        for (dish_idx, dish_name) in dishes.iter().enumerate() {
            let product =
                generate_product(&restaurant.id, dish_name, restaurant_idx * 100 + dish_idx);

            if let Err(e) = db.products().insert(&product).await {
                eprintln!("Failed to insert {}: {}", product.name, e);
                continue;
            }

            product_count += 1;
        }

        println!("  {} ({} dishes)", restaurant_name, dishes.len());
    }

    let elapsed = start.elapsed();
    println!();
    println!(
        "✓ Generated {} restaurants and {} products in {:?}",
        RESTAURANTS.len(),
        product_count,
        elapsed
    );

    // Spot-check the listings the storefront uses
    println!();
    println!("Verifying listings...");
    let listed = db.products().list(10).await?;
    println!("  list(10): {} products", listed.len());
    let discounted = db.products().list_discounted(10).await?;
    println!("  list_discounted(10): {} products", discounted.len());

    println!();
    println!("✓ Seed complete!");

    Ok(())
}

/// Generates a restaurant with a deterministic fee and time estimate.
fn generate_restaurant(name: &str, seed: usize) -> Restaurant {
    let now = Utc::now();
    let slug = name.to_lowercase().replace(' ', "-");

    Restaurant {
        id: Uuid::new_v4().to_string(),
        name: name.to_string(),
        image_url: format!("https://images.sabor.app/restaurants/{slug}.png"),
        delivery_fee_cents: DELIVERY_FEES[seed % DELIVERY_FEES.len()],
        delivery_time_minutes: 20 + ((seed * 7) % 5) as i64 * 10, // 20-60 min
        created_at: now,
        updated_at: now,
    }
}

/// Generates a single dish with a deterministic price and discount.
fn generate_product(restaurant_id: &str, name: &str, seed: usize) -> Product {
    let now = Utc::now();
    let slug = name.to_lowercase().replace(' ', "-");

    // Base price R$ 7,90 - R$ 54,90
    let price_cents = 790 + ((seed * 17) % 4700) as i64;
    let discount_percentage = DISCOUNTS[seed % DISCOUNTS.len()];

    Product {
        id: Uuid::new_v4().to_string(),
        restaurant_id: restaurant_id.to_string(),
        name: name.to_string(),
        description: Some(format!(
            "{} preparado na hora, do jeito que você gosta.",
            name
        )),
        image_url: format!("https://images.sabor.app/products/{slug}.png"),
        price_cents,
        discount_percentage,
        is_active: true,
        created_at: now,
        updated_at: now,
    }
}
