use argon2::{
    Argon2, PasswordHasher,
    password_hash::{SaltString, rand_core::OsRng},
};
use serde_json::json;
use shoestore_api::{config::AppConfig, db::create_pool};
use uuid::Uuid;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let pool = create_pool(&config.database_url).await?;
    // Ensure migrations are applied.
    sqlx::migrate!("./migrations").run(&pool).await?;

    let admin_id = ensure_admin(&pool, "admin@example.com", "admin123").await?;
    let user_id = ensure_user(&pool, "user@example.com", "user123").await?;
    seed_catalog(&pool).await?;

    println!("Seed completed. Admin ID: {admin_id}, User ID: {user_id}");
    Ok(())
}

async fn ensure_admin(pool: &sqlx::PgPool, email: &str, password: &str) -> anyhow::Result<Uuid> {
    ensure_user_with_role(pool, email, password, "admin").await
}

async fn ensure_user(pool: &sqlx::PgPool, email: &str, password: &str) -> anyhow::Result<Uuid> {
    ensure_user_with_role(pool, email, password, "user").await
}

async fn ensure_user_with_role(
    pool: &sqlx::PgPool,
    email: &str,
    password: &str,
    role: &str,
) -> anyhow::Result<Uuid> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let password_hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow::anyhow!(e.to_string()))?
        .to_string();

    let row: Option<(Uuid,)> = sqlx::query_as(
        r#"
        INSERT INTO users (id, email, password_hash, role)
        VALUES ($1, $2, $3, $4)
        ON CONFLICT (email) DO UPDATE SET role = EXCLUDED.role
        RETURNING id
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(email)
    .bind(password_hash)
    .bind(role)
    .fetch_optional(pool)
    .await?;

    // If user already exists, fetch id
    let user_id = match row {
        Some((id,)) => id,
        None => {
            let existing: (Uuid,) = sqlx::query_as("SELECT id FROM users WHERE email = $1")
                .bind(email)
                .fetch_one(pool)
                .await?;
            existing.0
        }
    };

    println!("Ensured user {email} (role={role})");
    Ok(user_id)
}

async fn seed_catalog(pool: &sqlx::PgPool) -> anyhow::Result<()> {
    let categories = vec![
        ("c2a6b1be-0000-4000-8000-000000000001", json!({ "az": "İdman ayaqqabıları", "en": "Sneakers" }), "sneakers"),
        ("c2a6b1be-0000-4000-8000-000000000002", json!({ "az": "Səndəllər", "en": "Sandals" }), "sandals"),
        ("c2a6b1be-0000-4000-8000-000000000003", json!("Boots"), "boots"),
    ];
    for (id, name, slug) in categories {
        sqlx::query(
            r#"
            INSERT INTO categories (id, name, slug, is_active)
            VALUES ($1, $2, $3, true)
            ON CONFLICT (id) DO NOTHING
            "#,
        )
        .bind(Uuid::parse_str(id)?)
        .bind(name)
        .bind(slug)
        .execute(pool)
        .await?;
    }

    for (id, value) in [
        ("5a12e000-0000-4000-8000-000000000040", "40"),
        ("5a12e000-0000-4000-8000-000000000041", "41"),
        ("5a12e000-0000-4000-8000-000000000042", "42"),
        ("5a12e000-0000-4000-8000-000000000043", "43"),
    ] {
        sqlx::query(
            "INSERT INTO sizes (id, value, is_active) VALUES ($1, $2, true) ON CONFLICT (id) DO NOTHING",
        )
        .bind(Uuid::parse_str(id)?)
        .bind(value)
        .execute(pool)
        .await?;
    }

    for (id, name, code) in [
        ("c0108000-0000-4000-8000-000000000001", "Red", "#d7263d"),
        ("c0108000-0000-4000-8000-000000000002", "Black", "#111111"),
        ("c0108000-0000-4000-8000-000000000003", "White", "#f5f5f5"),
    ] {
        sqlx::query(
            "INSERT INTO colors (id, name, code, is_active) VALUES ($1, $2, $3, true) ON CONFLICT (id) DO NOTHING",
        )
        .bind(Uuid::parse_str(id)?)
        .bind(name)
        .bind(code)
        .execute(pool)
        .await?;
    }

    // One silhouette in two colors: the black parent and its red variant.
    let parent_id = Uuid::parse_str("9a0dc000-0000-4000-8000-000000000001")?;
    seed_product(
        pool,
        parent_id,
        json!({ "az": "Şəhər idman ayaqqabısı", "en": "City Runner" }),
        "Sneakers",
        25000,
        19900,
        Some(20),
        json!(["40", "41", "42"]),
        json!(["Black"]),
        25,
        None,
    )
    .await?;
    seed_product(
        pool,
        Uuid::parse_str("9a0dc000-0000-4000-8000-000000000002")?,
        json!({ "az": "Şəhər idman ayaqqabısı", "en": "City Runner" }),
        "Sneakers",
        25000,
        19900,
        Some(20),
        json!(["41", "42", "43"]),
        json!(["Red"]),
        18,
        Some(parent_id),
    )
    .await?;
    seed_product(
        pool,
        Uuid::parse_str("9a0dc000-0000-4000-8000-000000000003")?,
        json!("Strap Sandal"),
        "Sandals",
        12000,
        12000,
        None,
        json!(["40", "41"]),
        json!(["White"]),
        40,
        None,
    )
    .await?;

    println!("Seeded catalog");
    Ok(())
}

#[allow(clippy::too_many_arguments)]
async fn seed_product(
    pool: &sqlx::PgPool,
    id: Uuid,
    name: serde_json::Value,
    category: &str,
    price: i64,
    selling_price: i64,
    sale: Option<i32>,
    sizes: serde_json::Value,
    colors: serde_json::Value,
    stock: i32,
    parents_id: Option<Uuid>,
) -> anyhow::Result<()> {
    sqlx::query(
        r#"
        INSERT INTO products
            (id, name, category, price, selling_price, sale, sizes, colors, images, stock, is_active, is_new, parents_id)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, '[]', $9, true, true, $10)
        ON CONFLICT (id) DO NOTHING
        "#,
    )
    .bind(id)
    .bind(name)
    .bind(category)
    .bind(price)
    .bind(selling_price)
    .bind(sale)
    .bind(sizes)
    .bind(colors)
    .bind(stock)
    .bind(parents_id)
    .execute(pool)
    .await?;
    Ok(())
}
