use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, ConnectionTrait, Set, Statement};
use shoestore_api::{
    db::{create_orm_conn, create_pool, run_migrations},
    dto::{
        cart::AddToCartRequest,
        orders::{CheckoutRequest, PayOrderRequest},
    },
    entity::{
        ImageList, TextList, products::ActiveModel as ProductActive,
        users::ActiveModel as UserActive,
    },
    locale::LocalizedText,
    middleware::auth::AuthUser,
    routes::admin::{LowStockQuery, UpdateOrderStatusRequest},
    routes::params::Pagination,
    search::{DbCatalog, SearchSession},
    services::{admin_service, cart_service, order_service},
    state::AppState,
};
use uuid::Uuid;

// Integration flow: user adds to cart -> checkout -> pay; admin updates
// status and sees low stock; snapshot search finds the product.
#[tokio::test]
async fn checkout_pay_and_admin_flow() -> anyhow::Result<()> {
    // Allow skipping when no DB is configured in the environment.
    let database_url =
        match std::env::var("TEST_DATABASE_URL").or_else(|_| std::env::var("DATABASE_URL")) {
            Ok(url) => url,
            Err(_) => {
                eprintln!(
                    "Skipping test: set TEST_DATABASE_URL or DATABASE_URL to run integration flow tests."
                );
                return Ok(());
            }
        };

    let state = setup_state(&database_url).await?;

    // Seed users
    let user_id = create_user(&state, "user", "user@example.com").await?;
    let admin_id = create_user(&state, "admin", "admin@example.com").await?;

    // Seed product with stock
    let product = ProductActive {
        id: Set(Uuid::new_v4()),
        name: Set(LocalizedText::plain("Test Runner")),
        category: Set("Sneakers".into()),
        description: Set(Some("A shoe for testing".into())),
        price: Set(12000),
        selling_price: Set(10000),
        sale: Set(None),
        sizes: Set(TextList(vec!["42".into(), "43".into()])),
        colors: Set(TextList(vec!["Black".into()])),
        images: Set(ImageList(vec![])),
        stock: Set(10),
        is_active: Set(Some(true)),
        is_new: Set(true),
        parents_id: Set(None),
        created_at: NotSet,
    }
    .insert(&state.orm)
    .await?;

    let auth_user = AuthUser {
        user_id,
        role: "user".into(),
    };
    let auth_admin = AuthUser {
        user_id: admin_id,
        role: "admin".into(),
    };

    // Add to cart
    cart_service::add_to_cart(
        &state,
        &auth_user,
        AddToCartRequest {
            product_id: product.id,
            size: Some("42".into()),
            quantity: 2,
        },
    )
    .await?;

    // Checkout
    let checkout_resp = order_service::checkout(
        &state,
        &auth_user,
        CheckoutRequest {
            address: "Somewhere".into(),
            payment_method: "cash".into(),
        },
    )
    .await?;
    let order = checkout_resp.data.unwrap().order;
    assert_eq!(order.total_amount, 20000);

    // Pay
    let pay_resp = order_service::pay_order(
        &state,
        &auth_user,
        order.id,
        PayOrderRequest {
            invoice_number: order.invoice_number.clone(),
        },
    )
    .await?;
    let paid_order = pay_resp.data.unwrap().order;
    assert_eq!(paid_order.status, "paid");

    // Admin updates status
    let updated = admin_service::update_order_status(
        &state,
        &auth_admin,
        order.id,
        UpdateOrderStatusRequest {
            status: "shipped".into(),
        },
    )
    .await?;
    assert_eq!(updated.data.unwrap().status, "shipped");

    // Low stock should include the product after stock decreased to 8
    let low = admin_service::list_low_stock(
        &state,
        &auth_admin,
        LowStockQuery {
            pagination: Pagination {
                page: Some(1),
                per_page: Some(20),
            },
            threshold: Some(10),
        },
    )
    .await?;
    assert!(
        low.data.unwrap().items.iter().any(|p| p.id == product.id),
        "expected product to appear in low-stock list"
    );

    // Snapshot search sees the seeded product by name and by color
    let outcome = state.search.run("runner").await?;
    assert!(outcome.products.iter().any(|p| p.id == product.id));
    let outcome = state.search.run("black").await?;
    assert!(outcome.products.iter().any(|p| p.id == product.id));

    Ok(())
}

async fn setup_state(database_url: &str) -> anyhow::Result<AppState> {
    let pool = create_pool(database_url).await?;
    let orm = create_orm_conn(database_url).await?;
    run_migrations(&orm).await?;

    // Clean tables between runs
    let backend = orm.get_database_backend();
    orm.execute(Statement::from_string(
        backend,
        "TRUNCATE TABLE order_items, orders, cart_items, favorites, audit_logs, products, categories, sizes, colors, users RESTART IDENTITY CASCADE",
    ))
    .await?;

    Ok(AppState {
        pool,
        search: SearchSession::new(DbCatalog::new(orm.clone())),
        orm,
    })
}

async fn create_user(state: &AppState, role: &str, email: &str) -> anyhow::Result<Uuid> {
    let user = UserActive {
        id: Set(Uuid::new_v4()),
        email: Set(email.to_string()),
        password_hash: Set("dummy".into()),
        role: Set(role.into()),
        created_at: NotSet,
    }
    .insert(&state.orm)
    .await?;

    Ok(user.id)
}
