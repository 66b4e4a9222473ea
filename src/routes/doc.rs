use utoipa::{
    Modify, OpenApi,
    openapi::{
        self,
        OpenApi as OpenApiSpec,
        security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    },
};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        auth::{LoginRequest, LoginResponse, RegisterRequest},
        cart::{AddToCartRequest, CartItemDto, CartList},
        catalog::{
            CategoryList, ColorList, CreateCategoryRequest, CreateColorRequest, CreateSizeRequest,
            SizeList, UpdateCategoryRequest, UpdateColorRequest, UpdateSizeRequest,
        },
        favorites::{AddFavoriteRequest, FavoriteProductList},
        orders::{CheckoutRequest, OrderList, OrderWithItems, PayOrderRequest},
        products,
    },
    locale::LocalizedText,
    models::{
        CartItem, Category, ColorOption, Favorite, ImageRef, Order, OrderItem, Product,
        SizeOption, User,
    },
    response::{ApiResponse, Meta},
    routes::{
        admin, auth, cart, catalog, favorites, health, orders, params,
        products as product_routes, search,
    },
    search::{FilterSelection, PriceBucket, SearchOutcome},
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        auth::login,
        auth::register,
        search::search_catalog,
        product_routes::list_products,
        product_routes::get_product,
        product_routes::list_variants,
        product_routes::filter_products,
        product_routes::create_product,
        product_routes::update_product,
        product_routes::delete_product,
        cart::cart_list,
        cart::add_to_cart,
        cart::remove_from_cart,
        favorites::add_favorite,
        favorites::remove_favorite,
        favorites::list_favorites,
        orders::list_orders,
        orders::checkout,
        orders::pay_order,
        orders::get_order,
        admin::list_all_orders,
        admin::get_order_admin,
        admin::update_order_status,
        admin::list_low_stock,
        admin::adjust_inventory,
        admin::list_customers,
        catalog::list_categories,
        catalog::create_category,
        catalog::update_category,
        catalog::delete_category,
        catalog::list_sizes,
        catalog::create_size,
        catalog::update_size,
        catalog::delete_size,
        catalog::list_colors,
        catalog::create_color,
        catalog::update_color,
        catalog::delete_color
    ),
    components(
        schemas(
            User,
            Product,
            Category,
            SizeOption,
            ColorOption,
            Favorite,
            CartItem,
            Order,
            OrderItem,
            LocalizedText,
            ImageRef,
            SearchOutcome,
            FilterSelection,
            PriceBucket,
            RegisterRequest,
            LoginRequest,
            LoginResponse,
            AddToCartRequest,
            CartItemDto,
            CartList,
            AddFavoriteRequest,
            FavoriteProductList,
            CheckoutRequest,
            PayOrderRequest,
            OrderList,
            OrderWithItems,
            CreateCategoryRequest,
            UpdateCategoryRequest,
            CategoryList,
            CreateSizeRequest,
            UpdateSizeRequest,
            SizeList,
            CreateColorRequest,
            UpdateColorRequest,
            ColorList,
            products::CreateProductRequest,
            products::UpdateProductRequest,
            products::ProductList,
            products::VariantFamily,
            admin::ProductList,
            admin::UpdateOrderStatusRequest,
            admin::InventoryAdjustRequest,
            admin::LowStockQuery,
            admin::CustomerDto,
            admin::CustomerList,
            health::HealthData,
            params::Pagination,
            params::ProductQuery,
            params::OrderListQuery,
            params::SearchQuery,
            Meta,
            ApiResponse<Product>,
            ApiResponse<products::ProductList>,
            ApiResponse<SearchOutcome>,
            ApiResponse<OrderWithItems>,
            ApiResponse<OrderList>,
            ApiResponse<admin::ProductList>
        )
    ),
    security(
        ("bearer_auth" = [])
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Search", description = "Catalog snapshot search"),
        (name = "Products", description = "Product endpoints"),
        (name = "Catalog", description = "Category, size and color management"),
        (name = "Cart", description = "Cart endpoints"),
        (name = "Orders", description = "Order endpoints"),
        (name = "Admin", description = "Admin endpoints"),
        (name = "Auth", description = "Authentication endpoints"),
        (name = "Favorites", description = "Favorite endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
