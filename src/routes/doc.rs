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
        cart::{AddToCartRequest, CartList, RemovedCartItem},
        orders::{OrderList, PlacedOrder},
        products::ProductList,
    },
    models::{CartItem, Order, Product, User},
    response::{ApiResponse, ErrorBody, Meta},
    routes::{cart, health, orders, params, products, users},
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
        users::register,
        users::login,
        products::list_products,
        products::get_product,
        cart::cart_list,
        cart::add_to_cart,
        cart::remove_from_cart,
        orders::list_orders,
        orders::place_order,
    ),
    components(
        schemas(
            User,
            Product,
            CartItem,
            Order,
            RegisterRequest,
            LoginRequest,
            LoginResponse,
            AddToCartRequest,
            CartList,
            RemovedCartItem,
            OrderList,
            PlacedOrder,
            ProductList,
            params::Pagination,
            health::HealthData,
            Meta,
            ErrorBody,
            ApiResponse<User>,
            ApiResponse<LoginResponse>,
            ApiResponse<Product>,
            ApiResponse<ProductList>,
            ApiResponse<CartItem>,
            ApiResponse<CartList>,
            ApiResponse<OrderList>,
            ApiResponse<PlacedOrder>
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Users", description = "Registration and login"),
        (name = "Products", description = "Product catalog"),
        (name = "Cart", description = "Cart of the current user"),
        (name = "Orders", description = "Orders of the current user"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
