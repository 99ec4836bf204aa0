use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        orders::{
            CreateOrderRequest, CreateOrderResponse, DeliveryNotice, OrderItemRequest, OrderList,
            PhoneQuery, UpdateOrderStatusRequest,
        },
        products::{ProductList, ProductQuery, SeedQuery, SeedReport},
        users::AddressList,
    },
    models::{Address, Category, Order, OrderItem, OrderStatus, Product},
    response::{Ack, ErrorBody},
    routes::{health, orders, products, users},
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Handmade by Rama API"),
    paths(
        health::service_info,
        health::connection_status,
        products::list_products,
        products::get_product,
        products::seed_products,
        users::list_addresses,
        users::add_address,
        orders::create_order,
        orders::list_orders,
        orders::update_order_status,
        orders::delivery_notice,
    ),
    components(
        schemas(
            health::ServiceInfo,
            health::ConnectionReport,
            Product,
            Category,
            Address,
            Order,
            OrderItem,
            OrderStatus,
            ProductList,
            ProductQuery,
            SeedQuery,
            SeedReport,
            AddressList,
            CreateOrderRequest,
            OrderItemRequest,
            CreateOrderResponse,
            OrderList,
            PhoneQuery,
            UpdateOrderStatusRequest,
            DeliveryNotice,
            Ack,
            ErrorBody,
        )
    ),
    tags(
        (name = "Health", description = "Service identity and database connectivity"),
        (name = "Products", description = "Catalog endpoints"),
        (name = "Users", description = "Address book endpoints"),
        (name = "Orders", description = "Order endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
