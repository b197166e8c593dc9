//! API route configuration.
//!
//! The route table is explicit: every (method, path) pair is registered here
//! and nowhere else.

use crate::api::handlers::{
    delete_customer_handler, delete_order_handler, find_all_customers_handler,
    find_all_orders_handler, find_customer_handler, find_order_handler, insert_customer_handler,
    insert_order_handler, update_customer_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Base path of the customer resource.
pub const CUSTOMER_PATH: &str = "/api/v1/customer";

/// Base path of the order resource.
pub const ORDER_PATH: &str = "/api/v1/order";

/// Version 1 REST routes.
///
/// # Endpoints
///
/// - `GET    /api/v1/customer`         - List customers
/// - `POST   /api/v1/customer`         - Create a customer
/// - `GET    /api/v1/customer/{id}`    - Get a customer
/// - `PUT    /api/v1/customer/{id}`    - Replace a customer
/// - `DELETE /api/v1/customer/{id}`    - Delete a customer
/// - `GET    /api/v1/order`            - List orders
/// - `GET    /api/v1/order/{id}`       - Get an order
/// - `POST   /api/v1/order/{customer}` - Create an order for a customer
/// - `DELETE /api/v1/order/{id}`       - Delete an order
///
/// Orders have no `PUT`; the router answers it with 405.
pub fn v1_routes() -> Router<AppState> {
    Router::new()
        .route(
            CUSTOMER_PATH,
            get(find_all_customers_handler).post(insert_customer_handler),
        )
        .route(
            "/api/v1/customer/{id}",
            get(find_customer_handler)
                .put(update_customer_handler)
                .delete(delete_customer_handler),
        )
        .route(ORDER_PATH, get(find_all_orders_handler))
        .route(
            "/api/v1/order/{id}",
            get(find_order_handler)
                .post(insert_order_handler)
                .delete(delete_order_handler),
        )
}
