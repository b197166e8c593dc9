//! Handlers for the order resource.
//!
//! Orders are created under a customer and can be read or deleted, but
//! never updated.

use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
};

use crate::api::dto::OrderDto;
use crate::api::routes::ORDER_PATH;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::resource_id::parse_resource_id;

/// Lists all orders.
///
/// # Endpoint
///
/// `GET /api/v1/order`
pub async fn find_all_orders_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<OrderDto>>, AppError> {
    let orders = state.order_service.find_all().await?;
    Ok(Json(orders))
}

/// Returns a single order.
///
/// # Endpoint
///
/// `GET /api/v1/order/{id}`
///
/// # Errors
///
/// Returns 400 if `id` is not a UUID.
/// Returns 404 if the order does not exist.
pub async fn find_order_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<OrderDto>, AppError> {
    let id = parse_resource_id(&id)?;
    let order = state.order_service.find_by_id(id).await?;
    Ok(Json(order))
}

/// Places a new order for a customer.
///
/// # Endpoint
///
/// `POST /api/v1/order/{customer_id}`
///
/// # Response
///
/// `201 Created` with `Location: /api/v1/order/{order_id}`.
///
/// # Errors
///
/// Returns 400 if `customer_id` is not a UUID or the body is invalid.
/// Returns 404 if the customer does not exist.
pub async fn insert_order_handler(
    Path(customer_id): Path<String>,
    State(state): State<AppState>,
    Json(payload): Json<OrderDto>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1]), AppError> {
    let customer_id = parse_resource_id(&customer_id)?;
    let id = state.order_service.insert(customer_id, payload).await?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("{ORDER_PATH}/{id}"))],
    ))
}

/// Deletes an order.
///
/// # Endpoint
///
/// `DELETE /api/v1/order/{id}`
///
/// # Errors
///
/// Returns 400 if `id` is not a UUID.
/// Returns 404 if the order does not exist.
pub async fn delete_order_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    let id = parse_resource_id(&id)?;
    state.order_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
