//! List Orders slice

use axum::{
    Json,
    extract::{Query, State},
};

use crate::{
    domain::orders::{Order, OrderStatus},
    gateway::{Gateway, SharedGateway},
    infra::ClientError,
};

//------------------------- Web API ----------------------------

#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct ListOrdersQuery {
    pub status: Option<OrderStatus>,
}

/// Orders newest first, optionally narrowed to one status.
pub async fn list_orders_endpoint(
    State(gateway): State<SharedGateway>,
    Query(query): Query<ListOrdersQuery>,
) -> Result<Json<Vec<Order>>, ClientError> {
    let orders = match query.status {
        Some(status) => gateway.list_orders_by_status(status).await?,
        None => gateway.list_orders().await?,
    };
    Ok(Json(orders))
}

//-------------------------- Tests -------------------------------
