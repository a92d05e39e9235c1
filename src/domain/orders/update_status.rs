//! Update Order Status slice

use axum::{
    Json,
    extract::{Path, State},
};
use uuid::Uuid;

use crate::{
    domain::{ids::OrderId, orders::OrderStatus},
    gateway::{Gateway, SharedGateway},
    infra::ClientError,
};

//------------------------- Web API ----------------------------

#[derive(Debug, Clone, serde::Deserialize)]
pub struct UpdateStatusPayload {
    pub order_id: Uuid,
    pub status: OrderStatus,
}

pub async fn update_status_endpoint(
    State(gateway): State<SharedGateway>,
    Path(order_uuid): Path<Uuid>,
    Json(payload): Json<UpdateStatusPayload>,
) -> Result<Json<OrderId>, ClientError> {
    if order_uuid != payload.order_id {
        return Err(ClientError::Payload(
            "Path OrderId does not match payload OrderId.".to_owned(),
        ));
    }

    let order_id: OrderId = order_uuid.try_into()?;
    gateway.update_order_status(order_id, payload.status).await?;
    Ok(Json(order_id))
}

//-------------------------- Tests -------------------------------
