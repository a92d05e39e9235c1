//! Delete Product slice

use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

use crate::{domain::ids::ProductId, gateway::{Gateway, SharedGateway}, infra::ClientError};

pub async fn delete_product_endpoint(
    State(gateway): State<SharedGateway>,
    Path(product_uuid): Path<Uuid>,
) -> Result<StatusCode, ClientError> {
    let product_id: ProductId = product_uuid.try_into()?;
    gateway.delete_product(product_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

//-------------------------- Tests -------------------------------
