//! Update Product slice

use axum::{
    Json,
    extract::{Path, State},
};
use uuid::Uuid;

use crate::{
    domain::{catalog::ProductDraft, ids::ProductId},
    gateway::{Gateway, SharedGateway},
    infra::ClientError,
};

/// Updates run the same validation as creates before touching the store.
pub async fn update_product_endpoint(
    State(gateway): State<SharedGateway>,
    Path(product_uuid): Path<Uuid>,
    Json(draft): Json<ProductDraft>,
) -> Result<Json<ProductId>, ClientError> {
    let product_id: ProductId = product_uuid.try_into()?;
    let draft = draft.validate()?;
    gateway.update_product(product_id, draft).await?;
    Ok(Json(product_id))
}

//-------------------------- Tests -------------------------------
