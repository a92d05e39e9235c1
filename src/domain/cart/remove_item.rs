//! Remove Item slice

use axum::{
    Json,
    extract::{Path, State},
};
use uuid::Uuid;

use crate::{
    domain::{
        cart::registry::CartRegistry,
        cart::state::{CartAction, CartState},
        ids::{CartId, ProductId},
    },
    infra::ClientError,
};

//------------------------- Web API ----------------------------

#[derive(Debug, Clone, serde::Deserialize)]
pub struct RemoveItemPayload {
    pub cart_id: Uuid,
    pub product_id: Uuid,
}

/// Removal is idempotent: asking to remove a product that is not in the
/// cart simply returns the unchanged state.
pub async fn remove_item_endpoint(
    State(carts): State<CartRegistry>,
    Path(cart_uuid): Path<Uuid>,
    Json(payload): Json<RemoveItemPayload>,
) -> Result<Json<CartState>, ClientError> {
    if cart_uuid != payload.cart_id {
        return Err(ClientError::Payload(
            "Path CartId does not match payload CartId.".to_owned(),
        ));
    }

    let cart_id: CartId = cart_uuid.try_into()?;
    let product_id: ProductId = payload.product_id.try_into()?;

    let cart = carts.get_or_create(cart_id).await;
    let mut cart = cart.lock().await;
    cart.dispatch(CartAction::RemoveItem { product_id });

    Ok(Json(cart.state().clone()))
}

//-------------------------- Tests -------------------------------
