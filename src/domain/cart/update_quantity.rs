//! Update Quantity slice
//!
//! Setting a quantity of zero or less removes the line, so callers never have
//! to special-case "zero left in the cart".

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
pub struct UpdateQuantityPayload {
    pub cart_id: Uuid,
    pub product_id: Uuid,
    pub quantity: i32,
}

pub async fn update_quantity_endpoint(
    State(carts): State<CartRegistry>,
    Path(cart_uuid): Path<Uuid>,
    Json(payload): Json<UpdateQuantityPayload>,
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
    cart.dispatch(CartAction::UpdateQuantity {
        product_id,
        quantity: payload.quantity,
    });

    Ok(Json(cart.state().clone()))
}

//-------------------------- Tests -------------------------------
