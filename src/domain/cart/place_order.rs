//! Place Order slice.
//!
//! The one protocol that crosses from the cart to the gateway. Local
//! preconditions are checked before any remote call, and the cart is cleared
//! only once the gateway confirms the order was stored. A failed call
//! leaves everything in place for a retry.

use axum::{
    Json,
    extract::{Path, State},
};
use uuid::Uuid;

use crate::{
    domain::{
        cart::{errors::CartError, facade::Cart, registry::CartRegistry},
        ids::{CartId, OrderId},
        orders::OrderSnapshot,
    },
    gateway::{Gateway, GatewayError, SharedGateway},
    infra::ClientError,
};

//------------------------- Web API ----------------------------

#[derive(Debug, Clone, serde::Deserialize)]
pub struct PlaceOrderPayload {
    pub cart_id: Uuid,
    pub customer_name: String,
}

pub async fn place_order_endpoint(
    State(carts): State<CartRegistry>,
    State(gateway): State<SharedGateway>,
    Path(cart_uuid): Path<Uuid>,
    Json(payload): Json<PlaceOrderPayload>,
) -> Result<Json<OrderId>, ClientError> {
    if cart_uuid != payload.cart_id {
        return Err(ClientError::Payload(
            "Path CartId does not match payload CartId.".to_owned(),
        ));
    }

    let cart_id: CartId = cart_uuid.try_into()?;
    let cart = carts.get_or_create(cart_id).await;
    let mut cart = cart.lock().await;

    let order_id = place_order(&mut cart, &payload.customer_name, gateway.as_ref()).await?;
    Ok(Json(order_id))
}

//----------------------- Implementation --------------------------

/// Validates, snapshots, submits, and clears, in that order.
pub async fn place_order(
    cart: &mut Cart,
    customer_name: &str,
    gateway: &dyn Gateway,
) -> Result<OrderId, PlaceOrderError> {
    if cart.state().is_empty() {
        return Err(CartError::EmptyCart.into());
    }

    let customer_name = customer_name.trim();
    if customer_name.is_empty() {
        return Err(CartError::CustomerNameRequired.into());
    }

    let snapshot = OrderSnapshot::from_cart(cart.state(), customer_name);
    let order_id = gateway.create_order(snapshot).await?;

    // Only a confirmed create empties the cart.
    cart.clear();

    tracing::info!(%order_id, "order placed");
    Ok(order_id)
}

#[derive(Debug, thiserror::Error)]
pub enum PlaceOrderError {
    #[error(transparent)]
    Validation(#[from] CartError),
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

impl From<PlaceOrderError> for ClientError {
    fn from(value: PlaceOrderError) -> Self {
        match value {
            PlaceOrderError::Validation(cart_error) => ClientError::Cart(cart_error),
            PlaceOrderError::Gateway(gateway_error) => ClientError::Gateway(gateway_error),
        }
    }
}

//-------------------------- Tests -------------------------------
