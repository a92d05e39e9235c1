//! Add Item slice

use axum::{
    Json,
    extract::{Path, State},
};
use rust_decimal::Decimal;
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
pub struct AddItemPayload {
    pub cart_id: Uuid,
    pub product_id: Uuid,
    pub name: String,
    pub unit_price: Decimal,
}

pub async fn add_item_endpoint(
    State(carts): State<CartRegistry>,
    Path(cart_uuid): Path<Uuid>,
    Json(payload): Json<AddItemPayload>,
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
    cart.dispatch(CartAction::AddItem {
        product_id,
        name: payload.name,
        unit_price: payload.unit_price,
    });

    Ok(Json(cart.state().clone()))
}

//-------------------------- Tests -------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn adding_through_the_endpoint_returns_the_new_state() {
        let carts = CartRegistry::new();
        let cart_id = Uuid::now_v7();
        let product_id = Uuid::now_v7();

        let payload = AddItemPayload {
            cart_id,
            product_id,
            name: "Pizza Margherita".to_owned(),
            unit_price: Decimal::new(1299, 2),
        };

        let Json(state) = add_item_endpoint(
            State(carts.clone()),
            Path(cart_id),
            Json(payload.clone()),
        )
        .await
        .expect("item should be added");
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.total, Decimal::new(1299, 2));

        let Json(state) = add_item_endpoint(State(carts), Path(cart_id), Json(payload))
            .await
            .expect("item should be added");
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.items[0].quantity, 2);
        assert_eq!(state.total, Decimal::new(2598, 2));
    }

    #[tokio::test]
    async fn a_mismatched_cart_id_is_rejected() {
        let carts = CartRegistry::new();

        let payload = AddItemPayload {
            cart_id: Uuid::now_v7(),
            product_id: Uuid::now_v7(),
            name: "Pizza Margherita".to_owned(),
            unit_price: Decimal::new(1299, 2),
        };

        let result =
            add_item_endpoint(State(carts), Path(Uuid::now_v7()), Json(payload)).await;
        assert!(matches!(result, Err(ClientError::Payload(_))));
    }

    #[tokio::test]
    async fn a_v4_cart_id_is_rejected() {
        let carts = CartRegistry::new();
        let cart_id = Uuid::new_v4();

        let payload = AddItemPayload {
            cart_id,
            product_id: Uuid::now_v7(),
            name: "Pizza Margherita".to_owned(),
            unit_price: Decimal::new(1299, 2),
        };

        let result = add_item_endpoint(State(carts), Path(cart_id), Json(payload)).await;
        assert!(matches!(result, Err(ClientError::Payload(_))));
    }
}
