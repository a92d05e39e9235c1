//! Clear Cart slice

use axum::{
    Json,
    extract::{Path, State},
};
use uuid::Uuid;

use crate::{
    domain::{
        cart::registry::CartRegistry,
        cart::state::{CartAction, CartState},
        ids::CartId,
    },
    infra::ClientError,
};

//------------------------- Web API ----------------------------

pub async fn clear_cart_endpoint(
    State(carts): State<CartRegistry>,
    Path(cart_uuid): Path<Uuid>,
) -> Result<Json<CartState>, ClientError> {
    let cart_id: CartId = cart_uuid.try_into()?;

    let cart = carts.get_or_create(cart_id).await;
    let mut cart = cart.lock().await;
    cart.dispatch(CartAction::ClearCart);

    Ok(Json(cart.state().clone()))
}

//-------------------------- Tests -------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::add_item::{AddItemPayload, add_item_endpoint};
    use rust_decimal::Decimal;

    #[tokio::test]
    async fn clearing_returns_the_canonical_empty_state() {
        let carts = CartRegistry::new();
        let cart_id = Uuid::now_v7();

        for name in ["Pizza Margherita", "Caesar Salad"] {
            add_item_endpoint(
                State(carts.clone()),
                Path(cart_id),
                Json(AddItemPayload {
                    cart_id,
                    product_id: Uuid::now_v7(),
                    name: name.to_owned(),
                    unit_price: Decimal::new(750, 2),
                }),
            )
            .await
            .expect("item should be added");
        }

        let Json(state) = clear_cart_endpoint(State(carts), Path(cart_id))
            .await
            .expect("cart should clear");

        assert_eq!(state, CartState::default());
    }

    #[tokio::test]
    async fn clearing_an_untouched_cart_is_fine() {
        let carts = CartRegistry::new();

        let Json(state) = clear_cart_endpoint(State(carts), Path(Uuid::now_v7()))
            .await
            .expect("cart should clear");

        assert_eq!(state, CartState::default());
    }
}
