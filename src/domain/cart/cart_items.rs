//! Cart Items slice

use axum::{
    Json,
    extract::{Path, State},
};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    domain::{
        cart::registry::CartRegistry,
        cart::state::LineItem,
        ids::CartId,
    },
    infra::ClientError,
};

//------------------------- Web API ----------------------------

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CartItemsView {
    pub cart_id: CartId,
    pub items: Vec<LineItem>,
    pub total: Decimal,
    pub item_count: u32,
}

/// Snapshot of a session's cart with its derived values. An untouched cart
/// reads as the canonical empty state, since carts exist from first touch.
pub async fn cart_items_endpoint(
    State(carts): State<CartRegistry>,
    Path(cart_uuid): Path<Uuid>,
) -> Result<Json<CartItemsView>, ClientError> {
    let cart_id: CartId = cart_uuid.try_into()?;

    let cart = carts.get_or_create(cart_id).await;
    let cart = cart.lock().await;

    Ok(Json(CartItemsView {
        cart_id,
        items: cart.items().to_vec(),
        total: cart.total(),
        item_count: cart.item_count(),
    }))
}

//-------------------------- Tests -------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::add_item::{AddItemPayload, add_item_endpoint};

    #[tokio::test]
    async fn the_view_carries_items_total_and_item_count() {
        let carts = CartRegistry::new();
        let cart_id = Uuid::now_v7();
        let product_id = Uuid::now_v7();

        for _ in 0..2 {
            add_item_endpoint(
                State(carts.clone()),
                Path(cart_id),
                Json(AddItemPayload {
                    cart_id,
                    product_id,
                    name: "Pasta Carbonara".to_owned(),
                    unit_price: Decimal::new(1150, 2),
                }),
            )
            .await
            .expect("item should be added");
        }

        let Json(view) = cart_items_endpoint(State(carts), Path(cart_id))
            .await
            .expect("view should be read");

        assert_eq!(view.items.len(), 1);
        assert_eq!(view.item_count, 2);
        assert_eq!(view.total, Decimal::new(2300, 2));
    }

    #[tokio::test]
    async fn an_untouched_cart_reads_as_empty() {
        let carts = CartRegistry::new();

        let Json(view) = cart_items_endpoint(State(carts), Path(Uuid::now_v7()))
            .await
            .expect("view should be read");

        assert!(view.items.is_empty());
        assert_eq!(view.total, Decimal::ZERO);
        assert_eq!(view.item_count, 0);
    }
}
