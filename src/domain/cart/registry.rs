//! Session-to-cart map.
//!
//! One [`Cart`] facade exists per session (cart id). Carts come into being
//! empty on first touch and live for the life of the process; the per-cart
//! mutex keeps writes serialized, matching the cart's single-writer model.

use std::{collections::HashMap, sync::Arc};

use tokio::sync::{Mutex, RwLock};

use crate::domain::{cart::facade::Cart, ids::CartId};

#[derive(Clone, Default)]
pub struct CartRegistry {
    carts: Arc<RwLock<HashMap<CartId, Arc<Mutex<Cart>>>>>,
}

impl CartRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cart for the session, creating an empty one on first use.
    pub async fn get_or_create(&self, cart_id: CartId) -> Arc<Mutex<Cart>> {
        if let Some(cart) = self.carts.read().await.get(&cart_id) {
            return cart.clone();
        }

        let mut carts = self.carts.write().await;
        carts
            .entry(cart_id)
            .or_insert_with(|| Arc::new(Mutex::new(Cart::new())))
            .clone()
    }
}

//-------------------------- Tests -------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::helpers::fake::example_product;
    use rust_decimal::Decimal;

    #[tokio::test]
    async fn the_same_session_gets_the_same_cart_back() {
        let registry = CartRegistry::new();
        let cart_id = CartId::new();
        let pizza = example_product("Pizza Margherita", Decimal::new(1299, 2));

        {
            let cart = registry.get_or_create(cart_id).await;
            cart.lock().await.add_item(&pizza);
        }

        let cart = registry.get_or_create(cart_id).await;
        assert_eq!(cart.lock().await.item_count(), 1);
    }

    #[tokio::test]
    async fn different_sessions_get_independent_carts() {
        let registry = CartRegistry::new();
        let pizza = example_product("Pizza Margherita", Decimal::new(1299, 2));

        let first = registry.get_or_create(CartId::new()).await;
        first.lock().await.add_item(&pizza);

        let second = registry.get_or_create(CartId::new()).await;
        assert_eq!(second.lock().await.item_count(), 0);
    }
}
