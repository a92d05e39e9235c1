//! The stateful wrapper views talk to.
//!
//! A [`Cart`] owns the current [`CartState`] and is the only writer of it.
//! Consumers either dispatch actions or read derived values; nobody reaches
//! into the item list directly. After every mutation the new state is
//! published on a watch channel so subscribed observers re-render from the
//! latest snapshot.

use rust_decimal::Decimal;
use tokio::sync::watch;

use crate::domain::{
    cart::state::{CartAction, CartState, LineItem, reduce},
    catalog::Product,
    ids::ProductId,
};

pub struct Cart {
    state: CartState,
    changes: watch::Sender<CartState>,
}

impl Cart {
    pub fn new() -> Self {
        let state = CartState::default();
        let (changes, _) = watch::channel(state.clone());
        Self { state, changes }
    }

    /// Runs the action through the reducer, replaces the held state and
    /// notifies observers. This is the single write path for cart state.
    pub fn dispatch(&mut self, action: CartAction) {
        self.state = reduce(&self.state, action);
        self.changes.send_replace(self.state.clone());
    }

    pub fn add_item(&mut self, product: &Product) {
        self.dispatch(CartAction::AddItem {
            product_id: product.id,
            name: product.name.clone(),
            unit_price: product.unit_price,
        });
    }

    pub fn remove_item(&mut self, product_id: ProductId) {
        self.dispatch(CartAction::RemoveItem { product_id });
    }

    pub fn update_quantity(&mut self, product_id: ProductId, quantity: i32) {
        self.dispatch(CartAction::UpdateQuantity {
            product_id,
            quantity,
        });
    }

    pub fn clear(&mut self) {
        self.dispatch(CartAction::ClearCart);
    }

    pub fn state(&self) -> &CartState {
        &self.state
    }

    pub fn items(&self) -> &[LineItem] {
        &self.state.items
    }

    pub fn total(&self) -> Decimal {
        self.state.total
    }

    /// Sum of all line quantities, recomputed on every read so it can never
    /// drift from the state it is derived from.
    pub fn item_count(&self) -> u32 {
        self.state.items.iter().map(|item| item.quantity).sum()
    }

    /// Quantity of the given product in the cart, 0 when absent.
    pub fn item_quantity(&self, product_id: ProductId) -> u32 {
        self.state
            .items
            .iter()
            .find(|item| item.product_id == product_id)
            .map(|item| item.quantity)
            .unwrap_or(0)
    }

    pub fn subscribe(&self) -> watch::Receiver<CartState> {
        self.changes.subscribe()
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

//-------------------------- Tests -------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::helpers::fake::example_product;
    use rust_decimal::Decimal;

    #[test]
    fn derived_queries_track_the_latest_state() {
        let pizza = example_product("Pizza Margherita", Decimal::new(1299, 2));
        let salad = example_product("Caesar Salad", Decimal::new(750, 2));

        let mut cart = Cart::new();
        cart.add_item(&pizza);
        cart.add_item(&pizza);
        cart.add_item(&salad);

        assert_eq!(cart.item_count(), 3);
        assert_eq!(cart.item_quantity(pizza.id), 2);
        assert_eq!(cart.item_quantity(salad.id), 1);
        assert_eq!(cart.total(), Decimal::new(3348, 2));

        cart.update_quantity(pizza.id, 5);
        assert_eq!(cart.item_count(), 6);
        assert_eq!(cart.item_quantity(pizza.id), 5);

        cart.remove_item(salad.id);
        assert_eq!(cart.item_quantity(salad.id), 0);

        cart.clear();
        assert_eq!(cart.item_count(), 0);
        assert_eq!(cart.total(), Decimal::ZERO);
        assert!(cart.items().is_empty());
    }

    #[test]
    fn absent_products_read_as_quantity_zero() {
        let cart = Cart::new();
        assert_eq!(cart.item_quantity(ProductId::new()), 0);
    }

    #[test]
    fn every_mutation_notifies_subscribers() {
        let pizza = example_product("Pizza Margherita", Decimal::new(1299, 2));

        let mut cart = Cart::new();
        let mut observer = cart.subscribe();
        assert!(!observer.has_changed().unwrap());

        cart.add_item(&pizza);
        assert!(observer.has_changed().unwrap());
        assert_eq!(observer.borrow_and_update().items.len(), 1);

        cart.update_quantity(pizza.id, 3);
        assert!(observer.has_changed().unwrap());
        assert_eq!(observer.borrow_and_update().items[0].quantity, 3);

        cart.remove_item(pizza.id);
        assert!(observer.has_changed().unwrap());
        assert!(observer.borrow_and_update().items.is_empty());

        cart.clear();
        assert!(observer.has_changed().unwrap());
        assert_eq!(*observer.borrow_and_update(), CartState::default());
    }

    #[test]
    fn late_subscribers_see_the_current_state() {
        let pizza = example_product("Pizza Margherita", Decimal::new(1299, 2));

        let mut cart = Cart::new();
        cart.add_item(&pizza);

        let observer = cart.subscribe();
        assert_eq!(observer.borrow().items.len(), 1);
    }
}
