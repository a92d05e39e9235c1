mod add_item;
mod cart_items;
mod clear_cart;
mod errors;
mod facade;
mod place_order;
mod registry;
mod remove_item;
pub mod state;
mod update_quantity;

pub use add_item::{AddItemPayload, add_item_endpoint};
pub use cart_items::{CartItemsView, cart_items_endpoint};
pub use clear_cart::clear_cart_endpoint;
pub use errors::CartError;
pub use facade::Cart;
pub use place_order::{PlaceOrderError, PlaceOrderPayload, place_order, place_order_endpoint};
pub use registry::CartRegistry;
pub use remove_item::{RemoveItemPayload, remove_item_endpoint};
pub use state::{CartAction, CartState, LineItem, reduce};
pub use update_quantity::{UpdateQuantityPayload, update_quantity_endpoint};
