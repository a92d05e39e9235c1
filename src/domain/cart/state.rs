//! Cart state and the reducer that advances it.
//!
//! The cart is an owned, in-memory value. Every transition goes through
//! [`reduce`], which never mutates its input and recomputes the total from
//! the full item sequence on the way out.

use rust_decimal::Decimal;

use crate::domain::ids::ProductId;

/// One product placed in the cart. The product id doubles as the line key:
/// a cart never holds two lines for the same product.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LineItem {
    pub product_id: ProductId,
    pub name: String,
    pub unit_price: Decimal,
    pub quantity: u32,
}

impl LineItem {
    pub fn subtotal(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}

/// Line items in first-add order plus the derived total.
///
/// Invariants, re-established by every [`reduce`] call:
/// - `total` equals the sum of the line subtotals,
/// - every line has `quantity >= 1`,
/// - product ids are unique across lines.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CartState {
    pub items: Vec<LineItem>,
    pub total: Decimal,
}

impl CartState {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CartAction {
    AddItem {
        product_id: ProductId,
        name: String,
        unit_price: Decimal,
    },
    RemoveItem {
        product_id: ProductId,
    },
    UpdateQuantity {
        product_id: ProductId,
        quantity: i32,
    },
    ClearCart,
}

/// Computes the next cart state. Pure and total: no failure modes, unknown
/// ids fall through as no-ops, and a quantity driven to zero or below
/// removes the line instead of leaving it behind.
pub fn reduce(state: &CartState, action: CartAction) -> CartState {
    let items = match action {
        CartAction::AddItem {
            product_id,
            name,
            unit_price,
        } => {
            let mut items = state.items.clone();
            match items.iter_mut().find(|item| item.product_id == product_id) {
                // Merging leaves the existing name and price untouched.
                Some(item) => item.quantity += 1,
                None => items.push(LineItem {
                    product_id,
                    name,
                    unit_price,
                    quantity: 1,
                }),
            }
            items
        }
        CartAction::RemoveItem { product_id } => state
            .items
            .iter()
            .filter(|item| item.product_id != product_id)
            .cloned()
            .collect(),
        CartAction::UpdateQuantity {
            product_id,
            quantity,
        } => state
            .items
            .iter()
            .map(|item| {
                if item.product_id == product_id {
                    LineItem {
                        quantity: quantity.max(0) as u32,
                        ..item.clone()
                    }
                } else {
                    item.clone()
                }
            })
            .filter(|item| item.quantity > 0)
            .collect(),
        CartAction::ClearCart => Vec::new(),
    };

    let total = total_of(&items);
    CartState { items, total }
}

fn total_of(items: &[LineItem]) -> Decimal {
    items.iter().map(LineItem::subtotal).sum()
}

//-------------------------- Tests -------------------------------
