//! Order records as the gateway materializes them from a cart snapshot.

use std::str::FromStr;

use jiff::Timestamp;
use rust_decimal::Decimal;

use crate::domain::{
    cart::state::CartState,
    ids::{OrderId, ProductId},
};

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub lines: Vec<OrderLine>,
    pub total: Decimal,
    pub customer_name: String,
    pub status: OrderStatus,
    pub created_at: Timestamp,
    pub updated_at: Option<Timestamp>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct OrderLine {
    pub product_id: ProductId,
    pub name: String,
    pub unit_price: Decimal,
    pub quantity: u32,
    pub subtotal: Decimal,
}

/// What the caller hands to the gateway. Id, status and creation timestamp
/// are assigned on the other side of that call.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct OrderSnapshot {
    pub lines: Vec<OrderLine>,
    pub total: Decimal,
    pub customer_name: String,
}

impl OrderSnapshot {
    pub fn from_cart(state: &CartState, customer_name: &str) -> Self {
        let lines = state
            .items
            .iter()
            .map(|item| OrderLine {
                product_id: item.product_id,
                name: item.name.clone(),
                unit_price: item.unit_price,
                quantity: item.quantity,
                subtotal: item.subtotal(),
            })
            .collect();

        Self {
            lines,
            total: state.total,
            customer_name: customer_name.trim().to_owned(),
        }
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    serde::Serialize,
    serde::Deserialize,
    strum_macros::Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    InPreparation,
    Completed,
    Cancelled,
}

impl FromStr for OrderStatus {
    type Err = UnknownOrderStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(OrderStatus::Pending),
            "in_preparation" => Ok(OrderStatus::InPreparation),
            "completed" => Ok(OrderStatus::Completed),
            "cancelled" => Ok(OrderStatus::Cancelled),
            other => Err(UnknownOrderStatus(other.to_owned())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown order status: {0}")]
pub struct UnknownOrderStatus(pub String);

//-------------------------- Tests -------------------------------
