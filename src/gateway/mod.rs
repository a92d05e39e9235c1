//! The remote-store seam.
//!
//! Products and orders live in an external document store. The rest of the
//! application only ever sees this trait: a handful of CRUD calls with the
//! ordering the screens expect. Two implementations exist: PostgreSQL for
//! production and an in-memory store that doubles as the contract's
//! reference in tests.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{
    catalog::{Product, ProductDraft},
    ids::{OrderId, ProductId},
    orders::{Order, OrderSnapshot, OrderStatus, UnknownOrderStatus},
};

mod memory;
mod postgres;

pub use memory::MemoryGateway;
pub use postgres::PgGateway;

pub type SharedGateway = Arc<dyn Gateway>;

#[async_trait]
pub trait Gateway: Send + Sync {
    /// All products, ordered by name.
    async fn list_products(&self) -> Result<Vec<Product>, GatewayError>;

    /// Stores a new product and returns its assigned id.
    async fn create_product(&self, draft: ProductDraft) -> Result<ProductId, GatewayError>;

    async fn update_product(
        &self,
        product_id: ProductId,
        draft: ProductDraft,
    ) -> Result<(), GatewayError>;

    /// Removes a product. Deleting an id that is already gone is not an
    /// error, matching document-store delete semantics.
    async fn delete_product(&self, product_id: ProductId) -> Result<(), GatewayError>;

    /// All orders, newest first.
    async fn list_orders(&self) -> Result<Vec<Order>, GatewayError>;

    /// Orders with the given status, newest first.
    async fn list_orders_by_status(
        &self,
        status: OrderStatus,
    ) -> Result<Vec<Order>, GatewayError>;

    /// Materializes an order from a cart snapshot: assigns the id, the
    /// `pending` status and the creation timestamp.
    async fn create_order(&self, snapshot: OrderSnapshot) -> Result<OrderId, GatewayError>;

    async fn update_order_status(
        &self,
        order_id: OrderId,
        status: OrderStatus,
    ) -> Result<(), GatewayError>;
}

#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("{collection} {id} not found.")]
    NotFound {
        collection: &'static str,
        id: String,
    },
    #[error("Database problem: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Stored document could not be decoded: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error(transparent)]
    Status(#[from] UnknownOrderStatus),
}
