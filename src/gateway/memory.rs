//! In-memory gateway.
//!
//! Mutex-guarded maps with the same ordering guarantees as the database
//! implementation. Tests run against this; it is also what a future remote
//! document store would have to behave like.

use std::collections::HashMap;

use async_trait::async_trait;
use jiff::Timestamp;
use tokio::sync::Mutex;

use crate::domain::{
    catalog::{Product, ProductDraft},
    ids::{OrderId, ProductId},
    orders::{Order, OrderSnapshot, OrderStatus},
};

use super::{Gateway, GatewayError};

#[derive(Default)]
pub struct MemoryGateway {
    products: Mutex<HashMap<ProductId, Product>>,
    orders: Mutex<HashMap<OrderId, Order>>,
}

impl MemoryGateway {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Gateway for MemoryGateway {
    async fn list_products(&self) -> Result<Vec<Product>, GatewayError> {
        let mut products: Vec<_> = self.products.lock().await.values().cloned().collect();
        products.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(products)
    }

    async fn create_product(&self, draft: ProductDraft) -> Result<ProductId, GatewayError> {
        let id = ProductId::new();
        let product = Product {
            id,
            name: draft.name,
            description: draft.description,
            unit_price: draft.unit_price,
            stock: draft.stock,
            created_at: Timestamp::now(),
            updated_at: None,
        };
        self.products.lock().await.insert(id, product);
        Ok(id)
    }

    async fn update_product(
        &self,
        product_id: ProductId,
        draft: ProductDraft,
    ) -> Result<(), GatewayError> {
        let mut products = self.products.lock().await;
        let product = products
            .get_mut(&product_id)
            .ok_or_else(|| GatewayError::NotFound {
                collection: "Product",
                id: product_id.to_string(),
            })?;

        product.name = draft.name;
        product.description = draft.description;
        product.unit_price = draft.unit_price;
        product.stock = draft.stock;
        product.updated_at = Some(Timestamp::now());
        Ok(())
    }

    async fn delete_product(&self, product_id: ProductId) -> Result<(), GatewayError> {
        self.products.lock().await.remove(&product_id);
        Ok(())
    }

    async fn list_orders(&self) -> Result<Vec<Order>, GatewayError> {
        let mut orders: Vec<_> = self.orders.lock().await.values().cloned().collect();
        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(orders)
    }

    async fn list_orders_by_status(
        &self,
        status: OrderStatus,
    ) -> Result<Vec<Order>, GatewayError> {
        let mut orders: Vec<_> = self
            .orders
            .lock()
            .await
            .values()
            .filter(|order| order.status == status)
            .cloned()
            .collect();
        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(orders)
    }

    async fn create_order(&self, snapshot: OrderSnapshot) -> Result<OrderId, GatewayError> {
        let id = OrderId::new();
        let order = Order {
            id,
            lines: snapshot.lines,
            total: snapshot.total,
            customer_name: snapshot.customer_name,
            status: OrderStatus::Pending,
            created_at: Timestamp::now(),
            updated_at: None,
        };
        self.orders.lock().await.insert(id, order);
        Ok(id)
    }

    async fn update_order_status(
        &self,
        order_id: OrderId,
        status: OrderStatus,
    ) -> Result<(), GatewayError> {
        let mut orders = self.orders.lock().await;
        let order = orders
            .get_mut(&order_id)
            .ok_or_else(|| GatewayError::NotFound {
                collection: "Order",
                id: order_id.to_string(),
            })?;

        order.status = status;
        order.updated_at = Some(Timestamp::now());
        Ok(())
    }
}

//-------------------------- Tests -------------------------------
