//! PostgreSQL gateway.
//!
//! Products live in columns; order lines are stored as a JSONB document, the
//! relational rendition of the document store the app was written against.

use async_trait::async_trait;
use jiff::Timestamp;
use jiff_sqlx::ToSqlx;
use sqlx::{PgPool, Row, postgres::PgRow};

use crate::domain::{
    catalog::{Product, ProductDraft},
    ids::{OrderId, ProductId},
    orders::{Order, OrderSnapshot, OrderStatus},
};

use super::{Gateway, GatewayError};

#[derive(Clone)]
pub struct PgGateway {
    pool: PgPool,
}

impl PgGateway {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Gateway for PgGateway {
    async fn list_products(&self) -> Result<Vec<Product>, GatewayError> {
        let rows = sqlx::query(
            "SELECT id, name, description, unit_price, stock, created_at, updated_at \
             FROM products ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(product_from_row).collect()
    }

    async fn create_product(&self, draft: ProductDraft) -> Result<ProductId, GatewayError> {
        let product_id = ProductId::new();
        sqlx::query(
            "INSERT INTO products (id, name, description, unit_price, stock, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(product_id)
        .bind(&draft.name)
        .bind(&draft.description)
        .bind(draft.unit_price)
        .bind(draft.stock as i32)
        .bind(Timestamp::now().to_sqlx())
        .execute(&self.pool)
        .await?;

        Ok(product_id)
    }

    async fn update_product(
        &self,
        product_id: ProductId,
        draft: ProductDraft,
    ) -> Result<(), GatewayError> {
        let result = sqlx::query(
            "UPDATE products \
             SET name = $2, description = $3, unit_price = $4, stock = $5, updated_at = $6 \
             WHERE id = $1",
        )
        .bind(product_id)
        .bind(&draft.name)
        .bind(&draft.description)
        .bind(draft.unit_price)
        .bind(draft.stock as i32)
        .bind(Timestamp::now().to_sqlx())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(GatewayError::NotFound {
                collection: "Product",
                id: product_id.to_string(),
            });
        }
        Ok(())
    }

    async fn delete_product(&self, product_id: ProductId) -> Result<(), GatewayError> {
        sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(product_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn list_orders(&self) -> Result<Vec<Order>, GatewayError> {
        let rows = sqlx::query(
            "SELECT id, lines, total, customer_name, status, created_at, updated_at \
             FROM orders ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(order_from_row).collect()
    }

    async fn list_orders_by_status(
        &self,
        status: OrderStatus,
    ) -> Result<Vec<Order>, GatewayError> {
        let rows = sqlx::query(
            "SELECT id, lines, total, customer_name, status, created_at, updated_at \
             FROM orders WHERE status = $1 ORDER BY created_at DESC",
        )
        .bind(status.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(order_from_row).collect()
    }

    async fn create_order(&self, snapshot: OrderSnapshot) -> Result<OrderId, GatewayError> {
        let order_id = OrderId::new();
        sqlx::query(
            "INSERT INTO orders (id, lines, total, customer_name, status, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(order_id)
        .bind(serde_json::to_value(&snapshot.lines)?)
        .bind(snapshot.total)
        .bind(&snapshot.customer_name)
        .bind(OrderStatus::Pending.to_string())
        .bind(Timestamp::now().to_sqlx())
        .execute(&self.pool)
        .await?;

        Ok(order_id)
    }

    async fn update_order_status(
        &self,
        order_id: OrderId,
        status: OrderStatus,
    ) -> Result<(), GatewayError> {
        let result = sqlx::query(
            "UPDATE orders SET status = $2, updated_at = $3 WHERE id = $1",
        )
        .bind(order_id)
        .bind(status.to_string())
        .bind(Timestamp::now().to_sqlx())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(GatewayError::NotFound {
                collection: "Order",
                id: order_id.to_string(),
            });
        }
        Ok(())
    }
}

fn product_from_row(row: &PgRow) -> Result<Product, GatewayError> {
    Ok(Product {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        description: row.try_get("description")?,
        unit_price: row.try_get("unit_price")?,
        stock: u32::try_from(row.try_get::<i32, _>("stock")?).unwrap_or(0),
        created_at: row
            .try_get::<jiff_sqlx::Timestamp, _>("created_at")?
            .to_jiff(),
        updated_at: row
            .try_get::<Option<jiff_sqlx::Timestamp>, _>("updated_at")?
            .map(jiff_sqlx::Timestamp::to_jiff),
    })
}

fn order_from_row(row: &PgRow) -> Result<Order, GatewayError> {
    Ok(Order {
        id: row.try_get("id")?,
        lines: serde_json::from_value(row.try_get("lines")?)?,
        total: row.try_get("total")?,
        customer_name: row.try_get("customer_name")?,
        status: row.try_get::<String, _>("status")?.parse()?,
        created_at: row
            .try_get::<jiff_sqlx::Timestamp, _>("created_at")?
            .to_jiff(),
        updated_at: row
            .try_get::<Option<jiff_sqlx::Timestamp>, _>("updated_at")?
            .map(jiff_sqlx::Timestamp::to_jiff),
    })
}
