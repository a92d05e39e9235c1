//! Create Product slice

use axum::{Json, extract::State};

use crate::{
    domain::{catalog::ProductDraft, ids::ProductId},
    gateway::{Gateway, SharedGateway},
    infra::ClientError,
};

pub async fn create_product_endpoint(
    State(gateway): State<SharedGateway>,
    Json(draft): Json<ProductDraft>,
) -> Result<Json<ProductId>, ClientError> {
    let draft = draft.validate()?;
    let product_id = gateway.create_product(draft).await?;
    Ok(Json(product_id))
}

//-------------------------- Tests -------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{domain::catalog::CatalogError, gateway::MemoryGateway};
    use rust_decimal::Decimal;
    use std::sync::Arc;

    fn draft() -> ProductDraft {
        ProductDraft {
            name: "Pasta Carbonara".to_owned(),
            description: "Pasta with carbonara sauce, bacon and parmesan".to_owned(),
            unit_price: Decimal::new(1150, 2),
            stock: 40,
        }
    }

    #[tokio::test]
    async fn a_valid_draft_lands_in_the_catalog() {
        let gateway = Arc::new(MemoryGateway::new());

        let Json(product_id) =
            create_product_endpoint(State(gateway.clone() as SharedGateway), Json(draft()))
                .await
                .expect("product should be created");

        let products = gateway
            .list_products()
            .await
            .expect("products should be listed");
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id, product_id);
    }

    #[tokio::test]
    async fn an_invalid_draft_never_reaches_the_gateway() {
        let gateway = Arc::new(MemoryGateway::new());

        let result = create_product_endpoint(
            State(gateway.clone() as SharedGateway),
            Json(ProductDraft {
                unit_price: Decimal::ZERO,
                ..draft()
            }),
        )
        .await;

        assert!(matches!(
            result,
            Err(ClientError::Catalog(CatalogError::PriceNotPositive))
        ));
        assert!(
            gateway
                .list_products()
                .await
                .expect("products should be listed")
                .is_empty()
        );
    }
}
