//! List Products slice

use axum::{Json, extract::State};

use crate::{domain::catalog::Product, gateway::{Gateway, SharedGateway}, infra::ClientError};

/// The storefront's product listing, ordered by name.
pub async fn list_products_endpoint(
    State(gateway): State<SharedGateway>,
) -> Result<Json<Vec<Product>>, ClientError> {
    let products = gateway.list_products().await?;
    Ok(Json(products))
}

//-------------------------- Tests -------------------------------
