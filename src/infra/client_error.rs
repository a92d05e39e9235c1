use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    domain::{cart::CartError, catalog::CatalogError},
    gateway::GatewayError,
};

#[derive(Debug)]
pub enum ClientError {
    Cart(CartError),
    Catalog(CatalogError),
    Gateway(GatewayError),
    Payload(String),
    Internal(anyhow::Error),
}

impl IntoResponse for ClientError {
    fn into_response(self) -> Response {
        #[derive(serde::Serialize)]
        struct ErrorResponse {
            message: String,
        }

        let (status, message) = match self {
            ClientError::Cart(cart_error) => (StatusCode::BAD_REQUEST, cart_error.to_string()),
            ClientError::Catalog(catalog_error) => {
                (StatusCode::BAD_REQUEST, catalog_error.to_string())
            }
            ClientError::Gateway(gateway_error) => match gateway_error {
                GatewayError::NotFound { .. } => {
                    (StatusCode::NOT_FOUND, gateway_error.to_string())
                }
                _ => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Gateway problem. Please ask your system administrator to check the logs."
                        .to_owned(),
                ),
            },
            ClientError::Payload(message) => (StatusCode::BAD_REQUEST, message),
            ClientError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Please ask your system administrator to check the logs.".to_owned(),
            ),
        };

        (status, Json(ErrorResponse { message })).into_response()
    }
}

impl From<CartError> for ClientError {
    fn from(cart_error: CartError) -> Self {
        ClientError::Cart(cart_error)
    }
}

impl From<CatalogError> for ClientError {
    fn from(catalog_error: CatalogError) -> Self {
        ClientError::Catalog(catalog_error)
    }
}

impl From<GatewayError> for ClientError {
    fn from(gateway_error: GatewayError) -> Self {
        ClientError::Gateway(gateway_error)
    }
}

impl From<anyhow::Error> for ClientError {
    fn from(value: anyhow::Error) -> Self {
        ClientError::Internal(value)
    }
}
