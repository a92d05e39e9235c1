//! Product records and the validation applied before they reach the store.

use jiff::Timestamp;
use rust_decimal::Decimal;

use crate::domain::ids::ProductId;

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub unit_price: Decimal,
    pub stock: u32,
    pub created_at: Timestamp,
    pub updated_at: Option<Timestamp>,
}

/// Input for a catalog create or update. Both paths run the same checks:
/// name and description must survive trimming, the price must be positive.
/// Stock cannot go negative by construction.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub unit_price: Decimal,
    pub stock: u32,
}

impl ProductDraft {
    /// Trims the text fields and checks the catalog rules, returning the
    /// draft that should actually be stored.
    pub fn validate(self) -> Result<ProductDraft, CatalogError> {
        let name = self.name.trim().to_owned();
        if name.is_empty() {
            return Err(CatalogError::NameRequired);
        }

        let description = self.description.trim().to_owned();
        if description.is_empty() {
            return Err(CatalogError::DescriptionRequired);
        }

        if self.unit_price <= Decimal::ZERO {
            return Err(CatalogError::PriceNotPositive);
        }

        Ok(ProductDraft {
            name,
            description,
            ..self
        })
    }
}

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum CatalogError {
    #[error("A product name is required.")]
    NameRequired,
    #[error("A product description is required.")]
    DescriptionRequired,
    #[error("The product price must be greater than zero.")]
    PriceNotPositive,
}

//-------------------------- Tests -------------------------------
