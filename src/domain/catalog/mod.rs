mod create_product;
mod delete_product;
mod list_products;
mod product;
mod seed;
mod update_product;

pub use create_product::create_product_endpoint;
pub use delete_product::delete_product_endpoint;
pub use list_products::list_products_endpoint;
pub use product::{CatalogError, Product, ProductDraft};
pub use seed::seed_example_products;
pub use update_product::update_product_endpoint;
