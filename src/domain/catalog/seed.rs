//! Example-data bootstrap for development environments.

use rust_decimal::Decimal;
use tracing::info;

use crate::{
    domain::catalog::ProductDraft,
    gateway::{Gateway, GatewayError},
};

/// Inserts the example menu into an empty catalog. A catalog that already
/// has products is left alone, so the flag is safe to pass on every start.
pub async fn seed_example_products(gateway: &dyn Gateway) -> Result<(), GatewayError> {
    if !gateway.list_products().await?.is_empty() {
        info!("Catalog already has products. Skipping example data.");
        return Ok(());
    }

    for draft in example_menu() {
        gateway.create_product(draft).await?;
    }
    info!("Example products added to the catalog.");
    Ok(())
}

fn example_menu() -> Vec<ProductDraft> {
    let dish = |name: &str, description: &str, cents: i64, stock: u32| ProductDraft {
        name: name.to_owned(),
        description: description.to_owned(),
        unit_price: Decimal::new(cents, 2),
        stock,
    };

    vec![
        dish(
            "Pizza Margherita",
            "Classic pizza with tomato, mozzarella and fresh basil",
            1299,
            50,
        ),
        dish(
            "Classic Burger",
            "Beef burger with lettuce, tomato and onion",
            899,
            30,
        ),
        dish(
            "Caesar Salad",
            "Fresh salad with chicken, croutons and caesar dressing",
            750,
            25,
        ),
        dish(
            "Pasta Carbonara",
            "Pasta with carbonara sauce, bacon and parmesan",
            1150,
            40,
        ),
        dish(
            "Mexican Tacos",
            "Three tacos with beef, fresh vegetables and hot salsa",
            999,
            35,
        ),
    ]
}

//-------------------------- Tests -------------------------------
