//! A full storefront session against the in-memory gateway: seed the
//! catalog, fill a cart, place the order, then work the order from the
//! admin side.

use std::sync::Arc;

use rust_decimal::Decimal;
use storefront_server::{
    domain::{
        cart::{CartRegistry, place_order},
        catalog::seed_example_products,
        ids::CartId,
        orders::OrderStatus,
    },
    gateway::{Gateway, MemoryGateway, SharedGateway},
};

#[tokio::test]
async fn a_session_can_browse_fill_a_cart_and_place_an_order() {
    let gateway: SharedGateway = Arc::new(MemoryGateway::new());
    seed_example_products(gateway.as_ref())
        .await
        .expect("example products should seed");

    let products = gateway
        .list_products()
        .await
        .expect("products should be listed");
    assert_eq!(products.len(), 5);

    let pizza = products
        .iter()
        .find(|p| p.name == "Pizza Margherita")
        .expect("the menu should have a pizza");
    let salad = products
        .iter()
        .find(|p| p.name == "Caesar Salad")
        .expect("the menu should have a salad");

    let carts = CartRegistry::new();
    let session = CartId::new();

    let cart = carts.get_or_create(session).await;
    let mut cart = cart.lock().await;
    let mut observer = cart.subscribe();

    cart.add_item(pizza);
    cart.add_item(pizza);
    cart.add_item(salad);
    cart.update_quantity(salad.id, 3);

    assert_eq!(cart.item_count(), 5);
    assert_eq!(cart.item_quantity(pizza.id), 2);
    assert_eq!(
        cart.total(),
        Decimal::new(1299, 2) * Decimal::from(2) + Decimal::new(750, 2) * Decimal::from(3)
    );
    assert!(observer.has_changed().expect("observer should be live"));
    assert_eq!(observer.borrow_and_update().items.len(), 2);

    let order_id = place_order(&mut cart, "Ada Lovelace", gateway.as_ref())
        .await
        .expect("the order should be placed");

    // The confirmed order empties the cart, and observers see it happen.
    assert!(cart.state().is_empty());
    assert_eq!(cart.item_count(), 0);
    assert!(observer.borrow_and_update().items.is_empty());

    let orders = gateway.list_orders().await.expect("orders should be listed");
    assert_eq!(orders.len(), 1);
    let order = &orders[0];
    assert_eq!(order.id, order_id);
    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.customer_name, "Ada Lovelace");
    assert_eq!(order.lines.len(), 2);
    assert_eq!(order.total, Decimal::new(4848, 2));

    // Kitchen-side: move the order along and check the status filter.
    gateway
        .update_order_status(order_id, OrderStatus::InPreparation)
        .await
        .expect("the status should update");

    let in_preparation = gateway
        .list_orders_by_status(OrderStatus::InPreparation)
        .await
        .expect("orders should be listed");
    assert_eq!(in_preparation.len(), 1);
    assert!(
        gateway
            .list_orders_by_status(OrderStatus::Pending)
            .await
            .expect("orders should be listed")
            .is_empty()
    );
}

#[tokio::test]
async fn a_failed_placement_keeps_the_session_retryable() {
    let gateway: SharedGateway = Arc::new(MemoryGateway::new());
    seed_example_products(gateway.as_ref())
        .await
        .expect("example products should seed");

    let products = gateway
        .list_products()
        .await
        .expect("products should be listed");

    let carts = CartRegistry::new();
    let session = CartId::new();
    let cart = carts.get_or_create(session).await;
    let mut cart = cart.lock().await;
    cart.add_item(&products[0]);

    // First attempt: the customer forgot their name.
    let result = place_order(&mut cart, "", gateway.as_ref()).await;
    assert!(result.is_err());
    assert_eq!(cart.item_count(), 1);
    assert!(
        gateway
            .list_orders()
            .await
            .expect("orders should be listed")
            .is_empty()
    );

    // Second attempt with the same cart succeeds.
    place_order(&mut cart, "Grace Hopper", gateway.as_ref())
        .await
        .expect("the retry should succeed");
    assert!(cart.state().is_empty());
    assert_eq!(
        gateway
            .list_orders()
            .await
            .expect("orders should be listed")
            .len(),
        1
    );
}
