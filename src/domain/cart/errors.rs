#[derive(Debug, PartialEq, thiserror::Error)]
pub enum CartError {
    #[error("Cannot place an order from an empty cart.")]
    EmptyCart,
    #[error("A customer name is required to place an order.")]
    CustomerNameRequired,
}
