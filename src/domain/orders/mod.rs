mod list_orders;
mod order;
mod update_status;

pub use list_orders::{ListOrdersQuery, list_orders_endpoint};
pub use order::{Order, OrderLine, OrderSnapshot, OrderStatus, UnknownOrderStatus};
pub use update_status::{UpdateStatusPayload, update_status_endpoint};
