pub mod cart;
pub mod catalog;
pub mod helpers;
pub mod ids;
pub mod orders;
