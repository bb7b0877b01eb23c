//! Concrete entity types for the customer/order domain

pub mod customer;
pub mod order;

pub use customer::{Customer, CustomerPatch};
pub use order::{CustomerRef, CustomerSnapshot, Item, Order, OrderPatch, OrderStatus, Size};
