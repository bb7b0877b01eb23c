//! Core module containing the entity contract, derivations, and errors

pub mod entity;
pub mod error;
pub mod matcher;
pub mod pricing;
pub mod sanitize;

pub use entity::Entity;
pub use error::WorkflowError;
pub use matcher::matching_customers;
