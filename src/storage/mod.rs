//! In-memory storage for the session's collections

pub mod in_memory;

pub use in_memory::{CustomerStore, InMemoryStore, OrderStore};
