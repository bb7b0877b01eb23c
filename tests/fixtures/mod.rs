//! Shared fixtures for the integration tests
//!
//! Provides ready-made customers, line items, and orders so each test file
//! can focus on the contract it exercises.

#![allow(dead_code)]

use uniforms::prelude::*;

/// A customer with every required field populated.
pub fn customer(name: &str) -> Customer {
    Customer::new(
        name.to_string(),
        format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        "+55 11 98888-7777".to_string(),
        "Av. Paulista, 1000 - São Paulo".to_string(),
        String::new(),
    )
}

/// A line item with the given price and quantity.
pub fn item(price: f64, quantity: u32) -> Item {
    Item {
        description: "Polo shirt".to_string(),
        quantity,
        size: Size::M,
        color: "Blue".to_string(),
        details: String::new(),
        price,
    }
}

/// An order linked to a stored customer by foreign key, with the
/// customer's contact fields captured as a display snapshot.
pub fn order_for(customer: &Customer, items: Vec<Item>, down_payment: f64) -> Order {
    Order::new(
        CustomerRef::Reference {
            customer_id: customer.id,
            snapshot: Some(CustomerSnapshot::from(customer)),
        },
        items,
        down_payment,
        String::new(),
    )
}

/// An order for a walk-in contact, linked by embedded snapshot only.
pub fn walk_in_order(name: &str, items: Vec<Item>, down_payment: f64) -> Order {
    Order::new(
        CustomerRef::Snapshot(CustomerSnapshot {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
            phone: "+55 21 97777-1111".to_string(),
        }),
        items,
        down_payment,
        String::new(),
    )
}
