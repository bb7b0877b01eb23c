//! Customer name matching for autocomplete

use crate::entities::Customer;

/// Return every customer whose name contains `query` as a case-insensitive
/// substring, preserving the order of the input collection.
///
/// An empty query matches all customers, so the consumer can show the full
/// list before the user starts typing. Selection and presentation are the
/// consumer's job; this function only filters.
pub fn matching_customers<'a, I>(query: &str, customers: I) -> Vec<&'a Customer>
where
    I: IntoIterator<Item = &'a Customer>,
{
    let needle = query.to_lowercase();
    customers
        .into_iter()
        .filter(|customer| customer.name.to_lowercase().contains(&needle))
        .collect()
}
