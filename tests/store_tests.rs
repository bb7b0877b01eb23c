//! Store contract tests: insertion order, partial updates, timestamps, and
//! customer linkage lookups.

mod fixtures;

use fixtures::*;
use uniforms::prelude::*;

#[test]
fn customers_iterate_most_recent_first() {
    let mut store = CustomerStore::new();
    store.add(customer("First"));
    store.add(customer("Second"));
    store.add(customer("Third"));

    let names: Vec<&str> = store.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["Third", "Second", "First"]);
}

#[test]
fn customer_patch_arrives_as_partial_json() {
    let mut store = CustomerStore::new();
    let record = customer("Ana Silva");
    let id = record.id;
    store.add(record);

    // The form layer submits only the fields the user touched.
    let patch: CustomerPatch =
        serde_json::from_str(r#"{"phone": "+55 11 91234-5678", "notes": "VIP"}"#).unwrap();
    store.update(id, patch);

    let updated = store.get(id).unwrap();
    assert_eq!(updated.phone, "+55 11 91234-5678");
    assert_eq!(updated.notes, "VIP");
    assert_eq!(updated.name, "Ana Silva");
}

#[test]
fn empty_customer_patch_preserves_every_field() {
    let mut store = CustomerStore::new();
    let record = customer("Ana Silva");
    let id = record.id;
    let before = record.clone();
    store.add(record);

    store.update(id, CustomerPatch::default());

    assert_eq!(store.get(id).unwrap(), &before);
}

#[test]
fn order_update_always_advances_updated_at() {
    let mut store = OrderStore::new();
    let order = walk_in_order("Carlos", vec![item(10.0, 1)], 0.0);
    let id = order.id;
    store.add(order);
    let first = store.get(id).unwrap().updated_at;

    // Even an empty patch stamps the revision timestamp.
    store.update(id, OrderPatch::default());
    let second = store.get(id).unwrap().updated_at;
    assert!(second >= first);

    store.update(id, OrderPatch::default());
    assert!(store.get(id).unwrap().updated_at >= second);
}

#[test]
fn order_store_recomputes_totals_and_ignores_stale_values() {
    let mut store = OrderStore::new();
    let mut order = walk_in_order("Carlos", vec![item(10.0, 2)], 5.0);
    let id = order.id;

    // A confused caller hands in nonsense derived values; the store owns them.
    order.total = 1.0;
    order.remaining_amount = -3.0;
    store.add(order);

    let stored = store.get(id).unwrap();
    assert_eq!(stored.total, 20.0);
    assert_eq!(stored.remaining_amount, 15.0);

    // Patching the items re-derives both amounts.
    store.update(
        id,
        OrderPatch {
            items: Some(vec![item(10.0, 2), item(30.0, 1)]),
            ..OrderPatch::default()
        },
    );
    let stored = store.get(id).unwrap();
    assert_eq!(stored.total, 50.0);
    assert_eq!(stored.remaining_amount, 45.0);
}

#[test]
fn orders_by_customer_follow_store_order() {
    let mut session = Session::new();
    let ana = customer("Ana Silva");
    let ana_id = ana.id;
    let carlos = customer("Carlos");
    let carlos_id = carlos.id;

    let first = order_for(&ana, vec![item(10.0, 1)], 0.0);
    let second = order_for(&carlos, vec![item(20.0, 1)], 0.0);
    let third = order_for(&ana, vec![item(30.0, 1)], 0.0);
    let first_id = first.id;
    let third_id = third.id;

    session.customers.add(ana);
    session.customers.add(carlos);
    session.orders.add(first);
    session.orders.add(second);
    session.orders.add(third);

    let ana_orders = session.orders.by_customer(ana_id);
    let ids: Vec<Uuid> = ana_orders.iter().map(|o| o.id).collect();
    assert_eq!(ids, [third_id, first_id]);

    assert_eq!(session.orders.by_customer(carlos_id).len(), 1);
}

#[test]
fn customer_with_no_orders_yields_empty_sequence() {
    let mut session = Session::new();
    let ana = customer("Ana Silva");
    let ana_id = ana.id;
    session.customers.add(ana);
    session.orders.add(walk_in_order("Carlos", vec![item(5.0, 1)], 0.0));

    assert!(session.orders.by_customer(ana_id).is_empty());
}

#[test]
fn snapshot_linked_orders_have_no_foreign_key() {
    let mut store = OrderStore::new();
    let order = walk_in_order("Carlos", vec![item(5.0, 1)], 0.0);
    let id = order.id;
    store.add(order);

    assert_eq!(store.get(id).unwrap().customer.customer_id(), None);
}

#[test]
fn order_snapshot_does_not_follow_customer_edits() {
    let mut session = Session::new();
    let ana = customer("Ana Silva");
    let ana_id = ana.id;
    let order = order_for(&ana, vec![item(10.0, 1)], 0.0);
    let order_id = order.id;
    session.customers.add(ana);
    session.orders.add(order);

    // The customer record changes after the order was placed.
    session.customers.update(
        ana_id,
        CustomerPatch {
            phone: Some("+55 11 90000-1111".to_string()),
            ..CustomerPatch::default()
        },
    );

    // The order still shows the contact details as of order time.
    let snapshot = session
        .orders
        .get(order_id)
        .unwrap()
        .customer
        .snapshot()
        .unwrap();
    assert_eq!(snapshot.phone, "+55 11 98888-7777");
    assert_eq!(
        session.customers.get(ana_id).unwrap().phone,
        "+55 11 90000-1111"
    );
}

#[test]
fn generic_patch_accepts_any_status_value() {
    let mut store = OrderStore::new();
    let order = walk_in_order("Carlos", vec![item(5.0, 1)], 0.0);
    let id = order.id;
    store.add(order);

    store.update(
        id,
        OrderPatch {
            status: Some(OrderStatus::Cancelled),
            ..OrderPatch::default()
        },
    );

    assert_eq!(store.get(id).unwrap().status, OrderStatus::Cancelled);
}
