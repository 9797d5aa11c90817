//! Property tests for the entity matchers.

use models::models::{customer::Customer, order::Order, worker::Worker};
use proptest::prelude::*;
use services::services::search::{filter_customers, filter_orders, filter_workers};

// ASCII-only text keeps upper/lower round-trips exact, so the
// case-insensitivity property is well-defined.
const TEXT: &str = "[a-zA-Z0-9 @.()+*-]{0,16}";
const QUERY: &str = "[ a-zA-Z0-9@.()+*-]{0,12}";

fn arb_order() -> impl Strategy<Value = Order> {
    (TEXT, TEXT, TEXT, proptest::option::of(TEXT)).prop_map(
        |(id, customer_name, status, worker_name)| Order {
            id,
            customer_name,
            status,
            worker_name,
        },
    )
}

fn arb_customer() -> impl Strategy<Value = Customer> {
    (TEXT, TEXT, TEXT, TEXT).prop_map(|(id, name, email, phone)| Customer {
        id,
        name,
        email,
        phone,
    })
}

fn arb_worker() -> impl Strategy<Value = Worker> {
    (TEXT, TEXT, TEXT, TEXT, TEXT).prop_map(|(id, name, email, phone, specialization)| Worker {
        id,
        name,
        email,
        phone,
        specialization,
    })
}

fn contains(field: &str, needle: &str) -> bool {
    field.to_lowercase().contains(needle)
}

/// Oracle for the order field list: id, customer name, status, and the
/// worker name when assigned.
fn order_should_match(order: &Order, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    needle.is_empty()
        || contains(&order.id, &needle)
        || contains(&order.customer_name, &needle)
        || contains(&order.status, &needle)
        || order
            .worker_name
            .as_deref()
            .is_some_and(|w| contains(w, &needle))
}

/// `filtered` preserves the relative order of `records`.
fn is_stable_subsequence(filtered: &[Order], records: &[Order]) -> bool {
    let mut rest = records.iter();
    filtered.iter().all(|f| rest.any(|r| r == f))
}

proptest! {
    #[test]
    fn filtered_orders_are_a_stable_subset(
        orders in proptest::collection::vec(arb_order(), 0..24),
        query in QUERY,
    ) {
        let filtered = filter_orders(&query, &orders);
        prop_assert!(filtered.len() <= orders.len());
        prop_assert!(is_stable_subsequence(&filtered, &orders));
    }

    #[test]
    fn empty_query_returns_everything(
        orders in proptest::collection::vec(arb_order(), 0..24),
        padding in "[ ]{0,6}",
    ) {
        prop_assert_eq!(filter_orders(&padding, &orders), orders);
    }

    #[test]
    fn order_matches_iff_some_field_contains_query(
        order in arb_order(),
        query in QUERY,
    ) {
        let hit = !filter_orders(&query, std::slice::from_ref(&order)).is_empty();
        prop_assert_eq!(hit, order_should_match(&order, &query));
    }

    #[test]
    fn matching_is_case_insensitive(
        orders in proptest::collection::vec(arb_order(), 0..24),
        query in QUERY,
    ) {
        let base = filter_orders(&query, &orders);
        prop_assert_eq!(&base, &filter_orders(&query.to_uppercase(), &orders));
        prop_assert_eq!(&base, &filter_orders(&query.to_lowercase(), &orders));
    }

    #[test]
    fn filtered_customers_are_a_subset(
        customers in proptest::collection::vec(arb_customer(), 0..24),
        query in QUERY,
    ) {
        let filtered = filter_customers(&query, &customers);
        prop_assert!(filtered.iter().all(|c| customers.contains(c)));
    }

    #[test]
    fn every_customer_field_participates_in_the_or(
        customer in arb_customer(),
    ) {
        for field in [
            &customer.id,
            &customer.name,
            &customer.email,
            &customer.phone,
        ] {
            if field.trim().is_empty() {
                continue;
            }
            prop_assert_eq!(
                filter_customers(field, std::slice::from_ref(&customer)).len(),
                1
            );
        }
    }

    #[test]
    fn filtered_workers_are_a_subset(
        workers in proptest::collection::vec(arb_worker(), 0..24),
        query in QUERY,
    ) {
        let filtered = filter_workers(&query, &workers);
        prop_assert!(filtered.iter().all(|w| workers.contains(w)));
    }

    #[test]
    fn unassigned_worker_field_never_panics(
        mut order in arb_order(),
        query in QUERY,
    ) {
        order.worker_name = None;
        // Must degrade to "no match on that field", never an error.
        let _ = filter_orders(&query, std::slice::from_ref(&order));
    }
}
