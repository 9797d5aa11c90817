//! Free-text search across dashboard entity lists.
//!
//! A single query string is matched against every record of a collection;
//! a record passes when any of its designated fields contains the query as
//! a case-insensitive substring. Matching is literal (no pattern syntax)
//! and the filter is stable: survivors keep their original relative order.

use models::models::{customer::Customer, order::Order, worker::Worker};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::search_query::SearchQueryController;

/// Per-kind field match: does any designated field of this record contain
/// `needle` as a substring?
///
/// `needle` must already be trimmed and lower-cased; implementations
/// lower-case their own fields. Absent optional fields are simply excluded
/// from the OR.
pub trait QueryMatch {
    fn matches(&self, needle: &str) -> bool;
}

fn field_contains(field: &str, needle: &str) -> bool {
    field.to_lowercase().contains(needle)
}

impl QueryMatch for Order {
    fn matches(&self, needle: &str) -> bool {
        field_contains(&self.id, needle)
            || field_contains(&self.customer_name, needle)
            || field_contains(&self.status, needle)
            || self
                .worker_name
                .as_deref()
                .is_some_and(|worker| field_contains(worker, needle))
    }
}

impl QueryMatch for Customer {
    fn matches(&self, needle: &str) -> bool {
        field_contains(&self.id, needle)
            || field_contains(&self.name, needle)
            || field_contains(&self.email, needle)
            || field_contains(&self.phone, needle)
    }
}

impl QueryMatch for Worker {
    fn matches(&self, needle: &str) -> bool {
        field_contains(&self.id, needle)
            || field_contains(&self.name, needle)
            || field_contains(&self.email, needle)
            || field_contains(&self.phone, needle)
            || field_contains(&self.specialization, needle)
    }
}

/// Stable filter shared by all entity kinds.
///
/// A query that is empty after trimming means "no filter": every record is
/// returned in its original order.
pub fn filter_records<T: QueryMatch + Clone>(query: &str, records: &[T]) -> Vec<T> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return records.to_vec();
    }
    records
        .iter()
        .filter(|record| record.matches(&needle))
        .cloned()
        .collect()
}

/// Filter orders by id, customer name, status or assigned worker.
pub fn filter_orders(query: &str, orders: &[Order]) -> Vec<Order> {
    filter_records(query, orders)
}

/// Filter customers by id, name, email or phone.
pub fn filter_customers(query: &str, customers: &[Customer]) -> Vec<Customer> {
    filter_records(query, customers)
}

/// Filter workers by id, name, email, phone or specialization.
pub fn filter_workers(query: &str, workers: &[Worker]) -> Vec<Worker> {
    filter_records(query, workers)
}

/// Filtered views of all three dashboard collections for one query.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct SearchResults {
    pub orders: Vec<Order>,
    pub customers: Vec<Customer>,
    pub workers: Vec<Worker>,
}

/// Dashboard search: the debounced query controller plus the entity
/// matchers, bundled for the top-bar search box.
///
/// The service is cheap to clone; clones share the same committed query.
#[derive(Clone, Default)]
pub struct SearchService {
    query: SearchQueryController,
}

impl SearchService {
    pub fn new() -> Self {
        Self::default()
    }

    /// The shared query controller (keystroke input, clear button, display).
    pub fn query(&self) -> &SearchQueryController {
        &self.query
    }

    pub fn filter_orders(&self, orders: &[Order]) -> Vec<Order> {
        filter_orders(&self.query.committed(), orders)
    }

    pub fn filter_customers(&self, customers: &[Customer]) -> Vec<Customer> {
        filter_customers(&self.query.committed(), customers)
    }

    pub fn filter_workers(&self, workers: &[Worker]) -> Vec<Worker> {
        filter_workers(&self.query.committed(), workers)
    }

    /// Filter all three collections against the committed query at once.
    pub fn search_all(
        &self,
        orders: &[Order],
        customers: &[Customer],
        workers: &[Worker],
    ) -> SearchResults {
        let query = self.query.committed();
        SearchResults {
            orders: filter_orders(&query, orders),
            customers: filter_customers(&query, customers),
            workers: filter_workers(&query, workers),
        }
    }
}
