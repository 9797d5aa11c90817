use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A tailoring order as shown on the dashboard lists.
///
/// Records are supplied by the caller on every filter invocation; this
/// subsystem never creates or mutates them. `status` is an open set of
/// lifecycle labels ("Pending", "Stitching", "Ready", ...) so it stays a
/// plain string rather than a closed enum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
pub struct Order {
    pub id: String,
    pub customer_name: String,
    pub status: String,
    /// Assigned worker, absent for unassigned orders.
    #[serde(default)]
    pub worker_name: Option<String>,
}
