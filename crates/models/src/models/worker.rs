use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A shop worker record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
pub struct Worker {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    /// What the worker specializes in (e.g. "Shirts", "Suits").
    pub specialization: String,
}
