use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A shop customer record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
}
