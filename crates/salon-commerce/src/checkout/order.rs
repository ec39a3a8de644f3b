//! Order types.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::cart::CartLine;
use crate::ids::OrderId;
use crate::money::Money;

/// Named fields gathered from the order form.
///
/// A flat name → value mapping; a repeated name keeps the last value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerFields(BTreeMap<String, String>);

impl CustomerFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect fields; a later duplicate name replaces the earlier value.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let mut fields = Self::new();
        for (name, value) in pairs {
            fields.insert(name, value);
        }
        fields
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A submitted order.
///
/// Never stored: it is logged and echoed back to the shopper.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Order {
    pub id: OrderId,
    pub customer: CustomerFields,
    /// Cart lines as they were at submission.
    pub items: Vec<CartLine>,
    pub total: Money,
    pub placed_at: DateTime<Utc>,
}

impl Order {
    pub fn new(customer: CustomerFields, items: Vec<CartLine>, total: Money) -> Self {
        Self {
            id: OrderId::generate(),
            customer,
            items,
            total,
            placed_at: Utc::now(),
        }
    }

    /// The value of the form's `name` field.
    pub fn customer_name(&self) -> Option<&str> {
        self.customer.get("name")
    }

    /// Total units ordered.
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    /// JSON form of the order for diagnostics.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| self.id.to_string())
    }
}
