use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::{Size, ToppingId};

/// Body of `POST <order-intake-endpoint>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub full_name: String,
    pub size: Size,
    #[serde(default)]
    pub toppings: BTreeSet<ToppingId>,
}

/// Body returned by the intake endpoint on success and on failure alike.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl OrderResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }
}
