//! # Configuration State
//!
//! Form configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`ORDERDESK_*`)
//! 2. Defaults (this file)
//!
//! Configuration is read-only after startup.

use serde::{Deserialize, Serialize};

/// Form configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormConfig {
    /// Order id the session order starts with (and the field's initial text)
    pub order_id: String,

    /// Customer name the session order starts with
    pub customer_name: String,

    /// Copy the order id / customer name fields into the live order on every
    /// add and display. When false the order keeps the details it was
    /// created with.
    pub bind_order_details: bool,

    /// Console prompt
    pub prompt: String,
}

impl Default for FormConfig {
    /// Returns the default configuration: blank order details, fields bound.
    fn default() -> Self {
        FormConfig {
            order_id: String::new(),
            customer_name: String::new(),
            bind_order_details: true,
            prompt: "> ".to_string(),
        }
    }
}

impl FormConfig {
    /// Creates a FormConfig from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `ORDERDESK_ORDER_ID`: Initial order id
    /// - `ORDERDESK_CUSTOMER_NAME`: Initial customer name
    /// - `ORDERDESK_BIND_ORDER_DETAILS`: `true` / `false`
    /// - `ORDERDESK_PROMPT`: Console prompt
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = FormConfig::default();

        if let Some(order_id) = lookup("ORDERDESK_ORDER_ID") {
            config.order_id = order_id;
        }

        if let Some(customer_name) = lookup("ORDERDESK_CUSTOMER_NAME") {
            config.customer_name = customer_name;
        }

        if let Some(bind) = lookup("ORDERDESK_BIND_ORDER_DETAILS") {
            match parse_flag(&bind) {
                Some(value) => config.bind_order_details = value,
                None => tracing::warn!(
                    value = %bind,
                    "Ignoring invalid ORDERDESK_BIND_ORDER_DETAILS, using default"
                ),
            }
        }

        if let Some(prompt) = lookup("ORDERDESK_PROMPT") {
            config.prompt = prompt;
        }

        config
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
