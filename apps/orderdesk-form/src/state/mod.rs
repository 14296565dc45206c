//! # State Module
//!
//! Session state for the order form.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────────┐          ┌──────────────────────────┐        │
//! │  │    OrderSession      │          │      FormConfig          │        │
//! │  │                      │          │                          │        │
//! │  │  • The one Order     │          │  • Initial order id      │        │
//! │  │  • Detail binding    │          │  • Initial customer      │        │
//! │  │                      │          │  • Binding policy        │        │
//! │  └──────────────────────┘          └──────────────────────────┘        │
//! │                                                                         │
//! │  OrderSession: owned by the console loop, mutated through &mut         │
//! │  FormConfig:   read-only after startup                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod order;

pub use config::FormConfig;
pub use order::{OrderDetails, OrderSession, OrderTotals};
