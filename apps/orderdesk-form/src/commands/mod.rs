//! # Commands Module
//!
//! Form actions as plain functions, callable without any terminal.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! └── order.rs    ◄─── add_product, display_order, get_totals
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  Console                                                                │
//! │  ───────                                                                │
//! │  "add" with the current field text                                      │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  commands::order::add_product(                                          │
//! │      session: &mut OrderSession, ◄── owned by the console loop          │
//! │      details: &OrderDetails,     ◄── order id / customer fields         │
//! │      input: &ProductInput,       ◄── product fields                     │
//! │  ) -> Result<OrderTotals, FormError>                                    │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Console prints the result or the notification                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod order;
