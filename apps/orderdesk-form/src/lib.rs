//! # OrderDesk Form Library
//!
//! The order entry surface: an interactive terminal form driving
//! `orderdesk-core`.
//!
//! ## Module Organization
//! ```text
//! orderdesk_form_lib/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── console.rs      ◄─── Line-oriented form (fields + buttons)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── order.rs    ◄─── OrderSession, OrderDetails, OrderTotals
//! │   └── config.rs   ◄─── FormConfig (environment + defaults)
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   └── order.rs    ◄─── add_product, display_order, get_totals
//! └── error.rs        ◄─── FormError for commands
//! ```
//!
//! ## Testing Without a Terminal
//! Commands take the session by reference and return values, so tests call
//! them directly. The console itself runs over any `BufRead`/`Write` pair.

pub mod commands;
pub mod console;
pub mod error;
pub mod state;

use std::io;

use tracing::info;
use tracing_subscriber::EnvFilter;

use console::Console;
use error::FormError;
use state::{FormConfig, OrderSession};

/// Runs the order form on stdin/stdout.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Form Startup                                      │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, written to stderr             │
/// │     • Default: warn, orderdesk crates at info; RUST_LOG overrides       │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • ORDERDESK_* environment variables over defaults                   │
/// │                                                                         │
/// │  3. Create the Session Order ─────────────────────────────────────────► │
/// │     • Empty order with the configured id / customer                     │
/// │                                                                         │
/// │  4. Run the Console ──────────────────────────────────────────────────► │
/// │     • Until quit or end of input                                        │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> Result<(), FormError> {
    init_tracing();

    info!("Starting OrderDesk form");

    let config = FormConfig::from_env();
    info!(
        bind_order_details = config.bind_order_details,
        order_id = %config.order_id,
        "Configuration loaded"
    );

    let mut session = OrderSession::new(&config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock(), &config);
    console.run(&mut session)
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=orderdesk=trace` - Show trace for orderdesk crates only
/// - Default: WARN, INFO for orderdesk crates
///
/// Logs go to stderr so the form output on stdout stays clean.
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn,orderdesk=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
