//! # OrderDesk Form Entry Point
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging)
//! 2. Load configuration from the environment
//! 3. Create the session order
//! 4. Run the console form until quit / end of input

use std::process::ExitCode;

fn main() -> ExitCode {
    // The actual setup is in lib.rs for better testability
    match orderdesk_form_lib::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("orderdesk-form: {}", err.message);
            ExitCode::FAILURE
        }
    }
}
