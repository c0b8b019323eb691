//! Attendance Observability
//!
//! Console logging for the setup tooling. Log lines go to stderr so that
//! stdout stays reserved for the operator-facing progress report.
//!
//! ```no_run
//! attendance_observability::init_basic_console_logging();
//! tracing::info!("ready");
//! ```

pub mod basic_logging;

pub use basic_logging::{LogFormat, init_basic_console_logging};
