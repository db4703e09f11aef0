//! Logger set-up for the binaries.
//!
//! Library code only talks to the `log` facade; `env_logger` is wired up here.

mod init;

pub use init::{DEFAULT_FILTER, LOG_VAR, LoggingConfig, init_logging};
