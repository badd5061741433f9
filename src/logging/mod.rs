//! Logger initialization for the binaries.
//!
//! The library itself only talks to the `log` facade; hosts choose whether
//! and how to install a backend.

mod init;

pub use init::{LoggingConfig, init_logging};
