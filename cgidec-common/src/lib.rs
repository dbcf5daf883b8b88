//! Common types and utilities for cgidec
//!
//! This crate holds the pure CGI decoding core, the breakdown text
//! renderer, and the shared configuration, error, and logging pieces used
//! by the `cgidec` binary.

pub mod cgi;
pub mod config;
pub mod error;
pub mod logging;
pub mod render;

pub use cgi::{decode_4g, decode_5g, CgiField};
pub use config::{load_config, load_config_from_str, validate_config, CgidecConfig};
pub use error::Error;
pub use logging::{init_logging, LogLevel};
pub use render::{render_breakdown, render_report, HEADER_4G, HEADER_5G};
