//! Infrastructure layer - File I/O and configuration

pub mod config;
pub mod document;

pub use config::Config;
pub use document::{collect_targets, read_document, write_document};
