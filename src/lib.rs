//! tagstrip - Remove a wrapper tag from component markup
//!
//! Rewrites JSX/TSX-style source files in place, stripping an opening wrapper
//! tag and its matching closing tag with three fixed regular-expression passes.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::TagStripError;
