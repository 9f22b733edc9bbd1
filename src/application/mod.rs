//! Application layer - Use cases and orchestration

pub mod strip_files;

pub use strip_files::{FileOutcome, StripFilesService, StripOptions, StripReport};
