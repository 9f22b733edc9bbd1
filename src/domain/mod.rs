//! Domain layer - Tag names and the rewrite pipeline

pub mod strip;
pub mod wrapper_tag;

pub use strip::{StripResult, TagStripper};
pub use wrapper_tag::WrapperTag;
