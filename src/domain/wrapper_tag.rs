//! Wrapper tag name

use crate::error::TagStripError;
use std::fmt;
use std::str::FromStr;

/// Tag stripped when nothing else is configured.
pub const DEFAULT_TAG: &str = "AppLayout";

/// Name of the element whose opening/closing pair is removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrapperTag(String);

impl WrapperTag {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for WrapperTag {
    fn default() -> Self {
        WrapperTag(DEFAULT_TAG.to_string())
    }
}

impl FromStr for WrapperTag {
    type Err = TagStripError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        let name = name
            .strip_prefix('<')
            .and_then(|n| n.strip_suffix('>'))
            .unwrap_or(name);

        let mut chars = name.chars();
        let starts_with_letter = chars.next().is_some_and(|ch| ch.is_ascii_alphabetic());
        let rest_valid =
            chars.all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '_' | '-' | '.' | ':'));

        if !starts_with_letter || !rest_valid {
            return Err(TagStripError::InvalidTagName(s.to_string()));
        }

        Ok(WrapperTag(name.to_string()))
    }
}

impl fmt::Display for WrapperTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
