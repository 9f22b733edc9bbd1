//! Wrapper tag removal.
//!
//! Three ordered substitutions, each fed the output of the previous one:
//!
//! 1. `<T>` followed by whitespace containing a newline is dropped.
//! 2. `</T>` right before a closing `);` collapses to `\n  );`.
//! 3. `</T>` on the line after a `</div>` collapses into the `</div>`.
//!
//! Anything else mentioning the tag is left untouched.

use crate::domain::WrapperTag;
use crate::error::Result;
use regex::{Captures, Regex};

const CLOSING_CALL: &str = "\n  );";
const CLOSING_DIV: &str = "</div>";

/// Result of stripping a wrapper tag from one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StripResult {
    pub content: String,
    pub openings: usize,
    pub closings_before_call: usize,
    pub closings_after_div: usize,
}

impl StripResult {
    pub fn replacements(&self) -> usize {
        self.openings + self.closings_before_call + self.closings_after_div
    }
}

/// Compiled substitution pipeline for a single wrapper tag.
#[derive(Debug, Clone)]
pub struct TagStripper {
    tag: WrapperTag,
    opening: Regex,
    closing_before_call: Regex,
    closing_after_div: Regex,
}

impl TagStripper {
    pub fn new(tag: WrapperTag) -> Result<Self> {
        let name = regex::escape(tag.as_str());

        let opening = Regex::new(&format!(r"<{}>\s*\n\s*", name))?;
        let closing_before_call = Regex::new(&format!(r"\s*</{}>\s*\n\s*\);", name))?;
        let closing_after_div = Regex::new(&format!(r"</div>\s*\n\s*</{}>", name))?;

        Ok(TagStripper {
            tag,
            opening,
            closing_before_call,
            closing_after_div,
        })
    }

    pub fn strip(&self, text: &str) -> StripResult {
        let mut openings = 0usize;
        let mut closings_before_call = 0usize;
        let mut closings_after_div = 0usize;

        let content = replace_counted(&self.opening, text, "", &mut openings);
        let content = replace_counted(
            &self.closing_before_call,
            &content,
            CLOSING_CALL,
            &mut closings_before_call,
        );
        let content = replace_counted(
            &self.closing_after_div,
            &content,
            CLOSING_DIV,
            &mut closings_after_div,
        );

        tracing::debug!(
            tag = %self.tag,
            openings,
            closings_before_call,
            closings_after_div,
            "stripped wrapper tag"
        );

        StripResult {
            content,
            openings,
            closings_before_call,
            closings_after_div,
        }
    }
}

fn replace_counted(regex: &Regex, text: &str, with: &str, count: &mut usize) -> String {
    regex
        .replace_all(text, |_: &Captures<'_>| {
            *count += 1;
            with
        })
        .into_owned()
}
