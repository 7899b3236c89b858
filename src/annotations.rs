//! Extraction of `@depends` and `@references` tag lines from fragment text.
//!
//! Fragments declare their relationships inside a doc comment:
//!
//! ```text
//! /**
//!  * @depends base
//!  * @references lib_b:widget
//!  */
//! ```
//!
//! A tag is a `*` preceded by whitespace, then the marker, then the value.
//! It need not start the line, so `// * @depends base` is a tag too, but a
//! `*` at the very start of the text is not. Each tag yields one entry,
//! captured from after the marker to the end of the line and trimmed. Lines that carry the marker but nothing after it
//! are skipped, so extraction never fails.

use std::sync::LazyLock;

use regex::Regex;

/// Marker for a same-library ordering dependency.
pub const DEPENDS_MARKER: &str = "@depends";

/// Marker for an existence-only reference, optionally `library:item`.
pub const REFERENCES_MARKER: &str = "@references";

static DEPENDS_RE: LazyLock<Regex> = LazyLock::new(|| tag_regex(DEPENDS_MARKER));
static REFERENCES_RE: LazyLock<Regex> = LazyLock::new(|| tag_regex(REFERENCES_MARKER));

fn tag_regex(marker: &str) -> Regex {
    let pattern = format!(
        r"(?m)\s\*[ \t]+{}[ \t]+(.+)$",
        regex::escape(marker)
    );
    Regex::new(&pattern).expect("tag pattern is a valid regex")
}

/// The relationships declared in one fragment, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Annotations {
    pub depends_on: Vec<String>,
    pub refers_to: Vec<String>,
}

/// Scan `text` for both kinds of tag line.
pub fn extract(text: &str) -> Annotations {
    Annotations {
        depends_on: captures(&DEPENDS_RE, text),
        refers_to: captures(&REFERENCES_RE, text),
    }
}

fn captures(re: &Regex, text: &str) -> Vec<String> {
    re.captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .collect()
}
