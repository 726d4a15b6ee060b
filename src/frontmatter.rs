//! YAML frontmatter handling.
//!
//! The markdown parser detaches a leading `---` fenced block from the
//! rendered output; this module strips the delimiters and parses the YAML.
//! A document with invalid frontmatter still converts: the block is dropped
//! from the output and the metadata is simply empty.

use serde_yml::{Mapping, Value};

/// Parsed frontmatter of a document.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FrontMatter {
    /// The `title` key, when present and a string.
    pub title: Option<String>,
    /// Every frontmatter key, including `title`.
    pub metadata: Mapping,
}

impl FrontMatter {
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Parse a raw frontmatter block as detached by the markdown parser.
///
/// `block` includes the `---` delimiter lines. Anything that fails to parse
/// as a YAML mapping yields [`FrontMatter::empty`].
pub fn parse(block: &str) -> FrontMatter {
    let Some(yaml) = strip_delimiters(block) else {
        return FrontMatter::empty();
    };

    match serde_yml::from_str::<Value>(yaml) {
        Ok(Value::Mapping(metadata)) => {
            let title = metadata
                .get("title")
                .and_then(Value::as_str)
                .map(str::to_owned);
            FrontMatter { title, metadata }
        }
        _ => FrontMatter::empty(),
    }
}

/// Strip the surrounding `---` delimiter lines, returning the YAML payload.
///
/// Returns `None` when the block is not actually delimited (the parser never
/// hands us such a block, but a malformed one must not panic).
fn strip_delimiters(block: &str) -> Option<&str> {
    let trimmed = block.trim();
    trimmed
        .strip_prefix("---")?
        .strip_suffix("---")
        .map(str::trim)
}
