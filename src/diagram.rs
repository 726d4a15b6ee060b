//! Diagram block transformation.
//!
//! Fenced code blocks whose info string names the Mermaid language are
//! replaced, at generation time, with the container markup the Mermaid
//! runtime recognises. The optional fullscreen variant wraps each container
//! together with a single toggle control in a grouping node; the matching
//! behaviour ships in the embedded script asset (see `scripts.rs`).

use comrak::nodes::{AstNode, NodeValue};

use crate::html::html_escape;

/// Glyph shown on a toggle control in the plain state.
pub const EXPAND_GLYPH: &str = "⛶";

/// Glyph the script swaps in while a diagram is expanded. Kept beside
/// [`EXPAND_GLYPH`] so the pair lives in one place; the fullscreen script
/// asset must use the same pair.
#[allow(dead_code)] // asserted against the script asset in scripts.rs tests
pub const CLOSE_GLYPH: &str = "✕";

/// Returns true when a fenced code block info string denotes Mermaid.
///
/// Matching is case-insensitive and based on the first whitespace-delimited
/// token of the info string (for example, `mermaid` in `mermaid title=...`).
fn is_diagram_info(info: &str) -> bool {
    info.split_whitespace()
        .next()
        .map(|lang| lang.eq_ignore_ascii_case("mermaid"))
        .unwrap_or(false)
}

/// Build the replacement markup for one diagram source block.
///
/// The source is HTML-escaped in transit; the element's text content as seen
/// by the Mermaid runtime is the fence literal, byte for byte.
fn container_markup(source: &str, fullscreen: bool) -> String {
    let container = format!("<div class=\"mermaid\">{}</div>", html_escape(source));
    if fullscreen {
        format!(
            "<div class=\"diagram-block\">\
<button class=\"diagram-toggle\" type=\"button\" aria-label=\"Toggle fullscreen\">{EXPAND_GLYPH}</button>\
{container}\
</div>\n"
        )
    } else {
        format!("{container}\n")
    }
}

/// Rewrite every Mermaid fenced code block into its diagram container.
///
/// Walks the tree in document order and substitutes each matching node in
/// place; each block is processed independently and exactly once, and
/// sibling content is untouched. Already-rewritten blocks are raw HTML
/// nodes, so a second pass over the same tree finds nothing and returns 0.
///
/// Returns the number of blocks rewritten.
pub fn rewrite_diagram_blocks<'a>(root: &'a AstNode<'a>, fullscreen: bool) -> usize {
    let mut rewritten = 0usize;

    for node in root.descendants() {
        let replacement = {
            let data = node.data.borrow();
            match &data.value {
                NodeValue::CodeBlock(ncb) if ncb.fenced && is_diagram_info(&ncb.info) => {
                    Some(container_markup(&ncb.literal, fullscreen))
                }
                _ => None,
            }
        };

        if let Some(raw_html) = replacement {
            node.data.borrow_mut().value = NodeValue::Raw(raw_html);
            rewritten += 1;
        }
    }

    rewritten
}
