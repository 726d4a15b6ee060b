//! Markdown rendering and the HTML page shell.
//!
//! One comrak pass does everything tree-shaped: frontmatter extraction,
//! diagram block rewriting, math counting, and the final HTML render with
//! syntax highlighting. `build_page` wraps the rendered body in a complete,
//! self-contained document.

use comrak::nodes::{AstNode, NodeValue};
use comrak::plugins::syntect::SyntectAdapter;
use comrak::{format_html_with_plugins, parse_document, Arena, Options, Plugins};

use crate::convert::ConvertOptions;
use crate::diagram;
use crate::frontmatter::{self, FrontMatter};

/// Result of rendering one markdown document body.
pub struct RenderedPage {
    /// The rendered HTML fragment.
    pub html: String,
    /// Parsed frontmatter (empty when the document has none).
    pub front_matter: FrontMatter,
    /// Number of diagram containers produced by the rewrite pass.
    pub diagram_count: usize,
    /// Number of math nodes in the document.
    pub math_count: usize,
}

/// Build comrak options.
///
/// GFM extensions (strikethrough, tables, autolinks, task lists) plus
/// footnotes, description lists, auto heading IDs, and smart punctuation.
/// Raw HTML from the input is not passed through; frontmatter is detached
/// from the rendered output and handed to `frontmatter::parse`.
fn make_options(math: bool) -> Options<'static> {
    let mut options = Options::default();
    options.extension.strikethrough = true;
    options.extension.table = true;
    options.extension.autolink = true;
    options.extension.tasklist = true;
    options.extension.footnotes = true;
    options.extension.description_lists = true;
    options.extension.header_ids = Some(String::new());
    options.extension.front_matter_delimiter = Some("---".to_owned());
    if math {
        options.extension.math_dollars = true;
    }
    options.parse.smart = true;
    options.render.unsafe_ = false;
    options
}

/// Minimal HTML entity escaping for text content and attribute values.
pub(crate) fn html_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Find the detached frontmatter node, if any, and parse it.
fn extract_front_matter<'a>(root: &'a AstNode<'a>) -> FrontMatter {
    for node in root.children() {
        if let NodeValue::FrontMatter(raw) = &node.data.borrow().value {
            return frontmatter::parse(raw);
        }
    }
    FrontMatter::empty()
}

fn count_math_nodes<'a>(root: &'a AstNode<'a>) -> usize {
    root.descendants()
        .filter(|node| matches!(node.data.borrow().value, NodeValue::Math(_)))
        .count()
}

/// Render a markdown string to an HTML fragment.
///
/// Runs the diagram rewrite pass when enabled, counts math nodes, and
/// highlights fenced code with the theme-matched syntect adapter.
pub fn render_markdown(input: &str, opts: &ConvertOptions) -> RenderedPage {
    let arena = Arena::new();
    let options = make_options(opts.math);
    let root = parse_document(&arena, input, &options);

    let front_matter = extract_front_matter(root);

    let diagram_count = if opts.mermaid {
        diagram::rewrite_diagram_blocks(root, opts.fullscreen)
    } else {
        0
    };

    let math_count = if opts.math { count_math_nodes(root) } else { 0 };

    let adapter = SyntectAdapter::new(Some(opts.theme.syntect_name()));
    let mut plugins = Plugins::default();
    plugins.render.codefence_syntax_highlighter = Some(&adapter);

    let mut html_bytes = Vec::new();
    format_html_with_plugins(root, &options, &mut html_bytes, &plugins)
        .expect("comrak HTML formatting should not fail");
    let html = String::from_utf8(html_bytes).expect("comrak output must be valid UTF-8");

    RenderedPage {
        html,
        front_matter,
        diagram_count,
        math_count,
    }
}

/// Build the full HTML document: head with inlined styles, the rendered
/// content, and any script assets at the end of `<body>`.
///
/// Scripts are placed after the content so the document is fully parsed
/// before any of them executes.
pub fn build_page(title: &str, body_html: &str, styles: &str, scripts: &str) -> String {
    let title = html_escape(title);
    format!(
        "<!DOCTYPE html>\n\
<html lang=\"en\">\n\
<head>\n\
<meta charset=\"utf-8\">\n\
<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
<title>{title}</title>\n\
<style>\n\
{styles}\
</style>\n\
</head>\n\
<body>\n\
<main class=\"content\">\n\
{body_html}\
</main>\n\
{scripts}\
</body>\n\
</html>\n"
    )
}
