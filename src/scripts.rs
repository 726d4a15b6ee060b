//! Embedded script and style assets.
//!
//! All assets are compiled into the binary via `include_str!` so the
//! generated pages are self-contained; nothing needs to be distributed next
//! to the output HTML. Script assets are complete `<script>` elements ready
//! for injection at the end of `<body>`.

use crate::convert::Theme;

/// Mermaid initialisation script, plain variant.
///
/// Loaded from `src/assets/mermaid.js` at compile time. Contains the
/// `{{THEME}}` placeholder substituted by [`mermaid_script`].
const MERMAID_JS: &str = include_str!("assets/mermaid.js");

/// Mermaid initialisation script with the fullscreen toggle controller.
///
/// Loaded from `src/assets/mermaid_fullscreen.js` at compile time.
const MERMAID_FULLSCREEN_JS: &str = include_str!("assets/mermaid_fullscreen.js");

/// KaTeX loader: stylesheet link plus a module script that renders every
/// `data-math-style` span emitted by the markdown renderer.
pub const KATEX_JS: &str = include_str!("assets/katex.js");

/// Dark theme stylesheet.
pub const DARK_CSS: &str = include_str!("assets/dark.css");

/// Light theme stylesheet.
pub const LIGHT_CSS: &str = include_str!("assets/light.css");

/// Styles for diagram grouping nodes and their fullscreen toggle controls.
pub const DIAGRAM_CSS: &str = include_str!("assets/diagram.css");

const THEME_PLACEHOLDER: &str = "{{THEME}}";

/// Build the Mermaid script for injection, substituting the theme name.
///
/// `fullscreen` selects between the plain variant and the variant that wires
/// a fullscreen toggle per diagram. The theme name is forwarded verbatim to
/// Mermaid's `initialize` call.
pub fn mermaid_script(theme: Theme, fullscreen: bool) -> String {
    let variant = if fullscreen {
        MERMAID_FULLSCREEN_JS
    } else {
        MERMAID_JS
    };
    variant.replacen(THEME_PLACEHOLDER, theme.mermaid_name(), 1)
}
