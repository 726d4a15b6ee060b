//! The conversion pipeline: read a markdown file, render it, assemble the
//! page shell with inlined styles and conditionally injected scripts, and
//! write the output file.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use clap::ValueEnum;

use crate::html;
use crate::scripts;

/// Color theme of the generated page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// The inlined page stylesheet.
    pub fn css(self) -> &'static str {
        match self {
            Theme::Dark => scripts::DARK_CSS,
            Theme::Light => scripts::LIGHT_CSS,
        }
    }

    /// Theme name forwarded verbatim to Mermaid's `initialize` call.
    pub fn mermaid_name(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "default",
        }
    }

    /// Syntect theme used for fenced code highlighting.
    pub fn syntect_name(self) -> &'static str {
        match self {
            Theme::Dark => "base16-ocean.dark",
            Theme::Light => "InspiredGitHub",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Feature switches for one conversion.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConvertOptions {
    pub theme: Theme,
    /// Rewrite Mermaid fences into diagram containers and inject the
    /// Mermaid script when any were produced.
    pub mermaid: bool,
    /// Wrap each diagram with a fullscreen toggle. No effect without
    /// `mermaid`.
    pub fullscreen: bool,
    /// Render `$…$` / `$$…$$` math and inject the KaTeX script when any
    /// math was found.
    pub math: bool,
}

/// Converts markdown documents into complete HTML pages.
pub struct Converter {
    options: ConvertOptions,
}

impl Converter {
    pub fn new(options: ConvertOptions) -> Self {
        Self { options }
    }

    /// Convert `input` and write the resulting page to `output`.
    pub fn convert(&self, input: &Path, output: &Path) -> io::Result<()> {
        let source = fs::read_to_string(input)?;
        let fallback_title = input.file_stem().and_then(|s| s.to_str());
        let page = self.convert_source(&source, fallback_title);
        fs::write(output, page)
    }

    /// Render a markdown source string to a complete HTML document.
    ///
    /// `fallback_title` is used when the frontmatter carries no title
    /// (typically the input file stem); without either the page is titled
    /// `Document`.
    pub fn convert_source(&self, source: &str, fallback_title: Option<&str>) -> String {
        let rendered = html::render_markdown(source, &self.options);

        let title = rendered
            .front_matter
            .title
            .clone()
            .or_else(|| fallback_title.map(str::to_owned))
            .unwrap_or_else(|| "Document".to_owned());

        let mut styles = String::from(self.options.theme.css());
        if self.options.fullscreen && rendered.diagram_count > 0 {
            styles.push('\n');
            styles.push_str(scripts::DIAGRAM_CSS);
        }

        let mut injected = String::new();
        if self.options.mermaid && rendered.diagram_count > 0 {
            injected.push_str(&scripts::mermaid_script(
                self.options.theme,
                self.options.fullscreen,
            ));
        }
        if self.options.math && rendered.math_count > 0 {
            injected.push_str(scripts::KATEX_JS);
        }

        eprintln!(
            "[render] diagrams={} math={}",
            rendered.diagram_count, rendered.math_count
        );

        html::build_page(&title, &rendered.html, &styles, &injected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn convert_file(content: &str, options: ConvertOptions) -> String {
        let dir = tempfile::tempdir().expect("create tempdir");
        let input = dir.path().join("test.md");
        let output = dir.path().join("test.html");
        fs::write(&input, content).expect("write input");

        let converter = Converter::new(options);
        converter.convert(&input, &output).expect("convert");
        fs::read_to_string(&output).expect("read output")
    }

    #[test]
    fn basic_markdown_converts() {
        let output = convert_file(
            "# Test Heading\n\nA paragraph with **bold** and *italic* text.\n\n- List item 1\n- List item 2\n",
            ConvertOptions::default(),
        );

        for check in [
            "<!DOCTYPE html>",
            "<html",
            "<head>",
            "<body>",
            "<h1",
            "Test Heading",
            "<strong>bold</strong>",
            "<em>italic</em>",
            "<ul>",
            "<li>List item 1</li>",
        ] {
            assert!(output.contains(check), "output missing: {check}");
        }
    }

    #[test]
    fn frontmatter_title_lands_in_title_tag() {
        let output = convert_file(
            "---\ntitle: Test Document\nauthor: Test Author\n---\n\n# Content\n",
            ConvertOptions::default(),
        );
        assert!(output.contains("<title>Test Document</title>"));
    }

    #[test]
    fn title_falls_back_to_file_stem() {
        let output = convert_file("# Heading only\n", ConvertOptions::default());
        // convert_file writes to test.md, so the stem is "test".
        assert!(output.contains("<title>test</title>"), "got: {output}");
    }

    #[test]
    fn title_falls_back_to_document() {
        let converter = Converter::new(ConvertOptions::default());
        let page = converter.convert_source("# Heading only\n", None);
        assert!(page.contains("<title>Document</title>"));
    }

    #[test]
    fn dark_theme_colors_inlined() {
        let output = convert_file("# Test\n", ConvertOptions::default());
        assert!(output.contains("#0d1117"), "dark background color expected");
    }

    #[test]
    fn light_theme_colors_inlined() {
        let output = convert_file(
            "# Test\n",
            ConvertOptions {
                theme: Theme::Light,
                ..ConvertOptions::default()
            },
        );
        assert!(output.contains("#ffffff"), "light background color expected");
    }

    #[test]
    fn mermaid_script_injected_only_with_diagrams() {
        let opts = ConvertOptions {
            mermaid: true,
            ..ConvertOptions::default()
        };

        let with = convert_file("```mermaid\nA-->B\n```\n", opts);
        assert!(with.contains("<div class=\"mermaid\">"));
        assert!(with.contains("mermaid.esm.min.mjs"));
        assert!(with.contains("theme: 'dark'"));

        let without = convert_file("no diagrams here\n", opts);
        assert!(!without.contains("mermaid.esm.min.mjs"));
    }

    #[test]
    fn mermaid_fence_untouched_when_flag_off() {
        let output = convert_file("```mermaid\nA-->B\n```\n", ConvertOptions::default());
        assert!(!output.contains("<div class=\"mermaid\">"));
        assert!(!output.contains("mermaid.esm.min.mjs"));
    }

    #[test]
    fn fullscreen_adds_grouping_markup_and_styles() {
        let output = convert_file(
            "```mermaid\nA-->B\n```\n",
            ConvertOptions {
                mermaid: true,
                fullscreen: true,
                ..ConvertOptions::default()
            },
        );
        assert!(output.contains("diagram-block"));
        assert!(output.contains("diagram-toggle"));
        assert!(output.contains(".diagram-block.fullscreen"), "toggle styles inlined");
        assert!(output.contains("resetAll"), "toggle controller script injected");
    }

    #[test]
    fn fullscreen_without_mermaid_changes_nothing() {
        let output = convert_file(
            "```mermaid\nA-->B\n```\n",
            ConvertOptions {
                fullscreen: true,
                ..ConvertOptions::default()
            },
        );
        assert!(!output.contains("diagram-block"));
        assert!(!output.contains(".diagram-toggle"));
    }

    #[test]
    fn katex_injected_only_with_math() {
        let opts = ConvertOptions {
            math: true,
            ..ConvertOptions::default()
        };

        let with = convert_file("$$x^2$$\n", opts);
        assert!(with.contains("katex.min.css"));

        let without = convert_file("no math here\n", opts);
        assert!(!without.contains("katex.min.css"));
    }

    #[test]
    fn math_flag_off_keeps_dollars_literal() {
        let output = convert_file("price is $5\n", ConvertOptions::default());
        assert!(output.contains("$5"));
        assert!(!output.contains("katex.min.css"));
    }

    #[test]
    fn missing_input_propagates_not_found() {
        let dir = tempfile::tempdir().expect("create tempdir");
        let converter = Converter::new(ConvertOptions::default());
        let err = converter
            .convert(&dir.path().join("missing.md"), &dir.path().join("out.html"))
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
