mod convert;
mod diagram;
mod frontmatter;
mod html;
mod scripts;

use std::path::Path;
use std::{io, process};

use clap::Parser;

use convert::{ConvertOptions, Converter, Theme};

/// Command-line interface.
#[derive(Parser)]
#[command(
    name = "mkpage",
    version,
    about = "Convert markdown documents into styled, self-contained HTML pages",
    after_help = "EXAMPLES:\n  mkpage README.md\n  mkpage input.md -o output.html\n  mkpage doc.md --theme light\n  mkpage diagram.md --mermaid --fullscreen\n  mkpage doc.md --mermaid --math --theme light"
)]
struct Cli {
    /// Path to the markdown file to convert
    file: String,

    /// Output file path (default: input file name with .html extension)
    #[arg(short, long)]
    output: Option<std::path::PathBuf>,

    /// Color theme for the generated page
    #[arg(short, long, value_enum, default_value_t = Theme::Dark)]
    theme: Theme,

    /// Enable Mermaid diagram support (diagrams render via CDN at view time)
    #[arg(long)]
    mermaid: bool,

    /// Add a fullscreen toggle to each diagram (no effect without --mermaid)
    #[arg(long)]
    fullscreen: bool,

    /// Enable math rendering with KaTeX (renders via CDN at view time)
    #[arg(long)]
    math: bool,
}

fn main() {
    let cli = Cli::parse();
    let path = Path::new(&cli.file);

    // Check the file extension before attempting to read.
    match path.extension().and_then(|e| e.to_str()) {
        Some("md" | "markdown" | "mdx" | "mdown" | "mkd" | "mkdn") => {}
        Some(ext) => {
            eprintln!("Error: '{ext}' is not a recognized markdown extension.");
            eprintln!("Expected a markdown file (.md, .markdown, .mdx, .mdown, .mkd, .mkdn).");
            process::exit(1);
        }
        None => {
            eprintln!("Error: '{}' has no file extension.", cli.file);
            eprintln!("Expected a markdown file (.md, .markdown, .mdx, .mdown, .mkd, .mkdn).");
            process::exit(1);
        }
    }

    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| path.with_extension("html"));

    let converter = Converter::new(ConvertOptions {
        theme: cli.theme,
        mermaid: cli.mermaid,
        fullscreen: cli.fullscreen,
        math: cli.math,
    });

    if let Err(e) = converter.convert(path, &output) {
        match e.kind() {
            io::ErrorKind::NotFound => {
                eprintln!("Error: file not found: {}", cli.file);
            }
            io::ErrorKind::PermissionDenied => {
                eprintln!("Error: permission denied: {}", cli.file);
            }
            _ => {
                eprintln!("Error converting '{}': {e}", cli.file);
            }
        }
        process::exit(1);
    }

    let mut features = Vec::new();
    if cli.mermaid {
        features.push("mermaid");
    }
    if cli.fullscreen {
        features.push("fullscreen");
    }
    if cli.math {
        features.push("math");
    }

    let feature_str = if features.is_empty() {
        String::new()
    } else {
        format!(" [{}]", features.join(", "))
    };

    println!(
        "✓ Generated: {} (theme: {}{feature_str})",
        output.display(),
        cli.theme
    );
}
