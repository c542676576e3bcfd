//! CLI tool for turning delimited Markdown into an HTML slide deck.

use anyhow::{Context, Result};
use clap::Parser;
use mdslides_core::{
    ensure_slides, split_slides, DocumentAssembler, MarkdownRenderer, PresentationRequest, Theme,
    Transition, DOWNLOAD_FILE_NAME,
};
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

/// Build a self-contained HTML slide deck from Markdown.
///
/// Slides are separated by lines containing only `===`.
#[derive(Parser, Debug)]
#[command(name = "mdslides")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input Markdown file (reads stdin when omitted or "-")
    input: Option<PathBuf>,

    /// Output file (default: presentation.html)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the document to stdout instead of writing a file
    #[arg(short, long)]
    print: bool,

    /// Theme name
    #[arg(short, long, default_value = "Moderne Sombre")]
    theme: String,

    /// Transition name
    #[arg(short = 'T', long, default_value = "Slide")]
    transition: String,

    /// Document title
    #[arg(long)]
    title: Option<String>,

    /// Document language
    #[arg(long)]
    lang: Option<String>,

    /// List available themes and transitions, then exit
    #[arg(short, long)]
    list: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    if args.list {
        print!("{}", catalog_listing());
        return Ok(());
    }

    let raw_text = read_input(args.input.as_deref())?;
    let document = build_document(&raw_text, &args)?;

    if args.print {
        print!("{}", document);
    } else {
        let output_path = get_output_path(args.output.as_ref());
        write_output(&output_path, &document)?;
        if args.verbose {
            eprintln!("Written to: {}", output_path.display());
        }
    }

    Ok(())
}

/// Turn Markdown into a deck using the theme, transition and labels from `args`.
fn build_document(raw_text: &str, args: &Args) -> Result<String> {
    let theme: Theme = args.theme.parse()?;
    let transition: Transition = args.transition.parse()?;

    let request = PresentationRequest::new(raw_text, theme.name(), transition.name());
    request.validate()?;

    let slides = split_slides(&request.raw_text);
    ensure_slides(&slides)?;

    if args.verbose {
        eprintln!("  Found {} slides", slides.len());
    }

    let rendered = MarkdownRenderer::new().render_all(&slides);
    let fallbacks = rendered.iter().filter(|s| s.fallback).count();
    if fallbacks > 0 {
        eprintln!(
            "Warning: {} slide(s) could not be rendered and show their source text",
            fallbacks
        );
    }

    let mut assembler = DocumentAssembler::for_catalog(theme, transition);
    if let Some(title) = &args.title {
        assembler = assembler.with_title(title.as_str());
    }
    if let Some(lang) = &args.lang {
        assembler = assembler.with_lang(lang);
    }

    Ok(assembler.assemble(&rendered))
}

/// Read Markdown from a file, or from stdin for `None` / `-`.
fn read_input(path: Option<&Path>) -> Result<String> {
    let mut text = String::new();

    match path {
        Some(p) if p != Path::new("-") => {
            let mut file =
                File::open(p).with_context(|| format!("Failed to open {}", p.display()))?;
            file.read_to_string(&mut text)
                .with_context(|| format!("Failed to read {}", p.display()))?;
        }
        _ => {
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
        }
    }

    Ok(text)
}

/// Human-readable list of the theme and transition catalogs.
fn catalog_listing() -> String {
    let mut listing = String::from("Themes:\n");
    for theme in Theme::ALL {
        let colors = theme.colors();
        listing.push_str(&format!(
            "  {:<16} background {}, text {}\n",
            theme.name(),
            colors.background,
            colors.text
        ));
    }
    listing.push_str("Transitions:\n");
    for transition in Transition::ALL {
        listing.push_str(&format!(
            "  {:<16} {}\n",
            transition.name(),
            transition.descriptor()
        ));
    }
    listing
}

/// Determine the output path for the deck.
fn get_output_path(output: Option<&PathBuf>) -> PathBuf {
    match output {
        Some(path) => path.clone(),
        None => PathBuf::from(DOWNLOAD_FILE_NAME),
    }
}

/// Write output to a file.
fn write_output(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory: {}", parent.display()))?;
    }

    let mut file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;

    file.write_all(content.as_bytes())
        .with_context(|| format!("Failed to write to {}", path.display()))?;

    Ok(())
}
