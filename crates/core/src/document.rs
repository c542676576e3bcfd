//! Standalone HTML document assembly.
//!
//! The assembled deck carries its own styles, slide markup and navigation
//! script. Only the syntax highlighter and the math typesetter are loaded
//! from pinned CDN URLs when the file is opened in a browser.

use std::fmt::Write;

use crate::markdown::escape_text;
use crate::navigation::Navigator;
use crate::theme::{Theme, ThemeColors, Transition};
use crate::types::RenderedSlide;

/// highlight.js theme stylesheet.
pub const HIGHLIGHT_STYLESHEET_URL: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/highlight.js/11.8.0/styles/atom-one-dark.min.css";

/// highlight.js script.
pub const HIGHLIGHT_SCRIPT_URL: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/highlight.js/11.8.0/highlight.min.js";

/// MathJax 3 TeX to HTML bundle.
pub const MATHJAX_SCRIPT_URL: &str = "https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-mml-chtml.js";

/// Default document title.
pub const DEFAULT_TITLE: &str = "Présentation";

/// Default document language.
pub const DEFAULT_LANG: &str = "fr";

/// File name offered when the deck is downloaded or saved.
pub const DOWNLOAD_FILE_NAME: &str = "presentation.html";

/// MIME type of the assembled deck.
pub const DOWNLOAD_MIME_TYPE: &str = "text/html";

/// Client runtime; expects `totalSlides` to be declared first.
const RUNTIME_SCRIPT: &str = include_str!("runtime.js");

/// MathJax configuration: `$...$` inline, `$$...$$` display.
const MATHJAX_CONFIG: &str = r#"window.MathJax = {
        tex: {
            inlineMath: [['$', '$']],
            displayMath: [['$$', '$$']],
            processEscapes: true,
            processEnvironments: true
        },
        options: {
            skipHtmlTags: ['script', 'noscript', 'style', 'textarea', 'pre']
        }
    };"#;

/// Builds the final deck from rendered slides.
#[derive(Debug, Clone)]
pub struct DocumentAssembler {
    colors: ThemeColors,
    transition: &'static str,
    title: String,
    lang: String,
}

impl DocumentAssembler {
    /// Create an assembler from resolved theme colors and transition descriptor.
    pub fn new(colors: ThemeColors, transition: &'static str) -> Self {
        Self {
            colors,
            transition,
            title: DEFAULT_TITLE.to_string(),
            lang: DEFAULT_LANG.to_string(),
        }
    }

    /// Create an assembler from catalog entries.
    pub fn for_catalog(theme: Theme, transition: Transition) -> Self {
        Self::new(theme.colors(), transition.descriptor())
    }

    /// Set the document `<title>`.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the `lang` attribute of the root element.
    ///
    /// Characters other than ASCII letters, digits and `-` are dropped; an
    /// empty result falls back to the default language.
    pub fn with_lang(mut self, lang: &str) -> Self {
        let cleaned: String = lang
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || *c == '-')
            .collect();
        self.lang = if cleaned.is_empty() {
            DEFAULT_LANG.to_string()
        } else {
            cleaned
        };
        self
    }

    /// Assemble the complete document.
    pub fn assemble(&self, slides: &[RenderedSlide]) -> String {
        let nav = Navigator::new(slides.len());
        if slides.is_empty() {
            log::warn!("Assembling a deck with no slides");
        }

        let fragments: usize = slides.iter().map(|s| s.html.len()).sum();
        let mut out = String::with_capacity(16 * 1024 + fragments);

        let _ = writeln!(out, "<!DOCTYPE html>");
        let _ = writeln!(out, "<html lang=\"{}\">", self.lang);
        self.write_head(&mut out);
        let _ = writeln!(out, "<body>");
        write_slides(&mut out, slides, &nav);
        write_controls(&mut out, &nav);
        write_script(&mut out, nav.total());
        let _ = writeln!(out, "</body>");
        out.push_str("</html>");

        log::debug!(
            "Assembled document with {} slides ({} bytes)",
            slides.len(),
            out.len()
        );

        out
    }

    fn write_head(&self, out: &mut String) {
        let _ = writeln!(out, "<head>");
        let _ = writeln!(out, "    <meta charset=\"UTF-8\">");
        let _ = writeln!(
            out,
            "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">"
        );
        let _ = writeln!(out, "    <title>{}</title>", escape_text(&self.title));
        let _ = writeln!(out, "    <link rel=\"stylesheet\" href=\"{}\">", HIGHLIGHT_STYLESHEET_URL);
        let _ = writeln!(out, "    <script src=\"{}\"></script>", HIGHLIGHT_SCRIPT_URL);
        let _ = writeln!(out, "    <script>\n    {}\n    </script>", MATHJAX_CONFIG);
        let _ = writeln!(
            out,
            "    <script id=\"MathJax-script\" async src=\"{}\"></script>",
            MATHJAX_SCRIPT_URL
        );
        let _ = writeln!(out, "    <style>{}    </style>", self.style());
        let _ = writeln!(out, "</head>");
    }

    /// Style rules with theme colors and the transition filled in.
    fn style(&self) -> String {
        let ThemeColors {
            background,
            text,
            accent,
            highlight,
        } = self.colors;
        let transition = self.transition;

        format!(
            r#"
        * {{
            margin: 0;
            padding: 0;
            box-sizing: border-box;
        }}

        body {{
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, Cantarell, sans-serif;
            background: {background};
            color: {text};
            overflow: hidden;
        }}

        .presentation-container {{
            width: 100vw;
            height: 100vh;
            position: relative;
            display: flex;
            align-items: center;
            justify-content: center;
        }}

        .slide {{
            width: 90%;
            max-width: 1200px;
            height: 80vh;
            padding: 3rem;
            background: {accent};
            border-radius: 10px;
            box-shadow: 0 10px 40px rgba(0,0,0,0.3);
            display: none;
            overflow-y: auto;
            transition: {transition};
        }}

        .slide.active {{
            display: block;
        }}

        .slide h1 {{
            font-size: 3rem;
            margin-bottom: 1.5rem;
            color: {text};
        }}

        .slide h2 {{
            font-size: 2.2rem;
            margin-bottom: 1.2rem;
            margin-top: 1.5rem;
            color: {text};
        }}

        .slide h3 {{
            font-size: 1.8rem;
            margin-bottom: 1rem;
            margin-top: 1.2rem;
        }}

        .slide p {{
            font-size: 1.3rem;
            line-height: 1.8;
            margin-bottom: 1rem;
        }}

        .slide ul, .slide ol {{
            font-size: 1.3rem;
            margin-left: 2rem;
            margin-bottom: 1rem;
        }}

        .slide li {{
            margin-bottom: 0.5rem;
            line-height: 1.6;
        }}

        .slide code {{
            background: {highlight};
            padding: 0.2rem 0.5rem;
            border-radius: 3px;
            font-family: 'Courier New', monospace;
        }}

        .slide pre {{
            background: #282c34;
            padding: 1.5rem;
            border-radius: 8px;
            overflow-x: auto;
            margin: 1.5rem 0;
        }}

        .slide pre code {{
            background: none;
            padding: 0;
            color: #abb2bf;
        }}

        .slide pre.render-fallback {{
            color: #abb2bf;
            white-space: pre-wrap;
            border-left: 4px solid #e06c75;
        }}

        .slide img {{
            max-width: 100%;
            height: auto;
            border-radius: 8px;
            margin: 1rem 0;
        }}

        .slide table {{
            width: 100%;
            border-collapse: collapse;
            margin: 1rem 0;
        }}

        .slide th, .slide td {{
            border: 1px solid {highlight};
            padding: 0.8rem;
            text-align: left;
        }}

        .slide th {{
            background: {highlight};
            font-weight: bold;
        }}

        .navigation {{
            position: fixed;
            bottom: 2rem;
            left: 50%;
            transform: translateX(-50%);
            display: flex;
            gap: 1rem;
            align-items: center;
            background: rgba(0,0,0,0.5);
            padding: 1rem 2rem;
            border-radius: 50px;
            backdrop-filter: blur(10px);
        }}

        .nav-btn {{
            background: {highlight};
            color: {text};
            border: none;
            padding: 0.8rem 1.5rem;
            border-radius: 25px;
            cursor: pointer;
            font-size: 1rem;
            font-weight: bold;
            transition: all 0.3s;
        }}

        .nav-btn:hover {{
            transform: scale(1.05);
            opacity: 0.9;
        }}

        .nav-btn:disabled {{
            opacity: 0.3;
            cursor: not-allowed;
        }}

        .slide-counter {{
            color: white;
            font-size: 1rem;
            font-weight: bold;
            min-width: 80px;
            text-align: center;
        }}

        .fullscreen-btn {{
            position: fixed;
            top: 2rem;
            right: 2rem;
            background: rgba(0,0,0,0.5);
            color: white;
            border: none;
            padding: 0.8rem 1.2rem;
            border-radius: 25px;
            cursor: pointer;
            font-size: 0.9rem;
            backdrop-filter: blur(10px);
            transition: all 0.3s;
        }}

        .fullscreen-btn:hover {{
            transform: scale(1.05);
        }}
"#
        )
    }
}

fn write_slides(out: &mut String, slides: &[RenderedSlide], nav: &Navigator) {
    let _ = writeln!(out, "    <div class=\"presentation-container\">");
    for (position, slide) in slides.iter().enumerate() {
        let class = if nav.is_active(position) {
            "slide active"
        } else {
            "slide"
        };
        let marker = if slide.fallback {
            " data-render-fallback=\"true\""
        } else {
            ""
        };
        let _ = writeln!(
            out,
            "        <div class=\"{}\" id=\"{}\"{}>{}</div>",
            class,
            slide.element_id(),
            marker,
            slide.html
        );
    }
    let _ = writeln!(out, "    </div>");
}

fn write_controls(out: &mut String, nav: &Navigator) {
    let disabled = |flag: bool| if flag { " disabled" } else { "" };

    let _ = writeln!(
        out,
        "    <button class=\"fullscreen-btn\" onclick=\"toggleFullscreen()\">Plein écran</button>"
    );
    let _ = writeln!(out, "    <div class=\"navigation\">");
    let _ = writeln!(
        out,
        "        <button class=\"nav-btn\" id=\"prevBtn\" onclick=\"changeSlide(-1)\"{}>← Précédent</button>",
        disabled(nav.previous_disabled())
    );
    let _ = writeln!(
        out,
        "        <span class=\"slide-counter\" id=\"slideCounter\">{}</span>",
        nav.counter_text()
    );
    let _ = writeln!(
        out,
        "        <button class=\"nav-btn\" id=\"nextBtn\" onclick=\"changeSlide(1)\"{}>Suivant →</button>",
        disabled(nav.next_disabled())
    );
    let _ = writeln!(out, "    </div>");
}

fn write_script(out: &mut String, total: usize) {
    let _ = writeln!(out, "    <script>");
    let _ = writeln!(out, "const totalSlides = {};", total);
    out.push_str(RUNTIME_SCRIPT);
    let _ = writeln!(out, "    </script>");
}
