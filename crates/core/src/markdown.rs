//! Markdown to HTML rendering for a single slide.
//!
//! Rendering uses pulldown-cmark with GFM tables and strikethrough. Single
//! newlines inside a paragraph become `<br />` so slide text keeps the line
//! layout the author typed. Fenced code keeps its language as a
//! `language-*` class for the browser-side highlighter.

use pulldown_cmark::{html, CowStr, Event, Options, Parser};

use crate::error::Result;
use crate::math;
use crate::types::{RenderedSlide, Slide};

/// CSS class put on fragments that hold escaped source instead of rendered HTML.
pub const FALLBACK_CLASS: &str = "render-fallback";

/// Renderer turning slide Markdown into HTML fragments.
#[derive(Debug, Clone)]
pub struct MarkdownRenderer {
    /// Markdown extensions passed to the parser.
    options: Options,

    /// Whether single newlines become line breaks.
    soft_breaks_as_br: bool,
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self {
            options: Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH,
            soft_breaks_as_br: true,
        }
    }
}

impl MarkdownRenderer {
    /// Create a renderer with tables, strikethrough and line-break conversion.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether single newlines inside paragraphs become `<br />`.
    pub fn with_soft_breaks(mut self, as_br: bool) -> Self {
        self.soft_breaks_as_br = as_br;
        self
    }

    /// Render one slide, protecting its math around the Markdown pass.
    ///
    /// Never fails: a slide whose math cannot be restored is emitted as
    /// escaped source and flagged as a fallback.
    pub fn render(&self, slide: &Slide) -> RenderedSlide {
        match self.try_render(slide) {
            Ok(html) => RenderedSlide::new(slide.index, html),
            Err(e) => {
                log::warn!("{}; emitting escaped source instead", e);
                RenderedSlide::fallback(slide.index, fallback_fragment(&slide.source))
            }
        }
    }

    /// Render every slide in order.
    pub fn render_all(&self, slides: &[Slide]) -> Vec<RenderedSlide> {
        slides.iter().map(|slide| self.render(slide)).collect()
    }

    /// Protect, render and restore one slide.
    pub fn try_render(&self, slide: &Slide) -> Result<String> {
        let protected = math::protect(&slide.source);
        let html = self.render_markdown(protected.text());
        protected.restore(&html, slide.index)
    }

    /// Render Markdown to an HTML fragment without any math handling.
    pub fn render_markdown(&self, text: &str) -> String {
        let soft_breaks_as_br = self.soft_breaks_as_br;
        let parser = Parser::new_ext(text, self.options).map(move |event| match event {
            Event::SoftBreak if soft_breaks_as_br => Event::HardBreak,
            other => other,
        });

        let mut out = String::with_capacity(text.len() * 3 / 2);
        html::push_html(&mut out, parser);
        out
    }
}

/// Escape text for use as HTML element content.
pub(crate) fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    html::push_html(&mut escaped, std::iter::once(Event::Text(CowStr::from(text))));
    escaped
}

/// Escaped source wrapped in a flagged `<pre>`.
fn fallback_fragment(source: &str) -> String {
    format!("<pre class=\"{}\">{}</pre>", FALLBACK_CLASS, escape_text(source))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(source: &str) -> RenderedSlide {
        MarkdownRenderer::new().render(&Slide::new(0, source))
    }

    #[test]
    fn test_headings_and_paragraph() {
        let slide = render("# Hello\n\nWorld");
        assert!(!slide.fallback);
        assert!(slide.html.contains("<h1>Hello</h1>"));
        assert!(slide.html.contains("<p>World</p>"));
        assert!(!slide.html.contains("<body"));
    }

    #[test]
    fn test_heading_levels() {
        let html = render("# A\n## B\n### C\n#### D").html;
        assert!(html.contains("<h1>A</h1>"));
        assert!(html.contains("<h2>B</h2>"));
        assert!(html.contains("<h3>C</h3>"));
        assert!(html.contains("<h4>D</h4>"));
    }

    #[test]
    fn test_emphasis() {
        let html = render("**bold** and *italic* and ~~gone~~").html;
        assert!(html.contains("<strong>bold</strong>"));
        assert!(html.contains("<em>italic</em>"));
        assert!(html.contains("<del>gone</del>"));
    }

    #[test]
    fn test_lists() {
        let html = render("- Point 1\n- Point 2\n\n1. First\n2. Second").html;
        assert!(html.contains("<ul>"));
        assert!(html.contains("<li>Point 1</li>"));
        assert!(html.contains("<ol>"));
        assert!(html.contains("<li>Second</li>"));
    }

    #[test]
    fn test_single_newline_becomes_br() {
        let html = render("Line one\nLine two").html;
        assert!(html.contains("Line one<br />"));
        assert!(html.contains("Line two</p>"));
    }

    #[test]
    fn test_soft_breaks_can_be_disabled() {
        let renderer = MarkdownRenderer::new().with_soft_breaks(false);
        let html = renderer.render(&Slide::new(0, "Line one\nLine two")).html;
        assert!(!html.contains("<br"));
    }

    #[test]
    fn test_fenced_code_is_escaped_not_parsed() {
        let html = render("```python\nx = a < b * c * d\n# not a heading\n```").html;
        assert!(html.contains("<code class=\"language-python\">"));
        assert!(html.contains("x = a &lt; b * c * d"));
        assert!(html.contains("# not a heading"));
        assert!(!html.contains("<em>"));
        assert!(!html.contains("<h1>"));
    }

    #[test]
    fn test_math_inside_code_survives() {
        let html = render("```\nprice = $a$ + $$b$$\n```").html;
        assert!(html.contains("price = $a$ + $$b$$"));
    }

    #[test]
    fn test_table() {
        let html = render("| Col 1 | Col 2 |\n|-------|-------|\n| A | B |").html;
        assert!(html.contains("<table>"));
        assert!(html.contains("<th>Col 1</th>"));
        assert!(html.contains("<td>B</td>"));
    }

    #[test]
    fn test_image() {
        let html = render("![Diagram](images/diagram.png)").html;
        assert!(html.contains("<img src=\"images/diagram.png\" alt=\"Diagram\""));
    }

    #[test]
    fn test_math_round_trip() {
        let source = "Inline $a_1 * b_2$ here\n\n$$\\int_0^\\infty e^{-x^2} dx$$";
        let html = render(source).html;
        assert!(html.contains("$a_1 * b_2$"));
        assert!(html.contains("$$\\int_0^\\infty e^{-x^2} dx$$"));
        assert!(!html.contains("MATH"));
    }

    #[test]
    fn test_block_with_inner_dollar() {
        let html = render("$$a$b$$").html;
        assert!(html.contains("$$a$b$$"));
    }

    #[test]
    fn test_digits_between_formulas_render_normally() {
        let slide = render("Values $a$ and $b$0$c$ here");
        assert!(!slide.fallback);
        assert!(slide.html.contains("<p>Values $a$ and $b$0$c$ here</p>"));
    }

    #[test]
    fn test_placeholder_word_inside_block_math() {
        let slide = render("$$\\text{MATHINLINE}$$ and $x$");
        assert!(!slide.fallback);
        assert!(slide.html.contains("$$\\text{MATHINLINE}$$ and $x$"));
    }

    #[test]
    fn test_mangled_placeholder_falls_back() {
        // The entity decodes to text that looks like a placeholder stem
        let slide = render("$x$ MATH&#73;NLINE <b>");
        assert!(slide.fallback);
        assert!(slide.html.starts_with("<pre class=\"render-fallback\">"));
        assert!(slide.html.contains("$x$ MATH&amp;#73;NLINE &lt;b&gt;"));
    }

    #[test]
    fn test_render_all_keeps_order_and_indices() {
        let slides = vec![Slide::new(0, "# A"), Slide::new(1, "# B")];
        let rendered = MarkdownRenderer::new().render_all(&slides);
        assert_eq!(rendered.len(), 2);
        assert_eq!(rendered[0].index, 0);
        assert!(rendered[1].html.contains("<h1>B</h1>"));
    }
}
