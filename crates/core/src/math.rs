//! Math protection around Markdown rendering.
//!
//! Markdown treats `*`, `_`, `\` and friends as markup, which would corrupt
//! TeX such as `$a_1 * b_2$`. Before rendering, every `$$...$$` block and then
//! every `$...$` inline formula is swapped for an alphanumeric sentinel. After
//! rendering the sentinels are replaced with the original literals, byte for
//! byte, so the browser-side typesetter sees exactly what the author wrote.

use regex::{Captures, Regex};
use std::sync::LazyLock;

use crate::error::{Error, Result};

/// Display math: `$$...$$`, may span lines, shortest match.
static BLOCK_MATH_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\$\$(.+?)\$\$").unwrap());

/// Inline math: `$...$` with no `$` inside, shortest match.
static INLINE_MATH_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$([^$]+?)\$").unwrap());

const BLOCK_STEM: &str = "MATHBLOCK";
const INLINE_STEM: &str = "MATHINLINE";

/// Ordered literals of one kind plus the stem used to build their sentinels.
#[derive(Debug, Clone)]
struct TokenTable {
    stem: String,
    literals: Vec<String>,
}

impl TokenTable {
    /// Pick a stem that does not occur anywhere in `texts`.
    ///
    /// Sentinels are `<stem><seq><stem>`, so a stem absent from the input
    /// means no sentinel can match user content.
    fn for_text(base: &str, texts: &[&str]) -> Self {
        let mut stem = base.to_string();
        while texts.iter().any(|text| text.contains(&stem)) {
            stem.push('X');
        }
        Self {
            stem,
            literals: Vec::new(),
        }
    }

    fn sentinel(&self, seq: usize) -> String {
        format!("{}{}{}", self.stem, seq, self.stem)
    }

    /// Store a literal and return the sentinel standing in for it.
    fn push(&mut self, literal: &str) -> String {
        self.literals.push(literal.to_string());
        self.sentinel(self.literals.len() - 1)
    }

    /// Replace sentinels in one left-to-right pass.
    ///
    /// Digits typed between two sentinels (`$b$0$c$`) make the closing stem
    /// of one and the opening stem of the next read like another sentinel,
    /// so sentinels are matched in sequence rather than searched for one at
    /// a time. The closure replacer inserts literals as-is, without `$`
    /// expansion.
    fn restore_into(&self, html: &str) -> std::result::Result<String, regex::Error> {
        if self.literals.is_empty() {
            return Ok(html.to_string());
        }

        let stem = regex::escape(&self.stem);
        let pattern = Regex::new(&format!("{}([0-9]+){}", stem, stem))?;
        let restored = pattern.replace_all(html, |caps: &Captures| {
            caps[1]
                .parse::<usize>()
                .ok()
                .and_then(|seq| self.literals.get(seq))
                .cloned()
                .unwrap_or_else(|| caps[0].to_string())
        });

        Ok(restored.into_owned())
    }
}

/// Slide text with its math swapped out for sentinels.
#[derive(Debug, Clone)]
pub struct ProtectedText {
    text: String,
    block: TokenTable,
    inline: TokenTable,
}

impl ProtectedText {
    /// Text safe to hand to the Markdown renderer.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Display math literals in encounter order, delimiters included.
    #[cfg(test)]
    fn block_literals(&self) -> &[String] {
        &self.block.literals
    }

    /// Inline math literals in encounter order, delimiters included.
    #[cfg(test)]
    fn inline_literals(&self) -> &[String] {
        &self.inline.literals
    }

    /// Put the original math back into rendered HTML.
    ///
    /// Inline literals go back first because they may themselves contain
    /// block sentinels (`$a $$b$$ c$`). Fails if any sentinel survives, which
    /// means the renderer altered one.
    pub fn restore(&self, html: &str, slide_index: usize) -> Result<String> {
        let render_error = |reason: String| Error::MarkdownRender {
            index: slide_index,
            reason,
        };

        let restored = self
            .inline
            .restore_into(html)
            .and_then(|partial| self.block.restore_into(&partial))
            .map_err(|e| render_error(format!("invalid placeholder pattern: {}", e)))?;

        for table in [&self.inline, &self.block] {
            if !table.literals.is_empty() && restored.contains(&table.stem) {
                return Err(render_error(format!(
                    "math placeholder '{}' was not restored",
                    table.stem
                )));
            }
        }

        Ok(restored)
    }
}

/// Swap display math, then inline math, for sentinels.
pub fn protect(text: &str) -> ProtectedText {
    let mut block = TokenTable::for_text(BLOCK_STEM, &[text]);
    let block_protected = BLOCK_MATH_REGEX
        .replace_all(text, |caps: &Captures| block.push(&caps[0]))
        .into_owned();

    // Checked against the original too: block literals are restored verbatim
    // and must not read as inline placeholders afterwards.
    let mut inline = TokenTable::for_text(INLINE_STEM, &[text, &block_protected]);
    let protected = INLINE_MATH_REGEX
        .replace_all(&block_protected, |caps: &Captures| inline.push(&caps[0]))
        .into_owned();

    log::debug!(
        "Protected {} block and {} inline math literals",
        block.literals.len(),
        inline.literals.len()
    );

    ProtectedText {
        text: protected,
        block,
        inline,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protect_block_then_inline() {
        let protected = protect("Area $\\pi r^2$ and\n$$E = mc^2$$");
        assert_eq!(protected.block_literals(), ["$$E = mc^2$$"]);
        assert_eq!(protected.inline_literals(), ["$\\pi r^2$"]);
        assert_eq!(
            protected.text(),
            "Area MATHINLINE0MATHINLINE and\nMATHBLOCK0MATHBLOCK"
        );
    }

    #[test]
    fn test_block_spans_lines() {
        let protected = protect("$$\n\\int_0^1 x\\,dx\n$$");
        assert_eq!(protected.block_literals(), ["$$\n\\int_0^1 x\\,dx\n$$"]);
        assert!(protected.inline_literals().is_empty());
    }

    #[test]
    fn test_block_takes_precedence_over_inline() {
        let protected = protect("$$a$b$$");
        assert_eq!(protected.block_literals(), ["$$a$b$$"]);
        assert!(protected.inline_literals().is_empty());

        let restored = protected.restore(protected.text(), 0).unwrap();
        assert_eq!(restored, "$$a$b$$");
    }

    #[test]
    fn test_non_greedy_matches_in_order() {
        let protected = protect("$a$ text $b$ and $$c$$ then $$d$$");
        assert_eq!(protected.block_literals(), ["$$c$$", "$$d$$"]);
        assert_eq!(protected.inline_literals(), ["$a$", "$b$"]);
    }

    #[test]
    fn test_sentinels_have_no_markdown_characters() {
        let protected = protect("$x_1 * y_2$ and $$\\frac{a}{b}$$");
        assert!(protected
            .text()
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == ' '));
    }

    #[test]
    fn test_restore_is_byte_identical() {
        let source = "Inline $a_1 * b_2 < c$ and $$\\sum_{i=0}^n i^2$$";
        let protected = protect(source);
        let html = format!("<p>{}</p>", protected.text());
        let restored = protected.restore(&html, 0).unwrap();
        assert_eq!(restored, format!("<p>{}</p>", source));
    }

    #[test]
    fn test_inline_literal_containing_block_sentinel() {
        let source = "$a $$b$$ c$";
        let protected = protect(source);
        assert_eq!(protected.block_literals(), ["$$b$$"]);
        assert_eq!(protected.inline_literals(), ["$a MATHBLOCK0MATHBLOCK c$"]);
        assert_eq!(protected.restore(protected.text(), 0).unwrap(), source);
    }

    #[test]
    fn test_stem_avoids_user_text() {
        let source = "MATHBLOCK0MATHBLOCK is literal text, $$x$$ is math";
        let protected = protect(source);
        assert!(protected.text().contains("MATHBLOCKX0MATHBLOCKX"));
        assert_eq!(protected.restore(protected.text(), 0).unwrap(), source);
    }

    #[test]
    fn test_unmatched_dollar_is_left_alone() {
        let protected = protect("Costs $5 today");
        assert!(protected.inline_literals().is_empty());
        assert_eq!(protected.text(), "Costs $5 today");
    }

    #[test]
    fn test_many_literals_restore_exactly() {
        let source: String = (0..12).map(|i| format!("${}$ ", i)).collect();
        let protected = protect(&source);
        assert_eq!(protected.inline_literals().len(), 12);
        assert_eq!(protected.restore(protected.text(), 0).unwrap(), source);
    }

    #[test]
    fn test_digits_between_inline_formulas() {
        let source = "Values $a$ and $b$0$c$ here";
        let protected = protect(source);
        assert_eq!(protected.inline_literals(), ["$a$", "$b$", "$c$"]);
        assert!(protected
            .text()
            .contains("MATHINLINE1MATHINLINE0MATHINLINE2MATHINLINE"));
        assert_eq!(protected.restore(protected.text(), 0).unwrap(), source);
    }

    #[test]
    fn test_digits_between_block_formulas() {
        let source = "$$a$$ $$b$$0$$c$$";
        let protected = protect(source);
        assert_eq!(protected.block_literals(), ["$$a$$", "$$b$$", "$$c$$"]);
        assert_eq!(protected.restore(protected.text(), 0).unwrap(), source);
    }

    #[test]
    fn test_inline_stem_avoids_block_literals() {
        let source = "$$\\text{MATHINLINE}$$ and $x$";
        let protected = protect(source);
        assert!(protected.text().contains("MATHINLINEX0MATHINLINEX"));
        assert_eq!(protected.restore(protected.text(), 0).unwrap(), source);
    }

    #[test]
    fn test_literal_with_replacement_syntax_is_inserted_verbatim() {
        let source = "$x_$1 + ${name}$";
        let protected = protect(source);
        assert_eq!(protected.restore(protected.text(), 0).unwrap(), source);
    }

    #[test]
    fn test_leftover_sentinel_is_error() {
        let protected = protect("$x$");
        let mangled = "<p>MATHINLINE<em>0</em>MATHINLINE</p>";
        let err = protected.restore(mangled, 4).unwrap_err();
        assert!(matches!(err, Error::MarkdownRender { index: 4, .. }));
    }
}
