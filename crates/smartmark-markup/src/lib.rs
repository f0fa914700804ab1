#![warn(missing_docs)]
//! `smartmark-markup` - data-driven markup configuration helpers for `smartmark-core`.
//!
//! This crate intentionally stays lightweight and does **not** depend on any parsing or
//! editor machinery. It provides small structs that hosts can use to configure the
//! markup-toggle engine in a data-driven way: delimiter pairs, the token sets trimmed
//! off a selection before wrapping, and the bracket-like pairs a selection grows over
//! when they sit directly outside it.

/// A markup delimiter pair, e.g. `**`/`**` for bold or `<!--`/`-->` for an HTML comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupPair {
    /// Opening delimiter inserted before the wrapped text.
    pub opening: String,
    /// Closing delimiter inserted after the wrapped text.
    pub closing: String,
}

impl MarkupPair {
    /// Create a pair from distinct opening and closing delimiters.
    pub fn new(opening: impl Into<String>, closing: impl Into<String>) -> Self {
        Self {
            opening: opening.into(),
            closing: closing.into(),
        }
    }

    /// Create a pair whose opening and closing delimiters are the same token.
    pub fn symmetric(token: impl Into<String>) -> Self {
        let token = token.into();
        Self {
            opening: token.clone(),
            closing: token,
        }
    }

    /// Bold: `**`/`**`.
    pub fn bold() -> Self {
        Self::symmetric("**")
    }

    /// Italics: `*`/`*`.
    pub fn italics() -> Self {
        Self::symmetric("*")
    }

    /// Strikethrough: `~~`/`~~`.
    pub fn strikethrough() -> Self {
        Self::symmetric("~~")
    }

    /// Highlight: `==`/`==`.
    pub fn highlight() -> Self {
        Self::symmetric("==")
    }

    /// Inline code: `` ` ``/`` ` `` (upgrades to a fenced block on multi-line use).
    pub fn inline_code() -> Self {
        Self::symmetric("`")
    }

    /// Inline math: `$`/`$` (upgrades to block math on multi-line use).
    pub fn inline_math() -> Self {
        Self::symmetric("$")
    }

    /// Comment: `%%`/`%%`.
    pub fn comment() -> Self {
        Self::symmetric("%%")
    }

    /// HTML comment: `<!--`/`-->`.
    pub fn html_comment() -> Self {
        Self::new("<!--", "-->")
    }

    /// Wikilink: `[[`/`]]`.
    pub fn wikilink() -> Self {
        Self::new("[[", "]]")
    }

    /// Markdown link: `[`/`]()`.
    pub fn link() -> Self {
        Self::new("[", "]()")
    }

    /// Image embed: `![`/`]()`.
    pub fn image() -> Self {
        Self::new("![", "]()")
    }

    /// Returns `true` for pairs whose multi-line form is inserted as standalone wrapping
    /// lines rather than wrapping each line: inline code, inline math, and both comment
    /// styles.
    pub fn is_block_style(&self) -> bool {
        matches!(self.opening.as_str(), "`" | "$" | "%%" | "<!--")
    }

    /// Returns `true` for pairs that get one padding space inserted on each side of the
    /// wrapped text: the comment pairs.
    pub fn needs_padding(&self) -> bool {
        matches!(self.opening.as_str(), "%%" | "<!--")
    }

    /// Returns `true` for pairs whose span expansion is delimited purely by whitespace
    /// instead of word boundaries: inline code and inline math. Token content may contain
    /// punctuation that word-boundary logic would split on.
    pub fn is_whitespace_delimited(&self) -> bool {
        matches!(self.opening.as_str(), "`" | "$")
    }

    /// The pair's standalone-line form for multi-line application: inline code becomes a
    /// code fence, inline math becomes block math, everything else keeps its own form.
    pub fn block_form(&self) -> Self {
        match self.opening.as_str() {
            "`" => Self::symmetric("```"),
            "$" => Self::symmetric("$$"),
            _ => self.clone(),
        }
    }

    /// Length of the opening delimiter in characters.
    pub fn opening_len(&self) -> usize {
        self.opening.chars().count()
    }

    /// Length of the closing delimiter in characters.
    pub fn closing_len(&self) -> usize {
        self.closing.chars().count()
    }
}

/// Token sets stripped off the start and end of a selection before markup is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrimConfig {
    /// Tokens repeatedly stripped from the start of the selection.
    pub before: Vec<String>,
    /// Tokens repeatedly stripped from the end of the selection.
    pub after: Vec<String>,
}

impl TrimConfig {
    /// The default markdown trim sets: heading prefixes, list and task markers, quote
    /// markers, and plain whitespace before the selection; whitespace after it.
    pub fn markdown() -> Self {
        let before = [
            "###### ", "##### ", "#### ", "### ", "## ", "# ", "- [ ] ", "- [x] ", "- ",
            "> ", ">", " ", "\n", "\t",
        ];
        let after = [" ", "\n", "\t"];
        Self {
            before: before.iter().map(|s| s.to_string()).collect(),
            after: after.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// The trim sets for one command invocation.
    ///
    /// Block-style pairs narrow the sets to exactly their own delimiters, so trimming
    /// never removes punctuation a code or comment span should preserve. Other pairs get
    /// their own delimiters appended to the defaults, so re-running a command on its own
    /// output strips the markup it produced. Special commands (no pair) keep the
    /// defaults.
    pub fn for_pair(&self, pair: Option<&MarkupPair>) -> Self {
        match pair {
            Some(p) if p.is_block_style() => Self {
                before: vec![p.opening.clone()],
                after: vec![p.closing.clone()],
            },
            Some(p) => {
                let mut cfg = self.clone();
                cfg.before.push(p.opening.clone());
                cfg.after.push(p.closing.clone());
                cfg
            }
            None => self.clone(),
        }
    }
}

impl Default for TrimConfig {
    fn default() -> Self {
        Self::markdown()
    }
}

/// A bracket-like pair a selection grows over when it sits directly outside the
/// selection, e.g. wiki brackets or quotes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurroundingPair {
    /// Characters expected immediately before the selection.
    pub opening: String,
    /// Characters expected immediately after the selection (may be empty for
    /// prefix-only tokens such as hashtags).
    pub closing: String,
    /// Shrink the grown span by one trailing character. Used for closing tokens that
    /// start with a space, which trimming would otherwise fight over.
    pub trim_last_space: bool,
}

impl SurroundingPair {
    /// Create a surrounding pair without the trailing-space adjustment.
    pub fn new(opening: impl Into<String>, closing: impl Into<String>) -> Self {
        Self {
            opening: opening.into(),
            closing: closing.into(),
            trim_last_space: false,
        }
    }

    /// Create a surrounding pair that shrinks the grown span by one trailing character.
    pub fn with_trimmed_space(opening: impl Into<String>, closing: impl Into<String>) -> Self {
        Self {
            opening: opening.into(),
            closing: closing.into(),
            trim_last_space: true,
        }
    }
}

/// The default set of pairs a selection grows over when they sit directly outside it.
pub fn surrounding_pairs() -> Vec<SurroundingPair> {
    vec![
        SurroundingPair::new("#", ""),
        SurroundingPair::new("[[", "]]"),
        SurroundingPair::new("[", "]"),
        SurroundingPair::new("(", ")"),
        SurroundingPair::new("\"", "\""),
        SurroundingPair::new("'", "'"),
        SurroundingPair::new("$", ""),
    ]
}
