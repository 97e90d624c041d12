//! Abstract syntax tree for wiki markup.
//!
//! Nodes are plain data built once per conversion and consumed by the
//! renderer. Ownership is strictly tree-shaped.

/// A parsed document: an ordered sequence of paragraphs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Article {
    pub paragraphs: Vec<Paragraph>,
}

/// One top-level block construct.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "kind", content = "content", rename_all = "snake_case")
)]
pub enum Paragraph {
    /// A line holding only whitespace.
    Blank,
    /// Inline text up to the end of the line.
    Text(TextParagraph),
    /// `h1.` to `h6.`
    Heading(Heading),
    /// `-`/`*` (unordered) or `#` (ordered) lines.
    List(List),
    /// `----`
    Rule,
    /// `!path!` or `!path|alt!`
    Image(Image),
    /// `bq. text`
    Blockquote(Quote),
    /// Reserved. The parser never produces tables.
    Table,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Heading {
    /// Heading level, 1 to 6.
    pub level: u8,
    /// Literal heading text (not parsed for inline formatting).
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Quote {
    pub text: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ListKind {
    Unordered,
    Ordered,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct List {
    pub kind: ListKind,
    pub items: Vec<ListItem>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ListItem {
    pub parts: Vec<TextPart>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TextParagraph {
    pub parts: Vec<TextPart>,
}

/// Inline formatting style.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Style {
    /// `*text*`
    Bold,
    /// `+text+`
    Italic,
    /// `_text_`
    Underline,
    /// `-text-`
    Strikethrough,
    /// `^text^`
    Superscript,
    /// `~text~`
    Subscript,
}

impl Style {
    /// All styles, in the order the parser tries them.
    pub const ALL: [Style; 6] = [
        Style::Bold,
        Style::Italic,
        Style::Underline,
        Style::Strikethrough,
        Style::Superscript,
        Style::Subscript,
    ];

    /// The delimiter character that opens and closes a span of this style.
    #[must_use]
    pub fn delimiter(self) -> char {
        match self {
            Style::Bold => '*',
            Style::Italic => '+',
            Style::Underline => '_',
            Style::Strikethrough => '-',
            Style::Superscript => '^',
            Style::Subscript => '~',
        }
    }

    /// Style opened by the given delimiter character.
    #[must_use]
    pub fn from_delimiter(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|style| style.delimiter() == c)
    }
}

/// One unit of inline content. Formatted parts nest recursively.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum TextPart {
    Plain {
        text: String,
    },
    Formatted {
        style: Style,
        parts: Vec<TextPart>,
    },
    Link(Link),
}

impl TextPart {
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        TextPart::Plain { text: text.into() }
    }

    #[must_use]
    pub fn formatted(style: Style, parts: Vec<TextPart>) -> Self {
        TextPart::Formatted { style, parts }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ImageKind {
    /// Resolved against the configured image base path.
    Relative,
    /// `http://`, `https://` or protocol-relative `//`.
    External,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Image {
    pub kind: ImageKind,
    pub path: String,
    /// Alternative text, empty when not given.
    pub alt: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum LinkKind {
    /// `[url]` or `[text|url]`
    External,
    /// `[attach:file]`
    Attachment,
    /// `[a:name]`
    AnchorDefinition,
    /// `[goto:text|name]`
    AnchorReference,
    /// `[mailto:address]`
    Email,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Link {
    pub kind: LinkKind,
    /// URL, attachment path, anchor name or email address.
    pub target: String,
    /// Display text, empty for anchor definitions.
    pub text: String,
}

impl Link {
    #[must_use]
    pub fn new(kind: LinkKind, target: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            kind,
            target: target.into(),
            text: text.into(),
        }
    }
}
