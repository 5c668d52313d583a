use std::fmt;

/// All kinds of tokens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    /// Tag head.
    ///
    /// `<$name>`
    OpenTag,

    /// Tag tail.
    ///
    /// `</$name>`
    CloseTag,

    /// Plain text, one whole line.
    TextContent,
}

/// A lexical unit produced from exactly one input line.
///
/// For tag tokens the literal is the bare tag name, angle brackets and the
/// leading slash never appear in it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    kind: TokenKind,
    literal: String,
}

impl Token {
    pub fn open_tag(name: impl Into<String>) -> Self {
        Self {
            kind: TokenKind::OpenTag,
            literal: name.into(),
        }
    }

    pub fn close_tag(name: impl Into<String>) -> Self {
        Self {
            kind: TokenKind::CloseTag,
            literal: name.into(),
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self {
            kind: TokenKind::TextContent,
            literal: content.into(),
        }
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Tag name or text content.
    pub fn literal(&self) -> &str {
        self.literal.as_str()
    }
}

impl fmt::Display for Token {
    /// Render the token back in its markup form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::OpenTag => write!(f, "<{}>", self.literal),
            TokenKind::CloseTag => write!(f, "</{}>", self.literal),
            TokenKind::TextContent => f.write_str(self.literal.as_str()),
        }
    }
}
