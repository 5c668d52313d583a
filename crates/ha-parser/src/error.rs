use crate::token::Token;

/// Malformed tag syntax found when tokenizing.
///
/// `line` is the 1-based physical line number, `content` the trimmed line.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TokenizerError {
    /// No `>` after the opening `<` or `</`.
    #[error("malformed tag: missing closing delimiter on line {line}: {content:?}")]
    MissingClosingDelimiter { line: usize, content: String },

    /// `<>` or `</>`.
    #[error("malformed tag: empty tag name on line {line}: {content:?}")]
    EmptyTagName { line: usize, content: String },
}

/// Grammar violation found when parsing tokens.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParserError {
    /// An opening tag is required here.
    ///
    /// `found` is `None` when the input ended.
    #[error("malformed document: expected an opening tag, found {}", describe(.found))]
    UnexpectedToken { found: Option<Token> },

    /// Closing tag missing, premature or not matching the open one.
    #[error("malformed document: tag <{open}> closed by {}", describe(.found))]
    UnmatchedTag { open: String, found: Option<Token> },

    /// Tokens left after the outermost closing tag, only in strict mode.
    #[error("malformed document: {count} token(s) after the root element")]
    TrailingTokens { count: usize },
}

fn describe(token: &Option<Token>) -> String {
    match token {
        Some(v) => format!("{:?}", v.to_string()),
        None => "end of input".to_owned(),
    }
}

/// Any failure of the tokenize-then-parse pipeline.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Tokenizer(#[from] TokenizerError),

    #[error(transparent)]
    Parser(#[from] ParserError),
}
