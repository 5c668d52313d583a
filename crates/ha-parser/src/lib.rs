//! Line based markup parsing.
//!
//! Raw lines go through the [lexer] into [Token]s, the [parser] builds a tree
//! of [Node]s out of them, and [search] answers structural queries on the tree.

mod error;
pub mod lexer;
pub mod parser;
mod scanner;
pub mod search;
pub mod token;
pub mod tree;

pub use error::{Error, ParserError, TokenizerError};
pub use lexer::tokenize;
pub use parser::{parse, Parser};
pub use search::{find_deepest_text, DeepestText};
pub use token::{Token, TokenKind};
pub use tree::{Node, TagNode, TextNode};

const OPEN: char = '<';
const CLOSE: char = '>';
const SLASH: char = '/';

/// Options applied when parsing a whole document.
#[derive(Clone, Copy, Debug, Default)]
pub struct ParseOptions {
    /// Reject tokens after the root element instead of ignoring them.
    pub strict: bool,
}

/// Tokenize `lines` and parse the result into a tree.
///
/// # Errors
///
/// The first tokenizer or parser error met, nothing is recovered.
#[tracing::instrument(level = "debug", skip(lines))]
pub fn parse_lines<I, S>(lines: I, options: ParseOptions) -> Result<Node, Error>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let tokens = tokenize(lines)?;
    let root = Parser::new(tokens).strict(options.strict).parse()?;
    Ok(root)
}
