//! Recursive descent parser over [Token]s.
//!
//! ```console
//! document ::= tag
//! tag      ::= OpenTag content CloseTag    ; names of both ends are equal
//! content  ::= (text | tag)*
//! text     ::= TextContent
//! ```
//!
//! The kind of the next token alone decides which rule applies, so one token
//! of lookahead is enough and the cursor never moves backwards. Nested `tag`
//! rules are tracked on an explicit stack rather than by recursion.

use crate::error::ParserError;
use crate::token::{Token, TokenKind};
use crate::tree::{Node, TagNode, TextNode};
use std::iter::Peekable;
use std::vec::IntoIter;
use tracing::{debug, trace};

/// Build a tree of [Node]s out of [Token]s.
///
/// Tokens are consumed left to right with one token of lookahead. Parsing
/// stops at the first violation.
pub struct Parser {
    /// Cursor on tokens not consumed yet.
    tokens: Peekable<IntoIter<Token>>,

    /// Reject tokens after the root element.
    strict: bool,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens: tokens.into_iter().peekable(),
            strict: false,
        }
    }

    /// Enable or disable end of input validation.
    ///
    /// Disabled by default: once the outermost tag is closed, whatever follows
    /// is ignored.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Run the process, returning the document root.
    pub fn parse(mut self) -> Result<Node, ParserError> {
        let root = self.document()?;

        let left = self.tokens.len();
        if left > 0 {
            if self.strict {
                return Err(ParserError::TrailingTokens { count: left });
            }
            debug!("ignored {left} token(s) after the root element");
        }

        Ok(root)
    }

    fn document(&mut self) -> Result<Node, ParserError> {
        if self.peek_kind() != Some(TokenKind::OpenTag) {
            return Err(ParserError::UnexpectedToken {
                found: self.tokens.next(),
            });
        }
        self.tag()
    }

    /// Parse a tag and everything nested in it.
    ///
    /// Open tags are kept in `frames` instead of the call stack, so the nesting
    /// depth is only bounded by memory.
    ///
    /// The caller shall ensure the next token is an [TokenKind::OpenTag].
    fn tag(&mut self) -> Result<Node, ParserError> {
        let mut frames: Vec<Frame> = vec![];
        self.enter(&mut frames)?;

        loop {
            match self.peek_kind() {
                Some(TokenKind::TextContent) => {
                    if let (Some(text), Some(frame)) = (self.tokens.next(), frames.last_mut()) {
                        frame.children.push(Node::Text(TextNode::new(text)));
                    }
                }
                Some(TokenKind::OpenTag) => self.enter(&mut frames)?,
                // Content of the innermost tag ends here, it must be closed now.
                Some(TokenKind::CloseTag) | None => {
                    let Some(frame) = frames.pop() else {
                        return Err(ParserError::UnexpectedToken { found: None });
                    };
                    let node = self.leave(frame)?;
                    match frames.last_mut() {
                        Some(parent) => parent.children.push(node),
                        None => return Ok(node),
                    }
                }
            }
        }
    }

    /// Consume an open tag and start collecting its children.
    fn enter(&mut self, frames: &mut Vec<Frame>) -> Result<(), ParserError> {
        let Some(open) = self.tokens.next() else {
            return Err(ParserError::UnexpectedToken { found: None });
        };
        trace!("enter tag {:?}", open.literal());
        frames.push(Frame {
            open,
            children: vec![],
        });
        Ok(())
    }

    /// Consume the closing tag of `frame`, which must carry the same name.
    fn leave(&mut self, frame: Frame) -> Result<Node, ParserError> {
        let Frame { open, children } = frame;
        match self.tokens.next() {
            Some(close)
                if close.kind() == TokenKind::CloseTag && close.literal() == open.literal() =>
            {
                trace!("leave tag {:?}", open.literal());
                Ok(Node::Tag(TagNode::new(open, close, children)))
            }
            found => Err(ParserError::UnmatchedTag {
                open: open.literal().to_owned(),
                found,
            }),
        }
    }

    fn peek_kind(&mut self) -> Option<TokenKind> {
        self.tokens.peek().map(Token::kind)
    }
}

/// A tag opened but not closed yet.
struct Frame {
    open: Token,
    children: Vec<Node>,
}

/// Parse `tokens` into a tree, ignoring tokens after the root element.
///
/// # Errors
///
/// When the tokens does not start with an opening tag, or any tag is not closed
/// by its own name.
pub fn parse(tokens: Vec<Token>) -> Result<Node, ParserError> {
    Parser::new(tokens).parse()
}
