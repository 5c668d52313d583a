use crate::error::TokenizerError;
use crate::scanner::Scanner;
use crate::token::Token;
use crate::{CLOSE, OPEN, SLASH};
use tracing::{trace, warn};

/// Turn raw lines into [Token]s, one token per non-blank line.
pub struct Lexer {
    /// Number of the line currently scanning, 1-based.
    line: usize,

    /// Scanned tokens.
    tokens: Vec<Token>,
}

impl Default for Lexer {
    fn default() -> Self {
        Self::new()
    }
}

impl Lexer {
    pub fn new() -> Self {
        Self {
            line: 0,
            tokens: vec![],
        }
    }

    /// Run the process on all `lines`, in order.
    pub fn scan<I, S>(mut self, lines: I) -> Result<Vec<Token>, TokenizerError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            self.scan_line(line.as_ref())?;
        }
        trace!("scanned {} tokens from {} lines", self.tokens.len(), self.line);
        Ok(self.tokens)
    }

    /// Scan the next physical line.
    ///
    /// Blank lines still count in line numbers but produce no token.
    fn scan_line(&mut self, line: &str) -> Result<(), TokenizerError> {
        self.line += 1;
        let content = line.trim();
        if content.is_empty() {
            return Ok(());
        }

        let token = if content.starts_with(OPEN) {
            self.scan_tag(content)?
        } else {
            Token::text(content)
        };
        self.tokens.push(token);
        Ok(())
    }

    /// The caller shall ensure `content` starts with a `<`.
    ///
    /// ```console
    /// < / n a m e >
    ///     |       |
    ///     |       |-> terminator, position after it is scanner.position
    ///     |-> start
    /// ```
    fn scan_tag(&self, content: &str) -> Result<Token, TokenizerError> {
        let mut source = Scanner::new(content);
        source.next();

        let closing = source.curr() == Some(SLASH);
        if closing {
            source.next();
        }

        let start = source.position();
        if !source.skip_past(CLOSE) {
            return Err(TokenizerError::MissingClosingDelimiter {
                line: self.line,
                content: content.to_owned(),
            });
        }

        let name = source.get_range(start, source.position() - 1);
        if name.is_empty() {
            return Err(TokenizerError::EmptyTagName {
                line: self.line,
                content: content.to_owned(),
            });
        }

        if !source.done() {
            warn!(
                "line {}: ignored {:?} after tag {name:?}",
                self.line,
                source.rest()
            );
        }

        Ok(if closing {
            Token::close_tag(name)
        } else {
            Token::open_tag(name)
        })
    }
}

/// Tokenize `lines` into an ordered sequence of [Token]s.
///
/// # Errors
///
/// When a tag line is not terminated by `>` or has no name.
pub fn tokenize<I, S>(lines: I) -> Result<Vec<Token>, TokenizerError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Lexer::new().scan(lines)
}
