/// Scanner on a single line.
///
/// Provide convienient APIs on walking through characters.
pub(crate) struct Scanner {
    /// Characters splitted.
    chars: Vec<char>,

    /// Current position.
    position: usize,
}

impl Scanner {
    pub(crate) fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            position: 0,
        }
    }

    /// Check the scanner process reached the end or not.
    pub(crate) fn done(&self) -> bool {
        self.position >= self.chars.len()
    }

    /// Get character at the current position, without advancing.
    pub(crate) fn curr(&self) -> Option<char> {
        self.chars.get(self.position).copied()
    }

    /// Move the position forward and return the character walked through.
    ///
    /// Return `None` if already finished.
    pub(crate) fn next(&mut self) -> Option<char> {
        let ch = self.curr()?;
        self.position += 1;
        Some(ch)
    }

    /// Advance until `target` is consumed.
    ///
    /// Return false if reached the end without seeing `target`.
    pub(crate) fn skip_past(&mut self, target: char) -> bool {
        while let Some(ch) = self.next() {
            if ch == target {
                return true;
            }
        }
        false
    }

    /// Collect chars from `start` to `end`, excluding end pos.
    ///
    /// The caller must ensure sizes not out of range.
    pub(crate) fn get_range(&self, start: usize, end: usize) -> String {
        self.chars[start..end].iter().collect()
    }

    /// Chars not consumed yet.
    pub(crate) fn rest(&self) -> String {
        self.get_range(self.position, self.chars.len())
    }

    pub(crate) fn position(&self) -> usize {
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walk_and_range() {
        let mut scanner = Scanner::new("<ab>c");
        assert_eq!(scanner.next(), Some('<'));
        assert_eq!(scanner.curr(), Some('a'));
        let start = scanner.position();
        assert!(scanner.skip_past('>'));
        assert_eq!(scanner.get_range(start, scanner.position() - 1), "ab");
        assert_eq!(scanner.rest(), "c");
        assert_eq!(scanner.next(), Some('c'));
        assert!(scanner.done());
        assert_eq!(scanner.next(), None);
    }

    #[test]
    fn test_skip_past_missing_target() {
        let mut scanner = Scanner::new("<ab");
        assert!(!scanner.skip_past('>'));
        assert!(scanner.done());
    }
}
