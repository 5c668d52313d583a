use crate::token::Token;
use std::fmt::Write;

/// A node in the parsed document.
///
/// The set of node kinds is closed: a matched tag pair owning its children, or
/// a single line of text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    Tag(TagNode),
    Text(TextNode),
}

/// Matched `<name>` and `</name>` with everything between them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TagNode {
    open: Token,
    close: Token,
    children: Vec<Node>,
}

/// Text content, a leaf.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextNode {
    token: Token,
}

impl TagNode {
    /// The caller shall ensure `open` and `close` are a matching pair.
    pub(crate) fn new(open: Token, close: Token, children: Vec<Node>) -> Self {
        debug_assert_eq!(open.literal(), close.literal());
        Self {
            open,
            close,
            children,
        }
    }

    /// Tag name, shared by both ends.
    pub fn name(&self) -> &str {
        self.open.literal()
    }

    pub fn open(&self) -> &Token {
        &self.open
    }

    pub fn close(&self) -> &Token {
        &self.close
    }

    pub fn children(&self) -> &[Node] {
        self.children.as_slice()
    }
}

impl Drop for TagNode {
    /// Flatten descendants before dropping, the generated drop glue would
    /// recurse once per nesting level.
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(node) = pending.pop() {
            if let Node::Tag(mut tag) = node {
                pending.append(&mut tag.children);
            }
        }
    }
}

impl TextNode {
    pub(crate) fn new(token: Token) -> Self {
        Self { token }
    }

    pub fn text(&self) -> &str {
        self.token.literal()
    }
}

impl Node {
    /// Children of a tag node, `None` for text.
    pub fn children(&self) -> Option<&[Node]> {
        match self {
            Node::Tag(tag) => Some(tag.children()),
            Node::Text(..) => None,
        }
    }

    /// Render the tree one node per line, two spaces of indent per level.
    ///
    /// ```console
    /// Node(tag=a)
    ///   Node(tag=b)
    ///     Text: "hello"
    /// ```
    pub fn dump(&self) -> String {
        let mut out = String::new();
        let mut stack = vec![(self, 0usize)];
        while let Some((node, indent)) = stack.pop() {
            let pad = "  ".repeat(indent);
            // Writing to a String never fails.
            let _ = match node {
                Node::Tag(tag) => {
                    stack.extend(tag.children().iter().rev().map(|x| (x, indent + 1)));
                    writeln!(out, "{pad}Node(tag={})", tag.name())
                }
                Node::Text(text) => writeln!(out, "{pad}Text: {:?}", text.text()),
            };
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Node {
        Node::Tag(TagNode::new(
            Token::open_tag("a"),
            Token::close_tag("a"),
            vec![
                Node::Tag(TagNode::new(
                    Token::open_tag("b"),
                    Token::close_tag("b"),
                    vec![Node::Text(TextNode::new(Token::text("hello")))],
                )),
                Node::Text(TextNode::new(Token::text("bye"))),
            ],
        ))
    }

    #[test]
    fn test_accessors() {
        let root = sample();
        let Node::Tag(tag) = &root else {
            panic!("root shall be a tag");
        };
        assert_eq!(tag.name(), "a");
        assert_eq!(tag.open(), &Token::open_tag("a"));
        assert_eq!(tag.close(), &Token::close_tag("a"));
        assert_eq!(tag.children().len(), 2);
        assert!(matches!(tag.children()[1], Node::Text(..)));
        assert_eq!(tag.children()[1].children(), None);
    }

    #[test]
    fn test_drop_deep_tree() {
        let mut node = Node::Text(TextNode::new(Token::text("deep")));
        for _ in 0..100_000 {
            node = Node::Tag(TagNode::new(
                Token::open_tag("d"),
                Token::close_tag("d"),
                vec![node],
            ));
        }
        drop(node);
    }

    #[test]
    fn test_dump() {
        assert_eq!(
            sample().dump(),
            "Node(tag=a)\n  Node(tag=b)\n    Text: \"hello\"\n  Text: \"bye\"\n"
        );
    }
}
