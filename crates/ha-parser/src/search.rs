use crate::tree::{Node, TextNode};

/// The text node found deepest in a tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeepestText<'a> {
    /// The node itself.
    pub node: &'a TextNode,

    /// Distance from the root, root being 1.
    pub depth: usize,
}

impl<'a> DeepestText<'a> {
    pub fn text(&self) -> &'a str {
        self.node.text()
    }
}

/// Find the text node with the greatest depth below `root`.
///
/// Nodes are visited in pre-order, children in order. Only a strictly deeper
/// text replaces the current best, so among texts sharing the maximum depth the
/// first one visited wins.
///
/// Return `None` if the tree holds no text at all.
pub fn find_deepest_text(root: &Node) -> Option<DeepestText<'_>> {
    let mut best: Option<DeepestText<'_>> = None;
    let mut stack = vec![(root, 1usize)];

    while let Some((node, depth)) = stack.pop() {
        match node {
            Node::Text(text) => {
                if best.map_or(true, |x| depth > x.depth) {
                    best = Some(DeepestText { node: text, depth });
                }
            }
            // Reversed so the first child is popped first.
            Node::Tag(tag) => stack.extend(tag.children().iter().rev().map(|x| (x, depth + 1))),
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;
    use crate::parser::parse;

    fn tree(lines: &[&str]) -> Node {
        parse(tokenize(lines).unwrap()).unwrap()
    }

    #[test]
    fn test_depth_three() {
        let root = tree(&["<a>", "<b>", "hello", "</b>", "</a>"]);
        let found = find_deepest_text(&root).unwrap();
        assert_eq!(found.text(), "hello");
        assert_eq!(found.depth, 3);
    }

    #[test]
    fn test_first_wins_on_tie() {
        let root = tree(&["<a>", "<b>", "x", "</b>", "<c>", "y", "</c>", "</a>"]);
        let found = find_deepest_text(&root).unwrap();
        assert_eq!(found.text(), "x");
        assert_eq!(found.depth, 3);
    }

    #[test]
    fn test_deeper_later_sibling_wins() {
        let root = tree(&[
            "<a>", "shallow", "<b>", "mid", "</b>", "<c>", "<d>", "deep", "</d>", "</c>", "</a>",
        ]);
        let found = find_deepest_text(&root).unwrap();
        assert_eq!(found.text(), "deep");
        assert_eq!(found.depth, 4);
    }

    #[test]
    fn test_first_wins_across_subtrees() {
        let root = tree(&[
            "<html>", "<head>", "<title>", "first", "</title>", "</head>", "<body>", "<p>",
            "second", "</p>", "</body>", "</html>",
        ]);
        assert_eq!(find_deepest_text(&root).unwrap().text(), "first");
    }

    #[test]
    fn test_no_text() {
        let root = tree(&["<a>", "<b>", "</b>", "</a>"]);
        assert_eq!(find_deepest_text(&root), None);

        let root = tree(&["<a>", "</a>"]);
        assert_eq!(find_deepest_text(&root), None);
    }

    #[test]
    fn test_text_root() {
        let root = Node::Text(TextNode::new(crate::token::Token::text("alone")));
        let found = find_deepest_text(&root).unwrap();
        assert_eq!(found.text(), "alone");
        assert_eq!(found.depth, 1);
    }

    #[test]
    fn test_idempotent() {
        let root = tree(&["<a>", "one", "<b>", "two", "</b>", "</a>"]);
        let first = find_deepest_text(&root);
        let second = find_deepest_text(&root);
        assert_eq!(first, second);
        assert_eq!(first.unwrap().text(), "two");
    }
}
