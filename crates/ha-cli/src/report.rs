use anyhow::{Context, Result};
use ha_parser::DeepestText;
use serde::Serialize;

/// Outcome of one run, printed as plain text or json.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub(crate) struct Report {
    /// Location the document came from.
    pub(crate) location: String,

    /// Deepest text, if the document has any text.
    pub(crate) text: Option<String>,

    /// Depth of `text`, root being 1.
    pub(crate) depth: Option<usize>,
}

impl Report {
    pub(crate) fn new(location: impl Into<String>, deepest: Option<DeepestText<'_>>) -> Self {
        Self {
            location: location.into(),
            text: deepest.map(|x| x.text().to_owned()),
            depth: deepest.map(|x| x.depth),
        }
    }

    pub(crate) fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).context("when serializing report")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ha_parser::{find_deepest_text, parse_lines, ParseOptions};

    #[test]
    fn test_report_json() {
        let root = parse_lines(["<a>", "<b>", "hello", "</b>", "</a>"], ParseOptions::default())
            .unwrap();
        let report = Report::new("http://localhost/", find_deepest_text(&root));
        assert_eq!(report.text.as_deref(), Some("hello"));
        assert_eq!(
            report.to_json().unwrap(),
            r#"{"location":"http://localhost/","text":"hello","depth":3}"#
        );
    }

    #[test]
    fn test_report_without_text() {
        let root = parse_lines(["<a>", "<b>", "</b>", "</a>"], ParseOptions::default()).unwrap();
        let report = Report::new("http://localhost/", find_deepest_text(&root));
        assert_eq!(
            report.to_json().unwrap(),
            r#"{"location":"http://localhost/","text":null,"depth":null}"#
        );
    }
}
