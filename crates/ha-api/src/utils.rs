use reqwest::{Client, Error, Response};
use url::Url;

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/133.0.0.0 Safari/537.36";

pub(crate) async fn http_get(url: Url) -> Result<Response, Error> {
    Client::builder()
        .user_agent(USER_AGENT)
        .build()?
        .get(url)
        .send()
        .await
}

/// Split text into lines on `\n` or `\r\n`, the way a line reader does.
pub(crate) fn split_lines(text: &str) -> Vec<String> {
    text.lines().map(str::to_owned).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_lines() {
        assert_eq!(
            split_lines("<a>\r\nx\n\n</a>\n"),
            vec!["<a>", "x", "", "</a>"]
        );
        assert!(split_lines("").is_empty());
    }
}
