//! Retrieve documents from a location and hand them out as lines.

use flate2::bufread::{DeflateDecoder, GzDecoder};
use reqwest::header::CONTENT_ENCODING;
use reqwest::{Response, StatusCode};
use std::io::Read;
use std::path::PathBuf;
use tracing::{debug, trace};
use url::Url;

mod utils;

use utils::{http_get, split_lines};

#[derive(Debug, thiserror::Error)]
pub enum RetrievalError {
    /// Location is not a valid url.
    #[error("invalid location {0:?}: {1}")]
    InvalidLocation(String, #[source] url::ParseError),

    /// Url scheme we do not know how to open.
    #[error("unsupported url scheme {0:?}")]
    UnsupportedScheme(String),

    /// File url naming a remote host or otherwise not a local path.
    #[error("file url is not a local path: {0:?}")]
    NotLocalFile(String),

    /// Http request ended with non-200 status.
    ///
    /// * 0: url.
    /// * 1: status code.
    #[error("bad response code {1} in http request on: {0:?}")]
    BadStatus(String, StatusCode),

    /// Connection or protocol failure.
    #[error("http request failed")]
    Request(#[from] reqwest::Error),

    /// Local read or decompression failure.
    #[error("failed to read document")]
    Io(#[from] std::io::Error),

    /// Compressed body in a format we can not decode.
    #[error("unsupported http response encoding format: {0}")]
    UnsupportedEncoding(String),
}

/// Fetch the document at `location` and return its lines, in order.
///
/// `http` and `https` urls are requested once with no retry; `file` urls are
/// read from the local filesystem.
///
/// # Errors
///
/// When the location is malformed or anything fails while reading it.
#[tracing::instrument]
pub async fn fetch_lines(location: &str) -> Result<Vec<String>, RetrievalError> {
    let url = Url::parse(location)
        .map_err(|e| RetrievalError::InvalidLocation(location.to_owned(), e))?;

    let data = match url.scheme() {
        "http" | "https" => fetch_http(url).await?,
        "file" => {
            let path = file_path(&url)?;
            debug!("read document from file {path:?}");
            tokio::fs::read(path).await?
        }
        v => return Err(RetrievalError::UnsupportedScheme(v.to_owned())),
    };

    // Invalid utf-8 sequences become U+FFFD whatever the source or encoding.
    let text = String::from_utf8_lossy(data.as_slice());
    let lines = split_lines(&text);
    debug!("fetched {} lines", lines.len());
    Ok(lines)
}

async fn fetch_http(url: Url) -> Result<Vec<u8>, RetrievalError> {
    debug!("fetch document on url {url}");
    let target = url.to_string();
    let resp = http_get(url).await?;
    if resp.status() != StatusCode::OK {
        debug!("bad response status: {}", resp.status());
        return Err(RetrievalError::BadStatus(target, resp.status()));
    }
    decompress_response(resp).await
}

fn file_path(url: &Url) -> Result<PathBuf, RetrievalError> {
    url.to_file_path()
        .map_err(|_| RetrievalError::NotLocalFile(url.to_string()))
}

/// Body bytes of `resp`, decompressed according to its content encoding.
async fn decompress_response(resp: Response) -> Result<Vec<u8>, RetrievalError> {
    let encoding = match resp.headers().get(CONTENT_ENCODING) {
        Some(v) => Some(
            v.to_str()
                .map_err(|_| RetrievalError::UnsupportedEncoding(format!("{v:?}")))?
                .to_owned(),
        ),
        None => None,
    };
    trace!("response encoding: {encoding:?}");

    let b = resp.bytes().await?;
    let data = match encoding.as_deref() {
        Some("gzip") => {
            let mut d = GzDecoder::new(&b[..]);
            let mut data = vec![];
            d.read_to_end(&mut data)?;
            data
        }
        Some("deflate") => {
            let mut d = DeflateDecoder::new(&b[..]);
            let mut data = vec![];
            d.read_to_end(&mut data)?;
            data
        }
        Some("identity") | None => b.to_vec(),
        Some(v) => return Err(RetrievalError::UnsupportedEncoding(v.to_owned())),
    };

    Ok(data)
}
