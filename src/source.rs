/*!
# Document Sources

Loads the JSON document to search, either over HTTP or from a local file.

The HTTP fetch is a single blocking `GET` bounded by a request timeout. Any
transport failure, non-2xx status, or body that is not valid JSON is returned
as a [`SourceError`]; nothing is retried.
*/
use log::{debug, info};
use serde_json::Value;
use std::error::Error;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// The document searched when no other source is given.
pub const DEFAULT_URL: &str = "https://jsonplaceholder.typicode.com/posts";

/// Request timeout applied to HTTP fetches unless overridden.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Represents errors that can occur while loading a document.
#[derive(Debug)]
pub enum SourceError {
    /// The request could not be built, sent, or completed (including
    /// timeouts and invalid URLs).
    Request(reqwest::Error),
    /// The server answered with a non-success status.
    Status {
        /// The requested URL
        url: String,
        /// The status code returned
        status: reqwest::StatusCode,
    },
    /// A local file could not be read.
    Read {
        /// The file that was requested
        path: PathBuf,
        /// The underlying I/O error
        source: std::io::Error,
    },
    /// The document body is not valid JSON.
    Parse(serde_json::Error),
}

impl Error for SourceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Request(err) => Some(err),
            Self::Status { .. } => None,
            Self::Read { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
        }
    }
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Request(_) => write!(f, "HTTP request failed"),
            Self::Status { url, status } => {
                write!(f, "GET {url} returned {status}")
            }
            Self::Read { path, .. } => {
                write!(f, "Failed to read file {}", path.display())
            }
            Self::Parse(_) => write!(f, "Failed to parse JSON"),
        }
    }
}

impl From<reqwest::Error> for SourceError {
    fn from(err: reqwest::Error) -> Self {
        Self::Request(err)
    }
}

impl From<serde_json::Error> for SourceError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err)
    }
}

/// Where the document to search comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Fetch the document with an HTTP `GET`.
    Url {
        /// Address of the document
        url: String,
        /// Upper bound on the whole request
        timeout: Duration,
    },
    /// Read the document from disk.
    File(PathBuf),
}

impl Default for Source {
    fn default() -> Self {
        Self::Url {
            url: DEFAULT_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Url { url, .. } => write!(f, "{url}"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

impl Source {
    /// Load and parse the document.
    ///
    /// # Errors
    ///
    /// Returns a [`SourceError`] if the document cannot be retrieved or is not
    /// valid JSON.
    pub fn load(&self) -> Result<Value, SourceError> {
        match self {
            Self::Url { url, timeout } => fetch_json(url, *timeout),
            Self::File(path) => read_json(path),
        }
    }
}

/// Download a JSON document with a blocking `GET`.
///
/// # Errors
///
/// Returns [`SourceError::Request`] on transport failure or timeout,
/// [`SourceError::Status`] on a non-2xx response, and
/// [`SourceError::Parse`] if the body is not JSON.
pub fn fetch_json(url: &str, timeout: Duration) -> Result<Value, SourceError> {
    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()?;
    fetch_with(&client, url)
}

/// Download a JSON document using an already configured client.
///
/// # Errors
///
/// See [`fetch_json`].
pub fn fetch_with(
    client: &reqwest::blocking::Client,
    url: &str,
) -> Result<Value, SourceError> {
    info!("Downloading JSON from {url} ...");

    let response = client.get(url).send()?;

    let status = response.status();
    debug!("Received {status} from {url}");
    if !status.is_success() {
        return Err(SourceError::Status {
            url: url.to_string(),
            status,
        });
    }

    let body = response.text()?;
    debug!("Read {} bytes from {url}", body.len());
    Ok(serde_json::from_str(&body)?)
}

/// Read a JSON document from a local file.
///
/// # Errors
///
/// Returns [`SourceError::Read`] if the file cannot be read and
/// [`SourceError::Parse`] if it is not JSON.
pub fn read_json(path: &Path) -> Result<Value, SourceError> {
    info!("Reading JSON from {} ...", path.display());

    let content = std::fs::read_to_string(path).map_err(|source| {
        SourceError::Read {
            path: path.to_path_buf(),
            source,
        }
    })?;
    Ok(serde_json::from_str(&content)?)
}
