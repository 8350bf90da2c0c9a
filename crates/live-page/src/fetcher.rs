//! Same-origin fetches negotiated for partial-update payloads.
//!
//! This adapter owns transport details only: URL resolution, the `Accept`
//! header, status classification and payload decoding. Callers decide how to
//! react to failures; nothing here retries.

use fragment_stream::{DecodeError, STREAM_MEDIA_TYPE, StreamPayload};
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap};
use reqwest::{Client, StatusCode};
use thiserror::Error;
use url::Url;

const ACCEPT_STREAM: &str = "text/vnd.turbo-stream.html, text/html;q=0.9";

/// Failures surfaced by [`FragmentFetcher`].
#[derive(Debug, Error)]
pub enum FetchError {
    /// The path could not be resolved against the page origin.
    #[error("invalid path '{path}': {source}")]
    InvalidPath {
        /// Path supplied by the caller.
        path: String,
        /// Underlying URL parse failure.
        #[source]
        source: url::ParseError,
    },
    /// The resolved URL points at another origin.
    #[error("refusing cross-origin request to {url}")]
    CrossOrigin {
        /// The rejected URL.
        url: Url,
    },
    /// The server answered with a non-success status.
    #[error("request failed with status {status}")]
    Status {
        /// Status returned by the server.
        status: StatusCode,
    },
    /// A success response was not a partial-update payload.
    #[error("expected a stream payload, received '{content_type}'")]
    UnexpectedContentType {
        /// Content type returned by the server.
        content_type: String,
    },
    /// The request could not be sent or the body could not be read.
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),
    /// The body was not a valid stream payload.
    #[error("undecodable stream payload: {0}")]
    Decode(#[from] DecodeError),
}

/// Result of submitting an edit form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The server accepted the change and returned replacement fragments.
    Succeeded(StreamPayload),
    /// The server rejected the change and re-rendered the form.
    Rejected {
        /// Re-rendered form markup, including inline errors.
        markup: String,
    },
}

impl SubmitOutcome {
    /// Whether the submission was accepted.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded(_))
    }
}

/// Fetches stream payloads from the page's own origin.
///
/// # Examples
/// ```
/// use live_page::FragmentFetcher;
/// use url::Url;
///
/// let origin = Url::parse("http://localhost:8080/").expect("valid url");
/// let fetcher = FragmentFetcher::with_client(reqwest::Client::new(), origin);
/// assert!(fetcher.resolve("/edit_description").is_ok());
/// assert!(fetcher.resolve("https://elsewhere.example/").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct FragmentFetcher {
    client: Client,
    origin: Url,
}

impl FragmentFetcher {
    /// Build a fetcher with its own cookie-aware client.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Transport`] when the client cannot be built.
    pub fn new(origin: Url) -> Result<Self, FetchError> {
        let client = Client::builder().cookie_store(true).build()?;
        Ok(Self::with_client(client, origin))
    }

    /// Build a fetcher around an existing client, sharing its cookies.
    #[must_use]
    pub const fn with_client(client: Client, origin: Url) -> Self {
        Self { client, origin }
    }

    /// Resolve a path against the page origin, rejecting other origins.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::InvalidPath`] or [`FetchError::CrossOrigin`].
    pub fn resolve(&self, path: &str) -> Result<Url, FetchError> {
        let url = self
            .origin
            .join(path)
            .map_err(|source| FetchError::InvalidPath {
                path: path.to_owned(),
                source,
            })?;
        if url.origin() != self.origin.origin() {
            return Err(FetchError::CrossOrigin { url });
        }
        Ok(url)
    }

    /// Fetch a partial-update payload.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] for resolution, transport, status, content type
    /// or decoding failures.
    pub async fn fetch(&self, path: &str) -> Result<StreamPayload, FetchError> {
        let url = self.resolve(path)?;
        let response = self
            .client
            .get(url)
            .header(ACCEPT, ACCEPT_STREAM)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status { status });
        }
        ensure_stream(response.headers())?;
        let body = response.text().await?;
        Ok(StreamPayload::decode(&body)?)
    }

    /// Submit a form with `PATCH` and classify the response.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] unless the server answers with a stream payload
    /// or a `422` form re-render.
    pub async fn submit(
        &self,
        path: &str,
        fields: &[(&str, &str)],
    ) -> Result<SubmitOutcome, FetchError> {
        let url = self.resolve(path)?;
        let response = self
            .client
            .patch(url)
            .header(ACCEPT, ACCEPT_STREAM)
            .form(fields)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::UNPROCESSABLE_ENTITY {
            let markup = response.text().await?;
            return Ok(SubmitOutcome::Rejected { markup });
        }
        if !status.is_success() {
            return Err(FetchError::Status { status });
        }
        ensure_stream(response.headers())?;
        let body = response.text().await?;
        Ok(SubmitOutcome::Succeeded(StreamPayload::decode(&body)?))
    }
}

fn ensure_stream(headers: &HeaderMap) -> Result<(), FetchError> {
    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();
    if content_type.starts_with(STREAM_MEDIA_TYPE) {
        Ok(())
    } else {
        Err(FetchError::UnexpectedContentType {
            content_type: content_type.to_owned(),
        })
    }
}
