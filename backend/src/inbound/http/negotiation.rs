//! Response format negotiation from the `Accept` header.

use std::future::{Ready, ready};

use actix_web::http::header::ACCEPT;
use actix_web::{FromRequest, HttpRequest, dev::Payload};
use fragment_stream::STREAM_MEDIA_TYPE;

/// Representation requested by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseFormat {
    /// Partial-update payload addressed at regions of the current page.
    Stream,
    /// Full HTML document.
    Html,
}

impl ResponseFormat {
    /// Pick the format for an `Accept` header value.
    ///
    /// Any mention of the stream media type with a non-zero quality wins;
    /// everything else gets HTML.
    ///
    /// # Examples
    /// ```
    /// use backend::inbound::http::negotiation::ResponseFormat;
    ///
    /// assert_eq!(
    ///     ResponseFormat::from_accept(Some("text/vnd.turbo-stream.html, text/html;q=0.9")),
    ///     ResponseFormat::Stream,
    /// );
    /// assert_eq!(ResponseFormat::from_accept(Some("text/html")), ResponseFormat::Html);
    /// assert_eq!(ResponseFormat::from_accept(None), ResponseFormat::Html);
    /// ```
    #[must_use]
    pub fn from_accept(accept: Option<&str>) -> Self {
        let wants_stream = accept.is_some_and(|value| {
            value.split(',').any(|range| {
                let mut parts = range.split(';').map(str::trim);
                let media = parts.next().unwrap_or_default();
                media.eq_ignore_ascii_case(STREAM_MEDIA_TYPE)
                    && !parts.any(|param| is_zero_quality(param))
            })
        });
        if wants_stream { Self::Stream } else { Self::Html }
    }
}

fn is_zero_quality(param: &str) -> bool {
    param
        .strip_prefix("q=")
        .and_then(|q| q.trim().parse::<f32>().ok())
        .is_some_and(|q| q <= 0.0)
}

impl FromRequest for ResponseFormat {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let accept = req
            .headers()
            .get(ACCEPT)
            .and_then(|value| value.to_str().ok());
        ready(Ok(Self::from_accept(accept)))
    }
}
