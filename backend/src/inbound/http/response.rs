//! One response type for every page handler.
//!
//! Handlers decide *what* to answer; this module alone decides status codes,
//! media types and headers.

use actix_web::body::BoxBody;
use actix_web::http::header::{self, ContentType};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, Responder};
use fragment_stream::{STREAM_MEDIA_TYPE, StreamPayload};

/// Response kinds produced by page handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageResponse {
    /// `200` full HTML document.
    Page(String),
    /// `200` partial-update payload.
    Stream(StreamPayload),
    /// `422` re-rendered form markup.
    Invalid(String),
    /// `303 See Other` to the given location.
    Redirect(String),
}

impl Responder for PageResponse {
    type Body = BoxBody;

    fn respond_to(self, _req: &HttpRequest) -> HttpResponse<Self::Body> {
        match self {
            Self::Page(markup) => HttpResponse::Ok()
                .content_type(ContentType::html())
                .body(markup),
            Self::Stream(payload) => HttpResponse::Ok()
                .insert_header((header::CONTENT_TYPE, STREAM_MEDIA_TYPE))
                .insert_header((header::VARY, "Accept"))
                .body(payload.encode()),
            Self::Invalid(markup) => HttpResponse::build(StatusCode::UNPROCESSABLE_ENTITY)
                .content_type(ContentType::html())
                .body(markup),
            Self::Redirect(location) => HttpResponse::SeeOther()
                .insert_header((header::LOCATION, location))
                .finish(),
        }
    }
}
