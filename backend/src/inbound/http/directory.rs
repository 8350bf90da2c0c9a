//! Directory index with country and city search.
//!
//! ```text
//! GET /?q[country_cont]=india&q[city_cont]=pune
//! ```

use actix_web::{get, web};
use serde::Deserialize;

use crate::domain::DirectoryFilter;
use crate::inbound::http::ApiResult;
use crate::inbound::http::negotiation::ResponseFormat;
use crate::inbound::http::response::PageResponse;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::views::{self, MEMBER_LIST, layout};
use fragment_stream::StreamPayload;

/// Search parameters; both match case-insensitively as substrings.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    #[serde(rename = "q[country_cont]", default)]
    pub country: Option<String>,
    #[serde(rename = "q[city_cont]", default)]
    pub city: Option<String>,
}

/// List members, filtered by the search parameters.
///
/// Stream requests get only the replaced result list so a debounced search
/// never reloads the page.
#[get("/")]
pub async fn index(
    state: web::Data<HttpState>,
    session: SessionContext,
    format: ResponseFormat,
    query: web::Query<SearchParams>,
) -> ApiResult<PageResponse> {
    let params = query.into_inner();
    let filter = DirectoryFilter::new(params.country.as_deref(), params.city.as_deref());
    let members = state.members.list_members(&filter).await?;

    match format {
        ResponseFormat::Stream => Ok(PageResponse::Stream(StreamPayload::replace(
            views::target(MEMBER_LIST)?,
            views::directory::member_list(&members),
        ))),
        ResponseFormat::Html => {
            let viewer = session.member_id()?;
            let body = views::directory::index(&members, &filter);
            Ok(PageResponse::Page(layout::page("Members", viewer, &body)))
        }
    }
}
