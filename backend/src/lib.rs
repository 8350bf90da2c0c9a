//! Developer community directory: member pages, search and inline profile
//! editing served as full pages or partial-update fragments.

pub mod domain;
#[cfg(feature = "example-data")]
pub mod example_data;
pub mod inbound;
pub mod middleware;
pub mod outbound;

pub use domain::TraceId;
pub use middleware::Trace;
