//! Keystroke coalescing for the directory search form.

use std::rc::Rc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::task::{JoinHandle, spawn_local};
use tokio::time::sleep;
use tracing::{debug, error};
use url::form_urlencoded;

use crate::fetcher::FragmentFetcher;
use crate::page::Page;
use crate::renderer::FragmentRenderer;

/// Quiet period applied when none is configured.
pub const DEFAULT_QUIET_PERIOD: Duration = Duration::from_millis(500);

/// Receives the form once input has settled.
#[async_trait(?Send)]
pub trait FormSubmitter<T> {
    /// Submit the latest form state.
    async fn submit(&self, form: T);
}

/// Submits a form once no new input arrived for the quiet period.
///
/// Each call to [`Debouncer::on_input`] cancels the pending timer and starts
/// a new one, so a burst of input yields one submission carrying the last
/// form. A submission that already started is never cancelled.
///
/// Timers are spawned with [`spawn_local`], so the debouncer must be driven
/// from inside a tokio `LocalSet`.
pub struct Debouncer<T: 'static> {
    quiet: Duration,
    submitter: Rc<dyn FormSubmitter<T>>,
    pending: Option<JoinHandle<()>>,
}

impl<T: 'static> Debouncer<T> {
    /// Debounce submissions to `submitter` with [`DEFAULT_QUIET_PERIOD`].
    #[must_use]
    pub fn new(submitter: Rc<dyn FormSubmitter<T>>) -> Self {
        Self {
            quiet: DEFAULT_QUIET_PERIOD,
            submitter,
            pending: None,
        }
    }

    /// Override the quiet period.
    #[must_use]
    pub const fn with_quiet_period(mut self, quiet: Duration) -> Self {
        self.quiet = quiet;
        self
    }

    /// Record an input event carrying the current form state.
    pub fn on_input(&mut self, form: T) {
        self.cancel();
        let submitter = Rc::clone(&self.submitter);
        let quiet = self.quiet;
        self.pending = Some(spawn_local(async move {
            sleep(quiet).await;
            // Detached so a later abort cannot interrupt the request.
            drop(spawn_local(async move {
                submitter.submit(form).await;
            }));
        }));
    }

    /// Whether a timer is waiting to fire.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Drop the pending timer without submitting.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl<T: 'static> Drop for Debouncer<T> {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Directory search filters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchForm {
    /// Substring matched against the member's country.
    pub country: String,
    /// Substring matched against the member's city.
    pub city: String,
}

impl SearchForm {
    /// Query pairs understood by the directory index.
    #[must_use]
    pub fn query_pairs(&self) -> [(&'static str, &str); 2] {
        [
            ("q[country_cont]", self.country.as_str()),
            ("q[city_cont]", self.city.as_str()),
        ]
    }

    /// Encoded query string, without the leading `?`.
    #[must_use]
    pub fn to_query(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.query_pairs())
            .finish()
    }
}

/// Submits search forms to the directory index and applies the result.
#[derive(Debug, Clone)]
pub struct StreamSearch {
    fetcher: FragmentFetcher,
    page: Page,
    renderer: FragmentRenderer,
    path: String,
}

impl StreamSearch {
    /// Search against `path` and render into `page`.
    #[must_use]
    pub fn new(fetcher: FragmentFetcher, page: Page, path: impl Into<String>) -> Self {
        Self {
            fetcher,
            page,
            renderer: FragmentRenderer,
            path: path.into(),
        }
    }
}

#[async_trait(?Send)]
impl FormSubmitter<SearchForm> for StreamSearch {
    async fn submit(&self, form: SearchForm) {
        let path = format!("{}?{}", self.path, form.to_query());
        match self.fetcher.fetch(&path).await {
            Ok(payload) => {
                let report = self.renderer.apply(&self.page, &payload);
                debug!(
                    applied = report.applied,
                    skipped = report.skipped,
                    "search results rendered"
                );
            }
            Err(err) => error!(error = %err, path = %path, "search request failed"),
        }
    }
}
