//! Page-side controllers for the member directory.
//!
//! The browser half of the inline edit workflow, expressed as a library that
//! runs on a single-threaded cooperative loop (a tokio `LocalSet` or a
//! current-thread runtime):
//!
//! - [`FragmentFetcher`] requests partial-update payloads and submits forms.
//! - [`FragmentRenderer`] applies payloads to a [`Page`].
//! - [`ModalController`] owns one dialog surface from show until removal.
//! - [`Debouncer`] coalesces search keystrokes into one submission.
//! - [`EditFlow`] wires the pieces into the edit-in-a-dialog workflow.

mod debounce;
mod edit_flow;
mod fetcher;
mod modal;
mod page;
mod renderer;

pub use debounce::{DEFAULT_QUIET_PERIOD, Debouncer, FormSubmitter, SearchForm, StreamSearch};
pub use edit_flow::{EditFlow, EditFlowError};
pub use fetcher::{FetchError, FragmentFetcher, SubmitOutcome};
pub use modal::{ModalController, ModalState, ModalSurface, PageModal, SubmitEnd, SurfaceError};
pub use page::{Page, RegionHandle};
pub use renderer::{ApplyReport, FragmentRenderer};
