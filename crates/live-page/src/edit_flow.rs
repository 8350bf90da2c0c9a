//! The edit-in-a-dialog workflow.
//!
//! Opening an editor fetches the form fragment, renders it into the modal
//! mount and attaches a [`ModalController`]. Submitting sends the form; an
//! accepted change swaps the display fragment and tears the dialog down,
//! while a rejected change re-renders the form in place and keeps the dialog
//! open.

use fragment_stream::TargetId;
use thiserror::Error;
use tracing::{debug, error};

use crate::fetcher::{FetchError, FragmentFetcher, SubmitOutcome};
use crate::modal::{ModalController, PageModal, SubmitEnd, SurfaceError};
use crate::page::Page;
use crate::renderer::FragmentRenderer;

/// Failures while opening or submitting an editor.
#[derive(Debug, Error)]
pub enum EditFlowError {
    /// The editor fragment or the submission could not be fetched.
    #[error(transparent)]
    Fetch(#[from] FetchError),
    /// The dialog could not be presented.
    #[error(transparent)]
    Surface(#[from] SurfaceError),
    /// The editor payload left the modal mount empty.
    #[error("editor payload did not fill the '{id}' mount")]
    MissingMount {
        /// Identifier of the modal mount.
        id: String,
    },
}

/// Client-side driver for one page's inline editors.
#[derive(Debug, Clone)]
pub struct EditFlow {
    fetcher: FragmentFetcher,
    page: Page,
    renderer: FragmentRenderer,
    modal_mount: TargetId,
}

impl EditFlow {
    /// Drive editors on `page`, rendering dialogs into `modal_mount`.
    #[must_use]
    pub const fn new(fetcher: FragmentFetcher, page: Page, modal_mount: TargetId) -> Self {
        Self {
            fetcher,
            page,
            renderer: FragmentRenderer,
            modal_mount,
        }
    }

    /// Page the flow renders into.
    #[must_use]
    pub const fn page(&self) -> &Page {
        &self.page
    }

    /// Fetch the editor at `editor_path` and present it in a dialog.
    ///
    /// # Errors
    ///
    /// Returns [`EditFlowError`] when the fragment cannot be fetched, does
    /// not fill the modal mount, or the dialog cannot be shown. Nothing is
    /// left presented on error.
    pub async fn open(
        &self,
        editor_path: &str,
    ) -> Result<ModalController<PageModal>, EditFlowError> {
        let payload = self.fetcher.fetch(editor_path).await.inspect_err(|err| {
            error!(error = %err, path = editor_path, "editor fetch failed");
        })?;
        let report = self.renderer.apply(&self.page, &payload);
        debug!(applied = report.applied, skipped = report.skipped, "editor rendered");

        if self.page.resolve(&self.modal_mount).is_none() || self.page.is_vacant(&self.modal_mount)
        {
            return Err(EditFlowError::MissingMount {
                id: self.modal_mount.to_string(),
            });
        }
        let surface = PageModal::new(self.page.clone(), self.modal_mount.clone());
        Ok(ModalController::open(surface)?)
    }

    /// Submit the dialog's form to `action_path`.
    ///
    /// Returns the completion signal delivered to the dialog. On success the
    /// returned fragments are applied and the dialog is removed; on
    /// rejection the re-rendered form replaces the dialog contents.
    ///
    /// # Errors
    ///
    /// Returns [`EditFlowError::Fetch`] when the submission fails outright;
    /// the dialog stays open.
    pub async fn submit(
        &self,
        modal: &mut ModalController<PageModal>,
        action_path: &str,
        fields: &[(&str, &str)],
    ) -> Result<SubmitEnd, EditFlowError> {
        let outcome = self
            .fetcher
            .submit(action_path, fields)
            .await
            .inspect_err(|err| {
                error!(error = %err, path = action_path, "edit submission failed");
            })?;

        let end = SubmitEnd {
            success: outcome.is_success(),
        };
        match outcome {
            SubmitOutcome::Succeeded(payload) => {
                let report = self.renderer.apply(&self.page, &payload);
                debug!(applied = report.applied, skipped = report.skipped, "edit applied");
            }
            SubmitOutcome::Rejected { markup } => {
                if let Some(handle) = self.page.resolve(&self.modal_mount) {
                    self.page.replace(handle, &markup);
                }
            }
        }
        modal.submit_end(end);
        Ok(end)
    }
}
