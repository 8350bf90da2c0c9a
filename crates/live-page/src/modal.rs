//! Dialog lifecycle bound to one page element.
//!
//! A [`ModalController`] presents its surface when attached and tears it down
//! on explicit dismissal or on a successful form submission. Teardown hides
//! the surface and then removes it from the page; removal happens even when
//! hiding fails so no dead dialog lingers. A controller dropped while still
//! presenting performs the same teardown.

use fragment_stream::TargetId;
use thiserror::Error;
use tracing::{debug, warn};

use crate::page::Page;

/// Failure reported by a surface while changing visibility.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SurfaceError {
    /// The element backing the surface is no longer on the page.
    #[error("dialog element '{id}' is not on the page")]
    Missing {
        /// Identifier of the missing element.
        id: String,
    },
    /// The widget refused the transition.
    #[error("dialog widget failed: {message}")]
    Widget {
        /// Reason given by the widget.
        message: String,
    },
}

/// Visual widget driven by a [`ModalController`].
pub trait ModalSurface {
    /// Make the dialog visible.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError`] when the widget cannot be presented.
    fn show(&mut self) -> Result<(), SurfaceError>;

    /// Run the dialog's hide behaviour.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError`] when the widget cannot be hidden.
    fn hide(&mut self) -> Result<(), SurfaceError>;

    /// Detach the dialog element from the page. Must not fail.
    fn remove(&mut self);
}

/// Lifecycle states of a controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalState {
    /// Constructed but not yet attached.
    Detached,
    /// Surface presented.
    Shown,
    /// Hide behaviour ran; removal pending.
    Hidden,
    /// Element removed; terminal.
    Removed,
}

/// Completion signal of a form submitted from inside the dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitEnd {
    /// Whether the server accepted the submission.
    pub success: bool,
}

/// Owns a single dialog surface from attach until removal.
///
/// # Examples
/// ```
/// use fragment_stream::TargetId;
/// use live_page::{ModalController, ModalState, Page, PageModal, SubmitEnd};
///
/// let mount = TargetId::new("modal").expect("valid id");
/// let page = Page::new().with_region(mount.clone(), "<div id=\"modal\"><dialog></dialog></div>");
///
/// let mut modal = ModalController::open(PageModal::new(page.clone(), mount.clone()))
///     .expect("dialog shown");
/// assert_eq!(modal.state(), ModalState::Shown);
///
/// modal.submit_end(SubmitEnd { success: true });
/// assert_eq!(modal.state(), ModalState::Removed);
/// assert!(page.is_vacant(&mount));
/// ```
#[derive(Debug)]
pub struct ModalController<S: ModalSurface> {
    surface: S,
    state: ModalState,
}

impl<S: ModalSurface> ModalController<S> {
    /// Wrap a surface without presenting it.
    pub const fn new(surface: S) -> Self {
        Self {
            surface,
            state: ModalState::Detached,
        }
    }

    /// Wrap and immediately attach a surface.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError`] when the surface cannot be shown; the surface
    /// has already been removed in that case.
    pub fn open(surface: S) -> Result<Self, SurfaceError> {
        let mut controller = Self::new(surface);
        controller.attach()?;
        Ok(controller)
    }

    /// Present the surface.
    ///
    /// Attaching an already attached or removed controller is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError`] when the surface cannot be shown. The
    /// surface is removed before returning.
    pub fn attach(&mut self) -> Result<(), SurfaceError> {
        if self.state != ModalState::Detached {
            return Ok(());
        }
        match self.surface.show() {
            Ok(()) => {
                self.state = ModalState::Shown;
                Ok(())
            }
            Err(error) => {
                self.surface.remove();
                self.state = ModalState::Removed;
                Err(error)
            }
        }
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> ModalState {
        self.state
    }

    /// Close in response to an explicit user dismissal.
    pub fn dismiss(&mut self) {
        self.teardown();
    }

    /// React to the end of a form submission inside the dialog.
    ///
    /// Failed submissions leave the dialog open for the re-rendered form.
    pub fn submit_end(&mut self, event: SubmitEnd) {
        if event.success {
            self.teardown();
        } else {
            debug!("submission rejected; dialog stays open");
        }
    }

    fn teardown(&mut self) {
        if self.state == ModalState::Removed {
            return;
        }
        if self.state == ModalState::Shown {
            self.state = ModalState::Hidden;
            if let Err(error) = self.surface.hide() {
                warn!(%error, "dialog hide failed; removing anyway");
            }
        }
        self.surface.remove();
        self.state = ModalState::Removed;
    }
}

impl<S: ModalSurface> Drop for ModalController<S> {
    fn drop(&mut self) {
        self.teardown();
    }
}

/// Surface backed by a region of a [`Page`].
///
/// Showing and hiding toggle the region's overlay flag; removal empties the
/// region so the mount point is ready for the next dialog.
#[derive(Debug, Clone)]
pub struct PageModal {
    page: Page,
    mount: TargetId,
}

impl PageModal {
    /// Bind a surface to the region `mount`.
    #[must_use]
    pub const fn new(page: Page, mount: TargetId) -> Self {
        Self { page, mount }
    }

    /// Region the surface lives in.
    #[must_use]
    pub const fn mount(&self) -> &TargetId {
        &self.mount
    }

    fn set_shown(&self, shown: bool) -> Result<(), SurfaceError> {
        if self.page.is_vacant(&self.mount) || !self.page.set_shown(&self.mount, shown) {
            return Err(SurfaceError::Missing {
                id: self.mount.to_string(),
            });
        }
        Ok(())
    }
}

impl ModalSurface for PageModal {
    fn show(&mut self) -> Result<(), SurfaceError> {
        self.set_shown(true)
    }

    fn hide(&mut self) -> Result<(), SurfaceError> {
        self.set_shown(false)
    }

    fn remove(&mut self) {
        if !self.page.vacate(&self.mount) {
            debug!(region = %self.mount, "dialog mount already gone");
        }
    }
}
