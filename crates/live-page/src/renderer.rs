//! Applies partial-update payloads to a [`Page`].

use fragment_stream::{StreamAction, StreamPayload};
use tracing::debug;

use crate::page::Page;

/// Counts of instructions applied and skipped by one [`FragmentRenderer::apply`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApplyReport {
    /// Instructions whose target existed and was replaced.
    pub applied: usize,
    /// Instructions whose target was absent from the page.
    pub skipped: usize,
}

/// Stateless payload interpreter.
///
/// Targets are resolved against the page as it stood before the payload,
/// so an instruction never addresses markup injected by an earlier one.
/// Missing targets are skipped: navigation racing a fetch is expected.
///
/// # Examples
/// ```
/// use fragment_stream::{StreamPayload, TargetId};
/// use live_page::{FragmentRenderer, Page};
///
/// let id = TargetId::new("member-profile").expect("valid id");
/// let page = Page::new().with_region(id.clone(), "<div id=\"member-profile\">old</div>");
/// let payload = StreamPayload::replace(id.clone(), "<div id=\"member-profile\">new</div>");
///
/// let report = FragmentRenderer.apply(&page, &payload);
/// assert_eq!(report.applied, 1);
/// assert_eq!(page.markup(&id).as_deref(), Some("<div id=\"member-profile\">new</div>"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FragmentRenderer;

impl FragmentRenderer {
    /// Apply every instruction in payload order.
    #[must_use = "the report says whether any target was missing"]
    pub fn apply(&self, page: &Page, payload: &StreamPayload) -> ApplyReport {
        let resolved: Vec<_> = payload
            .instructions()
            .iter()
            .map(|instruction| (page.resolve(instruction.target()), instruction))
            .collect();

        let mut report = ApplyReport::default();
        for (handle, instruction) in resolved {
            let Some(handle) = handle else {
                debug!(region = %instruction.target(), "stream target not on page; skipping");
                report.skipped += 1;
                continue;
            };
            match instruction.action() {
                StreamAction::Replace => {
                    if page.replace(handle, instruction.markup()) {
                        report.applied += 1;
                    } else {
                        report.skipped += 1;
                    }
                }
            }
        }
        report
    }
}

#[cfg(test)]
mod tests {
    use fragment_stream::TargetId;
    use rstest::{fixture, rstest};

    use super::*;

    fn id(raw: &str) -> TargetId {
        TargetId::new(raw).expect("valid id")
    }

    #[fixture]
    fn page() -> Page {
        Page::new()
            .with_region(id("member-description"), "<div id=\"member-description\">a</div>")
            .with_region(id("member-profile"), "<div id=\"member-profile\">b</div>")
    }

    #[rstest]
    fn replaces_existing_targets(page: Page) {
        let payload = StreamPayload::replace(
            id("member-description"),
            "<div id=\"member-description\">Senior engineer.</div>",
        );
        let report = FragmentRenderer.apply(&page, &payload);

        assert_eq!(report, ApplyReport { applied: 1, skipped: 0 });
        let markup = page.markup(&id("member-description")).expect("region");
        assert!(markup.contains("Senior engineer."));
        assert_eq!(
            page.markup(&id("member-profile")).as_deref(),
            Some("<div id=\"member-profile\">b</div>")
        );
    }

    #[rstest]
    fn missing_targets_are_skipped_without_aborting(page: Page) {
        let payload = StreamPayload::new()
            .with_replace(id("gone"), "x")
            .with_replace(id("member-profile"), "<div id=\"member-profile\">c</div>");
        let report = FragmentRenderer.apply(&page, &payload);

        assert_eq!(report, ApplyReport { applied: 1, skipped: 1 });
        assert!(page.resolve(&id("gone")).is_none());
    }

    #[rstest]
    fn applying_twice_matches_applying_once(page: Page) {
        let payload = StreamPayload::new()
            .with_replace(id("member-description"), "<div id=\"member-description\">x</div>")
            .with_replace(id("missing"), "y")
            .with_replace(id("member-profile"), "<div id=\"member-profile\">z</div>");

        let _ = FragmentRenderer.apply(&page, &payload);
        let once = page.snapshot();
        let _ = FragmentRenderer.apply(&page, &payload);
        assert_eq!(page.snapshot(), once);
    }

    #[rstest]
    fn later_instructions_cannot_address_injected_markup(page: Page) {
        let payload = StreamPayload::new()
            .with_replace(
                id("member-profile"),
                "<div id=\"member-profile\"><div id=\"nested\"></div></div>",
            )
            .with_replace(id("nested"), "<div id=\"nested\">late</div>");
        let report = FragmentRenderer.apply(&page, &payload);

        assert_eq!(report, ApplyReport { applied: 1, skipped: 1 });
    }
}
