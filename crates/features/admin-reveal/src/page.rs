use crate::gate::{ClickOutcome, Threshold};
use crate::view::{Display, LoginView, RevealState};
use jdash_domain::config::RevealTargets;
use std::fmt;
use tracing::debug;

/// The slice of a document the reveal needs: lookups and inline `display`.
///
/// Implemented by the browser binding and by [`crate::MemoryPage`].
pub trait Page {
    /// Handle to an element of this page.
    type Element: Clone + fmt::Debug;

    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    /// First element matching `selector`, if any.
    fn query_selector(&self, selector: &str) -> Option<Self::Element>;

    fn set_display(&mut self, element: &Self::Element, display: Display);
}

/// The installed click handler: the trigger's state plus the two sections
/// it toggles.
#[derive(Debug)]
pub struct AdminReveal<P: Page> {
    trigger: P::Element,
    login_section: P::Element,
    admin_section: P::Element,
    banner_selector: String,
    state: RevealState,
}

impl<P: Page> AdminReveal<P> {
    /// Looks up the trigger and both sections.
    ///
    /// Returns `None`, without touching the page, when any of them is missing;
    /// an incomplete page just never gets the hidden form.
    pub fn install(page: &P, targets: &RevealTargets, threshold: Threshold) -> Option<Self> {
        let lookup = |id: &str| {
            let found = page.element_by_id(id);
            if found.is_none() {
                debug!(id, "Admin reveal not installed: element missing");
            }
            found
        };

        let trigger = lookup(&targets.trigger)?;
        let login_section = lookup(&targets.login_section)?;
        let admin_section = lookup(&targets.admin_section)?;

        debug!(trigger = %targets.trigger, %threshold, "Admin reveal installed");
        Some(Self {
            trigger,
            login_section,
            admin_section,
            banner_selector: targets.banner.clone(),
            state: RevealState::new(threshold),
        })
    }

    /// Handles one click on the trigger.
    ///
    /// On a reveal the login section is hidden, the admin section shown and the
    /// banner, looked up now, hidden if the page has one. Below the threshold
    /// the page is left alone. The caller prevents the event's default action
    /// when [`ClickOutcome::prevents_default`] says so.
    pub fn handle_click(&mut self, page: &mut P) -> ClickOutcome {
        let outcome = self.state.click();
        if !outcome.is_reveal() {
            return outcome;
        }

        let banner = page.query_selector(&self.banner_selector);
        let plan = self.state.render(banner.is_some());

        page.set_display(&self.login_section, plan.login_section);
        page.set_display(&self.admin_section, plan.admin_section);
        if let (Some(banner), Some(display)) = (banner, plan.banner) {
            page.set_display(&banner, display);
        }

        outcome
    }

    /// The element the click listener belongs on.
    pub const fn trigger(&self) -> &P::Element {
        &self.trigger
    }

    pub const fn view(&self) -> LoginView {
        self.state.view()
    }

    /// Clicks since the last reveal.
    pub const fn count(&self) -> u32 {
        self.state.count()
    }
}
