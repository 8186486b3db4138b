//! Headless [`Page`] for tests and native previews.
//!
//! Elements are flat (no tree) and selectors are limited to `#id` and `.class`,
//! which covers everything the login markup exposes.

use crate::page::Page;
use crate::view::Display;
use jdash_domain::config::RevealTargets;
use tracing::debug;

/// Handle into a [`MemoryPage`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementRef(usize);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryElement {
    id: Option<String>,
    classes: Vec<String>,
    display: Option<Display>,
}

impl MemoryElement {
    #[must_use]
    pub fn with_id(id: impl Into<String>) -> Self {
        Self { id: Some(id.into()), ..Self::default() }
    }

    #[must_use]
    pub fn with_class(class: impl Into<String>) -> Self {
        Self { classes: vec![class.into()], ..Self::default() }
    }

    #[must_use]
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Initial inline `display`.
    #[must_use]
    pub const fn display(mut self, display: Display) -> Self {
        self.display = Some(display);
        self
    }

    /// Element addressed by a `#id` or `.class` selector, `None` for anything else.
    #[must_use]
    pub fn from_selector(selector: &str) -> Option<Self> {
        if let Some(id) = selector.strip_prefix('#') {
            Some(Self::with_id(id))
        } else {
            selector.strip_prefix('.').map(Self::with_class)
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Inline `display`, `None` when never set.
    pub const fn current_display(&self) -> Option<Display> {
        self.display
    }

    fn matches(&self, selector: &str) -> bool {
        if let Some(id) = selector.strip_prefix('#') {
            self.id.as_deref() == Some(id)
        } else if let Some(class) = selector.strip_prefix('.') {
            self.classes.iter().any(|c| c == class)
        } else {
            false
        }
    }
}

/// In-memory document keyed by insertion order.
#[derive(Debug, Clone, Default)]
pub struct MemoryPage {
    elements: Vec<MemoryElement>,
    writes: usize,
}

impl MemoryPage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The login page as served: Discord section visible, admin section
    /// hidden, and the flashed-messages banner when `with_banner` is set.
    ///
    /// A banner selector other than `#id` or `.class` leaves the banner out.
    #[must_use]
    pub fn login_markup(targets: &RevealTargets, with_banner: bool) -> Self {
        let mut page = Self::new();
        page.insert(MemoryElement::with_id(targets.login_section.as_str()).display(Display::Block));
        page.insert(MemoryElement::with_id(targets.trigger.as_str()));
        page.insert(MemoryElement::with_id(targets.admin_section.as_str()).display(Display::None));
        if with_banner {
            match MemoryElement::from_selector(&targets.banner) {
                Some(banner) => {
                    page.insert(banner.display(Display::Block));
                },
                None => debug!(selector = %targets.banner, "Unsupported banner selector on memory page"),
            }
        }
        page
    }

    pub fn insert(&mut self, element: MemoryElement) -> ElementRef {
        self.elements.push(element);
        ElementRef(self.elements.len() - 1)
    }

    pub fn get(&self, element: ElementRef) -> Option<&MemoryElement> {
        self.elements.get(element.0)
    }

    /// Inline `display` of the first element matching `selector`.
    pub fn display_of(&self, selector: &str) -> Option<Display> {
        self.query_selector(selector)
            .and_then(|e| self.get(e))
            .and_then(MemoryElement::current_display)
    }

    /// Number of `display` writes so far.
    pub const fn writes(&self) -> usize {
        self.writes
    }
}

impl Page for MemoryPage {
    type Element = ElementRef;

    fn element_by_id(&self, id: &str) -> Option<ElementRef> {
        self.elements.iter().position(|e| e.id.as_deref() == Some(id)).map(ElementRef)
    }

    fn query_selector(&self, selector: &str) -> Option<ElementRef> {
        if !selector.starts_with(['#', '.']) {
            debug!(selector, "Unsupported selector on memory page");
            return None;
        }
        self.elements.iter().position(|e| e.matches(selector)).map(ElementRef)
    }

    fn set_display(&mut self, element: &ElementRef, display: Display) {
        if let Some(target) = self.elements.get_mut(element.0) {
            target.display = Some(display);
            self.writes += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selectors_match_id_and_class() {
        let mut page = MemoryPage::new();
        let banner = page.insert(MemoryElement::with_class("flashes").class("wide"));
        let section = page.insert(MemoryElement::with_id("admin-login-section"));

        assert_eq!(page.query_selector(".flashes"), Some(banner));
        assert_eq!(page.query_selector(".wide"), Some(banner));
        assert_eq!(page.query_selector("#admin-login-section"), Some(section));
        assert_eq!(page.element_by_id("admin-login-section"), Some(section));
        assert_eq!(page.query_selector("div"), None);
    }

    #[test]
    fn login_markup_starts_on_discord_form() {
        let page = MemoryPage::login_markup(&RevealTargets::default(), true);
        assert_eq!(page.display_of("#discord-login-section"), Some(Display::Block));
        assert_eq!(page.display_of("#admin-login-section"), Some(Display::None));
        assert_eq!(page.display_of(".flashes"), Some(Display::Block));
        assert!(page.element_by_id("discord-login-button").is_some());
        assert_eq!(page.writes(), 0);
    }

    #[test]
    fn compound_banner_selector_is_left_out() {
        let targets = RevealTargets { banner: "ul.flashes".to_owned(), ..RevealTargets::default() };
        let page = MemoryPage::login_markup(&targets, true);

        assert_eq!(page.element_by_id("ul.flashes"), None);
        assert_eq!(page.display_of(".flashes"), None);
        assert!(page.element_by_id("admin-login-section").is_some());
    }

    #[test]
    fn banner_by_id_selector() {
        let targets = RevealTargets { banner: "#notice".to_owned(), ..RevealTargets::default() };
        let page = MemoryPage::login_markup(&targets, true);
        assert_eq!(page.display_of("#notice"), Some(Display::Block));
        assert_eq!(MemoryElement::from_selector("ul"), None);
    }

    #[test]
    fn set_display_updates_inline_style() {
        let mut page = MemoryPage::new();
        let el = page.insert(MemoryElement::with_id("x"));
        assert_eq!(page.get(el).and_then(MemoryElement::current_display), None);

        page.set_display(&el, Display::None);
        assert_eq!(page.display_of("#x"), Some(Display::None));
        assert_eq!(page.writes(), 1);
    }
}
