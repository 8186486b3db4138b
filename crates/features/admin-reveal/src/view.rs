use crate::gate::{ClickGate, ClickOutcome, Threshold};
use strum::{AsRefStr, Display as StrumDisplay};

/// CSS `display` value written inline on a page region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, StrumDisplay)]
#[strum(serialize_all = "lowercase")]
pub enum Display {
    None,
    Block,
}

impl Display {
    #[must_use]
    pub const fn is_visible(self) -> bool {
        matches!(self, Self::Block)
    }
}

/// Which login form the page presents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, AsRefStr, StrumDisplay)]
#[strum(serialize_all = "snake_case")]
pub enum LoginView {
    /// Discord link visible, admin form hidden.
    #[default]
    ShowingLogin,
    /// Discord link hidden, admin form visible. Nothing leaves this state.
    ShowingAdmin,
}

/// Display of every region the reveal touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderPlan {
    pub login_section: Display,
    pub admin_section: Display,
    /// `None` when the page has no banner.
    pub banner: Option<Display>,
}

impl LoginView {
    #[must_use]
    pub const fn render(self, banner_present: bool) -> RenderPlan {
        let (login_section, admin_section, banner) = match self {
            Self::ShowingLogin => (Display::Block, Display::None, Display::Block),
            Self::ShowingAdmin => (Display::None, Display::Block, Display::None),
        };
        RenderPlan { login_section, admin_section, banner: if banner_present { Some(banner) } else { None } }
    }
}

/// Click gate plus the view it drives. Owned by whichever component holds
/// the trigger listener.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RevealState {
    gate: ClickGate,
    view: LoginView,
}

impl RevealState {
    #[must_use]
    pub const fn new(threshold: Threshold) -> Self {
        Self { gate: ClickGate::new(threshold), view: LoginView::ShowingLogin }
    }

    /// Feeds one trigger click through the gate; a reveal switches the view to
    /// [`LoginView::ShowingAdmin`].
    pub fn click(&mut self) -> ClickOutcome {
        let outcome = self.gate.click();
        if outcome.is_reveal() {
            self.view = LoginView::ShowingAdmin;
        }
        outcome
    }

    #[must_use]
    pub const fn view(&self) -> LoginView {
        self.view
    }

    #[must_use]
    pub const fn count(&self) -> u32 {
        self.gate.count()
    }

    #[must_use]
    pub const fn threshold(&self) -> Threshold {
        self.gate.threshold()
    }

    #[must_use]
    pub const fn render(&self, banner_present: bool) -> RenderPlan {
        self.view.render(banner_present)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_renders_as_css() {
        assert_eq!(Display::None.as_ref(), "none");
        assert_eq!(Display::Block.to_string(), "block");
        assert!(Display::Block.is_visible());
    }

    #[test]
    fn login_view_shows_discord_and_banner() {
        let plan = LoginView::ShowingLogin.render(true);
        assert_eq!(plan.login_section, Display::Block);
        assert_eq!(plan.admin_section, Display::None);
        assert_eq!(plan.banner, Some(Display::Block));
    }

    #[test]
    fn admin_view_hides_discord_and_banner() {
        let plan = LoginView::ShowingAdmin.render(true);
        assert_eq!(plan.login_section, Display::None);
        assert_eq!(plan.admin_section, Display::Block);
        assert_eq!(plan.banner, Some(Display::None));
        assert_eq!(LoginView::ShowingAdmin.render(false).banner, None);
    }

    #[test]
    fn state_switches_view_only_on_reveal() {
        let mut state = RevealState::new(Threshold::new(3).expect("non-zero"));
        assert!(!state.click().is_reveal());
        assert!(!state.click().is_reveal());
        assert_eq!(state.view(), LoginView::ShowingLogin);

        assert!(state.click().is_reveal());
        assert_eq!(state.view(), LoginView::ShowingAdmin);
        assert_eq!(state.count(), 0);

        // The latch keeps counting; the admin view stays.
        assert_eq!(state.click(), ClickOutcome::Proceed { count: 1 });
        assert_eq!(state.view(), LoginView::ShowingAdmin);
    }
}
