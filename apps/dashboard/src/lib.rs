mod login;

pub use crate::login::{LoginPage, LoginPageProps};

use dioxus::prelude::*;
use jdash_admin_reveal::{RevealError, Threshold};
use jdash_domain::config::DashboardConfig;
use jdash_kernel::oauth::{OAuthError, authorize_url};
use std::borrow::Cow;

#[jdash_derive::jdash_error]
pub enum DashboardError {
    #[error("Discord login link error{}: {source}", format_context(.context))]
    OAuth { source: OAuthError, context: Option<Cow<'static, str>> },

    #[error("Admin reveal error{}: {source}", format_context(.context))]
    Reveal { source: RevealError, context: Option<Cow<'static, str>> },
}

/// What the root component needs to render the login page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginContext {
    pub oauth_url: String,
    pub flashes: Vec<String>,
    pub threshold: Threshold,
}

impl LoginContext {
    /// # Errors
    /// [`DashboardError::OAuth`] when the Discord application settings are
    /// incomplete, [`DashboardError::Reveal`] for a zero click threshold.
    pub fn from_config(config: &DashboardConfig) -> Result<Self, DashboardError> {
        Ok(Self {
            oauth_url: authorize_url(&config.discord)?,
            flashes: Vec::new(),
            threshold: Threshold::try_from(config.reveal.threshold)?,
        })
    }

    #[must_use]
    pub fn with_flash(mut self, message: impl Into<String>) -> Self {
        self.flashes.push(message.into());
        self
    }
}

#[derive(Debug)]
pub struct DashboardApp {
    context: LoginContext,
}

impl DashboardApp {
    /// # Errors
    /// See [`LoginContext::from_config`].
    pub fn from_config(config: &DashboardConfig) -> Result<Self, DashboardError> {
        Ok(Self { context: LoginContext::from_config(config)? })
    }

    #[must_use]
    pub const fn context(&self) -> &LoginContext {
        &self.context
    }

    /// The entry point for launching the app in the browser.
    #[cfg(target_arch = "wasm32")]
    pub fn launch(self, root: fn() -> Element) {
        LaunchBuilder::web().with_context(self.context).launch(root);
    }
}

/// Root component: the login page fed from the launch context.
#[component]
pub fn App() -> Element {
    let ctx = use_context::<LoginContext>();

    rsx! {
        LoginPage { oauth_url: ctx.oauth_url, flashes: ctx.flashes, threshold: ctx.threshold }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> DashboardConfig {
        let mut config = DashboardConfig::default();
        config.discord.client_id = "42".to_owned();
        config.discord.redirect_uri = "https://dash.example/callback".to_owned();
        config
    }

    #[test]
    fn context_carries_link_and_threshold() {
        let ctx = LoginContext::from_config(&config()).expect("complete config");
        assert!(ctx.oauth_url.contains("client_id=42"));
        assert_eq!(ctx.threshold, Threshold::DEFAULT);
        assert!(ctx.flashes.is_empty());
        assert_eq!(ctx.with_flash("Invalid credentials").flashes.len(), 1);
    }

    #[test]
    fn incomplete_discord_settings_are_rejected() {
        let err = DashboardApp::from_config(&DashboardConfig::default()).expect_err("no client id");
        assert!(matches!(err, DashboardError::OAuth { .. }));
    }

    #[test]
    fn zero_threshold_is_rejected() {
        let mut config = config();
        config.reveal.threshold = 0;
        let err = LoginContext::from_config(&config).expect_err("zero threshold");
        assert!(matches!(err, DashboardError::Reveal { .. }));
    }
}
