use crate::constants::{
    ADMIN_LOGIN_SECTION, DISCORD_API_BASE_URL, DISCORD_LOGIN_BUTTON, DISCORD_LOGIN_SECTION,
    DISCORD_SCOPES, FLASHES_SELECTOR, REQUIRED_CLICKS,
};
use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::sync::Arc;

/// Top-level dashboard configuration.
#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DashboardConfigInner {
    pub discord: DiscordOAuthConfig,
    pub reveal: RevealConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into components.
#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DashboardConfig {
    #[serde(flatten, default)]
    inner: Arc<DashboardConfigInner>,
}

impl Deref for DashboardConfig {
    type Target = DashboardConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for DashboardConfig {
    fn deref_mut(&mut self) -> &mut DashboardConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Discord OAuth2 application settings used to build the login link.
///
/// The client secret is deliberately absent: the login page only needs the
/// public half of the application.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DiscordOAuthConfig {
    pub client_id: String,
    pub redirect_uri: String,
    pub api_base_url: String,
    pub scopes: Vec<String>,
}

/// Hidden admin form reveal settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Clicks needed on the trigger. Zero is rejected when the gate is built.
    pub threshold: u32,
    pub targets: RevealTargets,
}

/// Where the reveal binding finds its elements on the page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RevealTargets {
    /// Element id of the trigger link.
    pub trigger: String,
    /// Element id of the section hidden on reveal.
    pub login_section: String,
    /// Element id of the section shown on reveal.
    pub admin_section: String,
    /// CSS selector of the optional banner hidden on reveal.
    pub banner: String,
}

// --- Default ---

impl Default for DiscordOAuthConfig {
    fn default() -> Self {
        Self {
            client_id: String::new(),
            redirect_uri: String::new(),
            api_base_url: DISCORD_API_BASE_URL.to_owned(),
            scopes: DISCORD_SCOPES.iter().map(|&s| s.to_owned()).collect(),
        }
    }
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self { threshold: REQUIRED_CLICKS, targets: RevealTargets::default() }
    }
}

impl Default for RevealTargets {
    fn default() -> Self {
        Self {
            trigger: DISCORD_LOGIN_BUTTON.to_owned(),
            login_section: DISCORD_LOGIN_SECTION.to_owned(),
            admin_section: ADMIN_LOGIN_SECTION.to_owned(),
            banner: FLASHES_SELECTOR.to_owned(),
        }
    }
}
