//! Identifiers shared between the login page markup and the admin reveal binding.

/// The Discord login link whose repeated clicks reveal the admin form.
pub const DISCORD_LOGIN_BUTTON: &str = "discord-login-button";
/// Container shown by default, holding the Discord login link.
pub const DISCORD_LOGIN_SECTION: &str = "discord-login-section";
/// Container hidden by default, holding the username/password form.
pub const ADMIN_LOGIN_SECTION: &str = "admin-login-section";
/// Selector of the flashed-messages banner. Optional on the page.
pub const FLASHES_SELECTOR: &str = ".flashes";
/// CSS class matching [`FLASHES_SELECTOR`], for markup producers.
pub const FLASHES_CLASS: &str = "flashes";

/// Clicks on the trigger needed to reveal the admin form.
pub const REQUIRED_CLICKS: u32 = 10;

pub const DISCORD_API_BASE_URL: &str = "https://discord.com/api/v10";
pub const DISCORD_SCOPES: &[&str] = &["identify", "guilds"];

/// Prefix of environment overrides (`JDASH__DISCORD__CLIENT_ID`, ...).
pub const ENV_PREFIX: &str = "JDASH";
/// Config file looked up when no explicit path is given (any supported extension).
pub const DEFAULT_CONFIG_FILE: &str = "dashboard";
