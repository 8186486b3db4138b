//! Kernel utilities shared by the dashboard apps.
//! Keep this crate lightweight: config loading for native tools and the
//! Discord authorize link used as the login trigger.
//!
//! ## OAuth link
//! ```rust
//! use jdash_kernel::domain::config::DiscordOAuthConfig;
//! use jdash_kernel::oauth::authorize_url;
//!
//! let discord = DiscordOAuthConfig {
//!     client_id: "1234".to_owned(),
//!     redirect_uri: "https://dash.example/callback".to_owned(),
//!     ..DiscordOAuthConfig::default()
//! };
//! assert!(authorize_url(&discord).unwrap().ends_with("&scope=identify%20guilds"));
//! ```
//!
//! ## Config loading (non-wasm)
//! ```rust,ignore
//! use jdash_kernel::config::load_config;
//! use jdash_kernel::domain::config::DashboardConfig;
//!
//! let cfg: DashboardConfig = load_config(Some("dashboard.toml"))?;
//! ```
#[cfg(not(target_arch = "wasm32"))]
pub mod config;
pub mod oauth;

pub use jdash_domain as domain;
