//! Discord OAuth2 authorize link: the navigation target of the login trigger.

use jdash_domain::config::DiscordOAuthConfig;
use std::borrow::Cow;

#[jdash_derive::jdash_error]
pub enum OAuthError {
    /// A required application setting is empty.
    #[error("OAuth config error{}: `{field}` is not set", format_context(.context))]
    MissingField { field: &'static str, context: Option<Cow<'static, str>> },
}

/// Builds `{api_base}/oauth2/authorize?...` for the authorization code flow.
///
/// Query values are percent-encoded and scopes are joined with `%20`.
///
/// # Errors
/// [`OAuthError::MissingField`] when `client_id`, `redirect_uri` or `scopes` is empty.
pub fn authorize_url(config: &DiscordOAuthConfig) -> Result<String, OAuthError> {
    let client_id = required("client_id", config.client_id.trim())?;
    let redirect_uri = required("redirect_uri", config.redirect_uri.trim())?;
    if config.scopes.is_empty() {
        return Err(OAuthError::MissingField { field: "scopes", context: None });
    }

    let scope = config
        .scopes
        .iter()
        .map(|s| urlencoding::encode(s))
        .collect::<Vec<_>>()
        .join("%20");

    let url = format!(
        "{}/oauth2/authorize?client_id={}&redirect_uri={}&response_type=code&scope={scope}",
        config.api_base_url.trim_end_matches('/'),
        urlencoding::encode(client_id),
        urlencoding::encode(redirect_uri),
    );

    tracing::debug!(%url, "Built Discord authorize URL");
    Ok(url)
}

fn required<'a>(field: &'static str, value: &'a str) -> Result<&'a str, OAuthError> {
    if value.is_empty() { Err(OAuthError::MissingField { field, context: None }) } else { Ok(value) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn discord() -> DiscordOAuthConfig {
        DiscordOAuthConfig {
            client_id: "1234".to_owned(),
            redirect_uri: "https://dash.example:8008/callback".to_owned(),
            ..DiscordOAuthConfig::default()
        }
    }

    #[test]
    fn builds_authorization_code_link() {
        let url = authorize_url(&discord()).expect("valid config");
        assert_eq!(
            url,
            "https://discord.com/api/v10/oauth2/authorize?client_id=1234\
             &redirect_uri=https%3A%2F%2Fdash.example%3A8008%2Fcallback\
             &response_type=code&scope=identify%20guilds"
        );
    }

    #[test]
    fn query_carries_every_parameter_once() {
        let cfg = DiscordOAuthConfig { scopes: vec!["identify".into(), "guilds.join".into()], ..discord() };
        let url = authorize_url(&cfg).expect("valid config");

        let (base, query) = url.split_once('?').expect("query string");
        assert_eq!(base, "https://discord.com/api/v10/oauth2/authorize");
        let keys: Vec<_> = query.split('&').filter_map(|pair| pair.split_once('=')).map(|(k, _)| k).collect();
        assert_eq!(keys, ["client_id", "redirect_uri", "response_type", "scope"]);
        assert!(url.ends_with("scope=identify%20guilds.join"));
    }

    #[test]
    fn trailing_slash_on_base_is_ignored() {
        let mut cfg = discord();
        cfg.api_base_url = "https://discord.com/api/v10/".to_owned();
        let url = authorize_url(&cfg).expect("valid config");
        assert!(url.starts_with("https://discord.com/api/v10/oauth2/authorize?"));
    }

    #[test]
    fn missing_client_id_is_reported() {
        let cfg = DiscordOAuthConfig { client_id: "  ".to_owned(), ..discord() };
        let err = authorize_url(&cfg).expect_err("blank client id");
        assert!(matches!(err, OAuthError::MissingField { field: "client_id", .. }));
    }

    #[test]
    fn missing_redirect_and_scopes_are_reported() {
        let cfg = DiscordOAuthConfig { redirect_uri: String::new(), ..discord() };
        assert!(matches!(
            authorize_url(&cfg),
            Err(OAuthError::MissingField { field: "redirect_uri", .. })
        ));

        let cfg = DiscordOAuthConfig { scopes: Vec::new(), ..discord() };
        assert_eq!(
            authorize_url(&cfg).expect_err("no scopes").to_string(),
            "OAuth config error: `scopes` is not set"
        );
    }
}
