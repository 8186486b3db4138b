use jdash_domain::config::DashboardConfig;

// Public OAuth settings are baked in at build time; the client secret never
// reaches the bundle.
fn build_config() -> DashboardConfig {
    let mut config = DashboardConfig::default();
    config.discord.client_id = option_env!("JDASH_DISCORD_CLIENT_ID").unwrap_or_default().to_owned();
    config.discord.redirect_uri =
        option_env!("JDASH_DISCORD_REDIRECT_URI").unwrap_or_default().to_owned();
    config
}

fn main() {
    dioxus::logger::initialize_default();

    let app = match jdash_dashboard::DashboardApp::from_config(&build_config()) {
        Ok(app) => app,
        Err(err) => {
            tracing::error!(%err, "Dashboard login page cannot start");
            return;
        },
    };

    #[cfg(target_arch = "wasm32")]
    app.launch(jdash_dashboard::App);

    #[cfg(not(target_arch = "wasm32"))]
    tracing::error!(
        link = %app.context().oauth_url,
        "The dashboard renders in the browser only; build it for wasm32 (dx serve --platform web)"
    );
}
