use dioxus::prelude::*;
use jdash_admin_reveal::{RevealState, Threshold};
use jdash_domain::constants::{
    ADMIN_LOGIN_SECTION, DISCORD_LOGIN_BUTTON, DISCORD_LOGIN_SECTION, FLASHES_CLASS,
};

/// Dashboard login page.
///
/// Renders from the [`RevealState`] view: the Discord section first, the admin
/// form after `threshold` clicks on the Discord link. Only the revealing click
/// has its navigation prevented.
#[component]
pub fn LoginPage(
    oauth_url: String,
    #[props(default)] flashes: Vec<String>,
    #[props(default)] threshold: Threshold,
) -> Element {
    let mut state = use_signal(move || RevealState::new(threshold));
    let plan = state.read().render(!flashes.is_empty());

    let on_trigger = move |event: MouseEvent| {
        if count_trigger_click(&mut state.write()) {
            event.prevent_default();
        }
    };

    rsx! {
        div { class: "login-container",
            h1 { "JBot Dashboard" }

            if let Some(banner) = plan.banner {
                ul { class: FLASHES_CLASS, display: banner.as_ref(),
                    for message in flashes.iter() {
                        li { "{message}" }
                    }
                }
            }

            div { id: DISCORD_LOGIN_SECTION, display: plan.login_section.as_ref(),
                a {
                    id: DISCORD_LOGIN_BUTTON,
                    class: "discord-button",
                    href: "{oauth_url}",
                    onclick: on_trigger,
                    "Login with Discord"
                }
            }

            div { id: ADMIN_LOGIN_SECTION, display: plan.admin_section.as_ref(),
                h2 { "Administrator login" }
                form { method: "post", action: "/login",
                    input { r#type: "text", name: "username", placeholder: "Username", required: true }
                    input { r#type: "password", name: "password", placeholder: "Password", required: true }
                    button { r#type: "submit", "Log in" }
                }
            }
        }
    }
}

/// Counts a trigger click; `true` when its navigation must be cancelled.
fn count_trigger_click(state: &mut RevealState) -> bool {
    let outcome = state.click();
    tracing::debug!(count = outcome.count(), "Discord login button clicked");
    outcome.prevents_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use jdash_admin_reveal::{Display, LoginView};

    const LINK: &str = "https://discord.com/api/v10/oauth2/authorize?client_id=1";

    fn render(root: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(root);
        dom.rebuild_in_place();
        dioxus::ssr::render(&dom)
    }

    #[test]
    fn only_the_revealing_click_cancels_navigation() {
        let mut state = RevealState::new(Threshold::DEFAULT);
        for _ in 1..10 {
            assert!(!count_trigger_click(&mut state));
        }
        assert_eq!(state.view(), LoginView::ShowingLogin);

        assert!(count_trigger_click(&mut state));
        assert_eq!(state.view(), LoginView::ShowingAdmin);
        let plan = state.render(false);
        assert_eq!(plan.login_section, Display::None);
        assert_eq!(plan.admin_section, Display::Block);

        assert!(!count_trigger_click(&mut state));
        assert_eq!(state.view(), LoginView::ShowingAdmin);
    }

    #[test]
    fn first_render_shows_the_discord_section() {
        let html = render(|| rsx! { LoginPage { oauth_url: LINK } });

        assert!(html.contains(r#"id="discord-login-section""#));
        assert!(html.contains(r#"id="discord-login-button""#));
        assert!(html.contains(r#"id="admin-login-section""#));
        assert!(html.contains(r#"href="https://discord.com/api/v10/oauth2/authorize?client_id=1""#));
        assert_eq!(html.matches("display:block").count(), 1);
        assert_eq!(html.matches("display:none").count(), 1);
        assert!(!html.contains("flashes"));
    }

    #[test]
    fn flashed_messages_render_a_visible_banner() {
        let html = render(|| {
            rsx! {
                LoginPage { oauth_url: LINK, flashes: vec!["Invalid credentials".to_owned()] }
            }
        });

        assert!(html.contains(r#"class="flashes""#));
        assert!(html.contains("Invalid credentials"));
        assert_eq!(html.matches("display:block").count(), 2);
        assert_eq!(html.matches("display:none").count(), 1);
    }

    #[test]
    fn admin_form_posts_credentials() {
        let html = render(|| rsx! { LoginPage { oauth_url: LINK, threshold: Threshold::DEFAULT } });

        assert!(html.contains(r#"action="/login""#));
        assert!(html.contains(r#"name="username""#));
        assert!(html.contains(r#"name="password""#));
    }
}
