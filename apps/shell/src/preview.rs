use anyhow::{Context, Result};
use jdash_admin_reveal::{AdminReveal, ClickOutcome, Display, MemoryPage, Threshold};
use jdash_domain::config::RevealConfig;
use std::fmt;

/// Outcome of clicking the trigger on a headless login page.
#[derive(Debug)]
pub struct PreviewReport {
    pub outcomes: Vec<ClickOutcome>,
    /// Selector and final inline `display` of every region the reveal touches.
    pub regions: Vec<(String, Option<Display>)>,
}

/// Builds the login markup for `config`, installs the reveal and clicks the
/// trigger `clicks` times (the threshold when `None`).
pub fn run(config: &RevealConfig, clicks: Option<u32>, with_banner: bool) -> Result<PreviewReport> {
    let threshold = Threshold::try_from(config.threshold).context("Invalid reveal config")?;
    let targets = &config.targets;

    let mut page = MemoryPage::login_markup(targets, with_banner);
    let mut reveal = AdminReveal::install(&page, targets, threshold)
        .context("Login markup is missing the trigger or a login section")?;

    let clicks = clicks.unwrap_or_else(|| threshold.get());
    let outcomes = (0..clicks).map(|_| reveal.handle_click(&mut page)).collect();

    let regions = [
        format!("#{}", targets.login_section),
        format!("#{}", targets.admin_section),
        targets.banner.clone(),
    ]
    .into_iter()
    .map(|selector| {
        let display = page.display_of(&selector);
        (selector, display)
    })
    .collect();

    Ok(PreviewReport { outcomes, regions })
}

impl PreviewReport {
    pub fn reveals(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_reveal()).count()
    }
}

impl fmt::Display for PreviewReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, outcome) in self.outcomes.iter().enumerate() {
            match outcome {
                ClickOutcome::Proceed { count } => {
                    writeln!(f, "click {}: navigate (count {count})", i + 1)?;
                },
                ClickOutcome::Reveal { count } => {
                    writeln!(f, "click {}: reveal, navigation suppressed (count {count})", i + 1)?;
                },
            }
        }
        for (selector, display) in &self.regions {
            let shown = display.as_ref().map_or("absent", |d| AsRef::<str>::as_ref(d));
            writeln!(f, "{selector}: {shown}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_preview_reveals_once() {
        let report = run(&RevealConfig::default(), None, true).expect("preview");
        assert_eq!(report.outcomes.len(), 10);
        assert_eq!(report.reveals(), 1);
        assert_eq!(
            report.regions,
            vec![
                ("#discord-login-section".to_owned(), Some(Display::None)),
                ("#admin-login-section".to_owned(), Some(Display::Block)),
                (".flashes".to_owned(), Some(Display::None)),
            ]
        );
    }

    #[test]
    fn short_preview_keeps_discord_form() {
        let report = run(&RevealConfig::default(), Some(9), false).expect("preview");
        assert_eq!(report.reveals(), 0);
        assert_eq!(report.regions[0].1, Some(Display::Block));
        assert_eq!(report.regions[2].1, None);

        let text = report.to_string();
        assert!(text.contains("click 9: navigate (count 9)"));
        assert!(text.contains(".flashes: absent"));
    }

    #[test]
    fn zero_threshold_fails() {
        let config = RevealConfig { threshold: 0, ..RevealConfig::default() };
        assert!(run(&config, None, true).is_err());
    }
}
