use crate::error::RevealError;
use jdash_domain::constants::REQUIRED_CLICKS;
use std::fmt;
use std::num::NonZeroU32;
use tracing::{debug, info};

/// Number of clicks on the trigger that fires a reveal. Never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Threshold(NonZeroU32);

impl Threshold {
    /// Ten clicks, as shipped on the login page.
    pub const DEFAULT: Self = match NonZeroU32::new(REQUIRED_CLICKS) {
        Some(n) => Self(n),
        None => panic!("REQUIRED_CLICKS must be non-zero"),
    };

    /// # Errors
    /// [`RevealError::InvalidThreshold`] for zero.
    pub fn new(clicks: u32) -> Result<Self, RevealError> {
        NonZeroU32::new(clicks)
            .map(Self)
            .ok_or_else(|| RevealError::InvalidThreshold { clicks, context: None })
    }

    #[must_use]
    pub const fn get(self) -> u32 {
        self.0.get()
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u32> for Threshold {
    type Error = RevealError;

    fn try_from(clicks: u32) -> Result<Self, Self::Error> {
        Self::new(clicks)
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// What the caller must do with the click event that produced this outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Below the threshold: let the default navigation run.
    Proceed { count: u32 },
    /// Threshold reached: suppress the default navigation of this click only.
    Reveal { count: u32 },
}

impl ClickOutcome {
    /// Counter value after the increment, before any reset.
    #[must_use]
    pub const fn count(self) -> u32 {
        match self {
            Self::Proceed { count } | Self::Reveal { count } => count,
        }
    }

    #[must_use]
    pub const fn is_reveal(self) -> bool {
        matches!(self, Self::Reveal { .. })
    }

    /// `true` exactly when the event's default action must be prevented.
    #[must_use]
    pub const fn prevents_default(self) -> bool {
        self.is_reveal()
    }
}

/// Counts trigger clicks and latches every `threshold`-th one.
///
/// The counter goes back to zero on each reveal, so the latch re-fires
/// every `threshold` clicks for as long as the gate lives.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClickGate {
    count: u32,
    threshold: Threshold,
}

impl ClickGate {
    #[must_use]
    pub const fn new(threshold: Threshold) -> Self {
        Self { count: 0, threshold }
    }

    /// Registers one click on the trigger.
    pub fn click(&mut self) -> ClickOutcome {
        self.count = self.count.saturating_add(1);
        let count = self.count;
        debug!(count, threshold = self.threshold.get(), "Login trigger clicked");

        if count >= self.threshold.get() {
            self.count = 0;
            info!(count, "Admin login revealed");
            ClickOutcome::Reveal { count }
        } else {
            ClickOutcome::Proceed { count }
        }
    }

    /// Clicks since the last reveal (or since creation).
    #[must_use]
    pub const fn count(&self) -> u32 {
        self.count
    }

    #[must_use]
    pub const fn threshold(&self) -> Threshold {
        self.threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_threshold_is_ten() {
        assert_eq!(Threshold::default().get(), 10);
        assert_eq!(ClickGate::default().threshold(), Threshold::DEFAULT);
    }

    #[test]
    fn zero_threshold_is_rejected() {
        let err = Threshold::new(0).expect_err("zero clicks");
        assert!(matches!(err, RevealError::InvalidThreshold { clicks: 0, .. }));
        assert!(Threshold::try_from(1).is_ok());
    }

    #[test]
    fn clicks_below_threshold_proceed() {
        let mut gate = ClickGate::default();
        for expected in 1..=9 {
            let outcome = gate.click();
            assert_eq!(outcome, ClickOutcome::Proceed { count: expected });
            assert!(!outcome.prevents_default());
            assert_eq!(gate.count(), expected);
        }
    }

    #[test]
    fn tenth_click_reveals_and_resets() {
        let mut gate = ClickGate::default();
        (0..9).for_each(|_| {
            gate.click();
        });

        let outcome = gate.click();
        assert_eq!(outcome, ClickOutcome::Reveal { count: 10 });
        assert!(outcome.prevents_default());
        assert_eq!(gate.count(), 0);
    }

    #[test]
    fn threshold_of_one_reveals_every_click() {
        let mut gate = ClickGate::new(Threshold::new(1).expect("non-zero"));
        assert!(gate.click().is_reveal());
        assert!(gate.click().is_reveal());
        assert_eq!(gate.count(), 0);
    }
}
