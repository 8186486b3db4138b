//! Hidden admin login reveal for the dashboard login page.
//!
//! Clicking the Discord login link [`Threshold`] times (ten by default) hides
//! the Discord section, shows the admin username/password form, hides the
//! flashed-messages banner if there is one, and suppresses the link's
//! navigation for that one click. Earlier clicks navigate as usual. The
//! counter resets on every reveal, so the gesture can fire again.
//!
//! * [`ClickGate`] counts clicks; [`RevealState`] pairs it with a [`LoginView`]
//!   that renders to a [`RenderPlan`].
//! * [`AdminReveal`] binds the state to any [`Page`]: the browser `document`
//!   on `wasm32` (see `web`), or the headless [`MemoryPage`].
//!
//! ```rust
//! use jdash_admin_reveal::{AdminReveal, Display, MemoryPage, Threshold};
//! use jdash_domain::config::RevealTargets;
//!
//! let targets = RevealTargets::default();
//! let mut page = MemoryPage::login_markup(&targets, true);
//! let mut reveal = AdminReveal::install(&page, &targets, Threshold::DEFAULT).unwrap();
//!
//! for _ in 0..9 {
//!     assert!(!reveal.handle_click(&mut page).prevents_default());
//! }
//! assert!(reveal.handle_click(&mut page).prevents_default());
//! assert_eq!(page.display_of("#admin-login-section"), Some(Display::Block));
//! ```

mod error;
mod gate;
mod memory;
mod page;
mod view;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use crate::error::{RevealError, RevealErrorExt};
pub use crate::gate::{ClickGate, ClickOutcome, Threshold};
pub use crate::memory::{ElementRef, MemoryElement, MemoryPage};
pub use crate::page::{AdminReveal, Page};
pub use crate::view::{Display, LoginView, RenderPlan, RevealState};
