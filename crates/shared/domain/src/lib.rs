//! # Domain Models
//!
//! Pure dashboard types with a single dependency (`serde`).
//! Keep it lean: no I/O, no DOM access, no logic beyond defaults.

pub mod config;
pub mod constants;
