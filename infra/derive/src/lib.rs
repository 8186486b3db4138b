#![allow(unreachable_pub)]

//! # Macros
//!
//! Procedural macros shared by the dashboard workspace.
//!
//! The only macro today is [`macro@jdash_error`], which turns a plain enum into a
//! `thiserror` error with context support. Consumers must depend on `thiserror`
//! themselves since the expansion refers to `::thiserror::Error`.

mod error;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Attribute macro for crate-level error enums.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]` unless already present.
/// * **Context Support**: Generates a companion `<Name>Ext` trait adding `.context(...)`
///   to `Result<T, Name>` and to `Result<T, Source>` for every variant with a source.
/// * **Conversions**: `From<Source>` for variants holding a `source` field, so `?` works on
///   upstream errors.
/// * **Internal Fallback**: `From<&'static str>` and `From<String>` when an `Internal`
///   variant exists.
/// * A module-local `format_context` helper for use in `#[error(...)]` strings.
///
/// # Requirements
///
/// 1. Applied to an **enum** with **named-field** variants only.
/// 2. A variant with a source must also have `context: Option<Cow<'static, str>>`.
///
/// Because `format_context` is emitted next to the enum, declare at most one
/// `#[jdash_error]` enum per module.
///
/// # Example
///
/// ```rust,ignore
/// use jdash_derive::jdash_error;
/// use std::borrow::Cow;
///
/// #[jdash_error]
/// pub enum ConfigError {
///     #[error("Config error{}: {source}", format_context(.context))]
///     Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
///
///     #[error("Internal error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
/// ```
#[proc_macro_attribute]
pub fn jdash_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    error::expand(input).into()
}
