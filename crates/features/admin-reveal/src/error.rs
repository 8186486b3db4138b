use std::borrow::Cow;

/// A specialized [`RevealError`] enum of this crate.
///
/// Missing page elements are not errors: an incomplete page simply leaves the
/// reveal uninstalled.
#[jdash_derive::jdash_error]
pub enum RevealError {
    /// The configured click threshold is zero.
    #[error("Invalid reveal threshold{}: {clicks} clicks", format_context(.context))]
    InvalidThreshold { clicks: u32, context: Option<Cow<'static, str>> },

    /// A browser API call failed while wiring the page.
    #[error("Browser binding error{}: {message}", format_context(.context))]
    Binding { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal reveal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
