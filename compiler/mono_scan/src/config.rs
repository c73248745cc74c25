//! Scanner policy.

use mono_lexer_core::MacroContinuation;

/// Options shared by the forward scanners and the site locator.
///
/// The default is [`MacroContinuation::Verbatim`]
/// and no prefixes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScanConfig {
    /// How a backslash before a line terminator affects a macro line.
    pub macro_continuation: MacroContinuation,
    /// Candidate statement prefixes, tried in order by the site locator
    /// (for example `static`, `private`).
    pub prefixes: Vec<String>,
}

impl ScanConfig {
    /// Default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `continuation` for macro lines.
    #[must_use]
    pub fn with_macro_continuation(mut self, continuation: MacroContinuation) -> Self {
        self.macro_continuation = continuation;
        self
    }

    /// Replace the prefix list.
    #[must_use]
    pub fn with_prefixes<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.prefixes = prefixes.into_iter().map(Into::into).collect();
        self
    }
}
