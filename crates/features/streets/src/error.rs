use std::borrow::Cow;

/// A specialized [`TableError`] enum of this crate.
#[geohint_derive::geohint_error]
pub enum TableError {
    /// An entry with a blank language name.
    #[error("Street table entry without a language name{}", format_context(.context))]
    MissingLanguage { context: Option<Cow<'static, str>> },
    /// The same language supplied twice.
    #[error("Duplicate street table entry{}: {language}", format_context(.context))]
    Duplicate { language: String, context: Option<Cow<'static, str>> },
    /// A language with no street terms at all.
    #[error("Street table entry has no terms{}: {language}", format_context(.context))]
    NoTerms { language: String, context: Option<Cow<'static, str>> },
    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal street table error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
