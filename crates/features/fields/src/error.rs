use std::borrow::Cow;

/// A specialized [`RegistryError`] enum of this crate.
#[geohint_derive::geohint_error]
pub enum RegistryError {
    /// A computed field registered under a name already taken.
    #[error("Computed field already registered{}: {name}", format_context(.context))]
    Duplicate { name: String, context: Option<Cow<'static, str>> },
    /// Names must be reserved markers that are not presentation directives.
    #[error("Invalid computed field name{}: {name}", format_context(.context))]
    InvalidMarker { name: String, context: Option<Cow<'static, str>> },
    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal registry error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
