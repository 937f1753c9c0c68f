#![allow(unreachable_pub)]

//! # Macros
//!
//! Procedural macros used across the GeoHint workspace.
//!
//! Only one macro lives here today: [`macro@geohint_error`], which turns a plain
//! enum into a `thiserror` error with context support. Consumers depend on
//! `thiserror` themselves because the generated derive refers to it by path.

mod error;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Defines a crate-level error enum.
///
/// # Generated Items
///
/// * `#[derive(Debug, thiserror::Error)]` unless already derived.
/// * `<ErrorName>Ext` trait adding `.context(...)` to `Result<T, ErrorName>`
///   and to `Result<T, Source>` for every variant carrying a `source` field.
/// * `From<Source>` for every such variant, so `?` works on upstream errors.
/// * `From<&'static str>` and `From<String>` when an `Internal` variant exists.
/// * A private `format_context` helper for `#[error(...)]` strings.
///
/// # Requirements
///
/// Variants must use named fields. A variant with a source must also carry
/// `context: Option<Cow<'static, str>>`.
///
/// # Example
///
/// ```rust,ignore
/// use geohint_derive::geohint_error;
/// use std::borrow::Cow;
///
/// #[geohint_error]
/// pub enum TableError {
///     #[error("Table parse error{}: {source}", format_context(.context))]
///     Parse { source: serde_json::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal table error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn load(raw: &str) -> Result<Table, TableError> {
///     serde_json::from_str(raw).context("Reading street table")
/// }
/// ```
#[proc_macro_attribute]
pub fn geohint_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    error::expand(input).into()
}
