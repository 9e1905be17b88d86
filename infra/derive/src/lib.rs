#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared across the workspace.
//! Two attribute macros live here: one for the workspace-wide error enum
//! convention, one for Arc-wrapped per-slot handle types.
//!
//! ## Usage
//! Add the crate to consumers inside the workspace:
//! ```toml
//! [dependencies]
//! ihub-derive = { path = "../infra/derive" }
//! ```

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemStruct, parse_macro_input};

/// Attribute macro to define a workspace-standard error enum.
///
/// The annotated enum gets `Debug` and `thiserror::Error` derives (unless
/// already present), a `<Name>Ext` extension trait whose `context(..)` method
/// attaches a human-readable context string to a `Result`, and `From` impls
/// for every variant that carries a `source` field.
///
/// # Conventions
///
/// * Variants must use named fields.
/// * A variant with a `source` field must also carry
///   `context: Option<Cow<'static, str>>`.
/// * A variant named `Internal` with a `message` field additionally gets
///   `From<&'static str>` and `From<String>` impls.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[ihub_derive::ihub_error]
/// pub enum DemoError {
///     #[error("IO error{}: {source}", format_context(.context))]
///     Io { source: std::io::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
/// ```
#[proc_macro_attribute]
pub fn ihub_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_error(input).into()
}

/// Attribute macro to define an Arc-wrapped per-slot handle.
///
/// Expands the annotated struct into `<Name>Inner` (the annotated fields) and
/// a cheaply cloneable `<Name>` wrapper holding `Arc<<Name>Inner>`. The wrapper
/// derefs to the inner state, exposes `same_handle` for object-identity checks,
/// and implements `ihub_domain::registry::SlotHandle`.
///
/// # Conventions
///
/// The struct must declare a named `slot: SlotId` field; it backs the
/// `SlotHandle::slot` accessor.
///
/// # Example
///
/// ```rust,ignore
/// #[ihub_derive::slot_handle]
/// pub struct ImsRegistration {
///     slot: ihub_domain::SlotId,
/// }
/// ```
#[proc_macro_attribute]
pub fn slot_handle(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    macros::handle::expand_handle(input).into()
}
