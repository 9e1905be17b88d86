use ihub_mmtel::MmTelError;
use std::borrow::Cow;

/// A specialized [`ServiceError`] enum of this crate.
#[ihub_derive::ihub_error]
pub enum ServiceError {
    /// The slot is outside the capability gate or the table bounds.
    #[error("Unsupported slot{}: {message}", format_context(.context))]
    UnsupportedSlot { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
    /// The slot's MMTel feature rejected the operation.
    #[error("MMTel feature error{}: {source}", format_context(.context))]
    Feature { source: MmTelError, context: Option<Cow<'static, str>> },
    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal service error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
