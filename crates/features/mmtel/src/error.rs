use ihub_registration::RegistrationError;
use std::borrow::Cow;

/// A specialized [`MmTelError`] enum of this crate.
#[ihub_derive::ihub_error]
pub enum MmTelError {
    /// The paired registration handle rejected a transition.
    #[error("MMTel registration error{}: {source}", format_context(.context))]
    Registration { source: RegistrationError, context: Option<Cow<'static, str>> },
    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal MMTel error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
