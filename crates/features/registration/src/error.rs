use std::borrow::Cow;

/// A specialized [`RegistrationError`] enum of this crate.
#[ihub_derive::ihub_error]
pub enum RegistrationError {
    /// The requested state transition is not legal from the current state.
    #[error("Invalid registration transition{}: {message}", format_context(.context))]
    InvalidTransition { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal registration error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
