use std::borrow::Cow;

/// A specialized [`ProvisioningError`] enum of this crate.
#[ihub_derive::ihub_error]
pub enum ProvisioningError {
    /// The item is not provisioned for this slot.
    #[error("Item not provisioned{}: {message}", format_context(.context))]
    NotProvisioned { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
    /// The stored value has a different type than the accessor expects.
    #[error("Provisioning type mismatch{}: {message}", format_context(.context))]
    TypeMismatch { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal provisioning error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
