use ihub_derive::ihub_error;
use std::borrow::Cow;

#[ihub_error]
pub enum DemoError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn main() {
    let err: DemoError = "boom".into();
    assert!(matches!(err, DemoError::Internal { .. }));

    let gone: Result<(), DemoError> =
        Err(std::io::Error::other("gone")).context("while probing the modem");
    assert!(gone.is_err());
}
