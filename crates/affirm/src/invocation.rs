//! Checks that invoke callables and compare the kind of failure they raise.
//!
//! A callable raises by returning `Err` or by panicking. Kinds are compared by
//! exact, fully qualified type name: raising a wrapper, a related error type,
//! or a same-named type from another module does not count as raising the
//! expected kind.

use std::any::Any;
use std::error::Error;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use affirm_core::errors::AffirmError;

use crate::catalog::Check;
use crate::failure::failure;

/// Kind reported for callables that panic.
///
/// The panic is caught, but the process panic hook still runs first, so the
/// default hook prints the panic message to stderr.
pub const PANIC_KIND: &str = "panic";

/// Fully qualified type name of `E`, the kind that [`Raised`] records for it.
///
/// `std::io::Error` and `std::fmt::Error` are distinct kinds.
pub fn kind_name<E: ?Sized>() -> &'static str {
    std::any::type_name::<E>()
}

/// A failure raised by an invoked callable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raised {
    kind: String,
    message: String,
}

impl Raised {
    /// Creates a failure of the named kind.
    pub fn new(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            message: message.into(),
        }
    }

    /// Kind name compared against the expected kind.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Description of the failure.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Raised {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl<E: Error + 'static> From<E> for Raised {
    fn from(err: E) -> Self {
        Raised::new(kind_name::<E>(), err.to_string())
    }
}

/// Boxed callable, for passing differently typed closures to one check.
pub type Invocation<'a> = Box<dyn FnOnce() -> Result<(), Raised> + 'a>;

/// Boxes a callable into an [`Invocation`], converting its error into [`Raised`].
pub fn invocation<'a, F, E>(callable: F) -> Invocation<'a>
where
    F: FnOnce() -> Result<(), E> + 'a,
    E: Into<Raised>,
{
    Box::new(move || callable().map_err(Into::into))
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(text) = payload.downcast_ref::<&str>() {
        (*text).to_string()
    } else if let Some(text) = payload.downcast_ref::<String>() {
        text.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

fn invoke<F, E>(callable: F) -> Option<Raised>
where
    F: FnOnce() -> Result<(), E>,
    E: Into<Raised>,
{
    match panic::catch_unwind(AssertUnwindSafe(callable)) {
        Ok(Ok(())) => None,
        Ok(Err(err)) => Some(err.into()),
        Err(payload) => Some(Raised::new(PANIC_KIND, panic_message(payload.as_ref()))),
    }
}

/// Asserts every callable raises a failure of exactly `kind`.
///
/// Completing normally and raising any other kind both fail.
pub fn throw<I, F, E>(kind: &str, callables: I) -> Result<(), AffirmError>
where
    I: IntoIterator<Item = F>,
    F: FnOnce() -> Result<(), E>,
    E: Into<Raised>,
{
    for (index, callable) in callables.into_iter().enumerate() {
        match invoke(callable) {
            Some(raised) if raised.kind() == kind => {}
            outcome => {
                tracing::trace!(
                    index,
                    expected = kind,
                    raised = outcome.as_ref().map(Raised::kind),
                    "unexpected invocation outcome"
                );
                return Err(failure(
                    Check::Throw,
                    index,
                    format_args!("Exception '{kind}' was not thrown"),
                ));
            }
        }
    }
    Ok(())
}

/// Asserts no callable raises a failure of exactly `kind`.
///
/// Completing normally and raising any other kind both pass.
pub fn not_throw<I, F, E>(kind: &str, callables: I) -> Result<(), AffirmError>
where
    I: IntoIterator<Item = F>,
    F: FnOnce() -> Result<(), E>,
    E: Into<Raised>,
{
    for (index, callable) in callables.into_iter().enumerate() {
        if let Some(raised) = invoke(callable) {
            if raised.kind() == kind {
                return Err(failure(
                    Check::NotThrow,
                    index,
                    format_args!("Exception '{kind}' was thrown"),
                ));
            }
        }
    }
    Ok(())
}
