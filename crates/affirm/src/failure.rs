use std::fmt::Display;

use affirm_core::errors::{AffirmError, ErrorInfo};

use crate::catalog::Check;

/// Builds the assertion failure for the subject at `index`.
pub(crate) fn failure(check: Check, index: usize, detail: impl Display) -> AffirmError {
    let message = format!("[{index}] {detail}");
    tracing::debug!(
        log_type = "assertion",
        check = check.name(),
        index,
        %message,
        "assertion failed"
    );
    AffirmError::Assertion(
        ErrorInfo::new(check.code(), message)
            .with_context("check", check.name())
            .with_context("index", index.to_string()),
    )
}

/// Tags a usage error with the check that rejected its arguments.
pub(crate) fn misuse(check: Check, err: AffirmError) -> AffirmError {
    tracing::warn!(check = check.name(), error = %err, "check misused");
    match err {
        AffirmError::Usage(info) => AffirmError::Usage(info.with_context("check", check.name())),
        other => other,
    }
}
