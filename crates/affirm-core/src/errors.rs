//! Structured error types shared across affirm crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`AffirmError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (subject index, check name, paths).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional hint that may help the caller resolve the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

/// Canonical error type for the affirm crates.
///
/// The two families never overlap: [`AffirmError::Assertion`] means an
/// expectation did not hold, [`AffirmError::Usage`] means the caller handed the
/// engine something it cannot interpret. Harnesses record the former and
/// should let the latter surface as a bug in the test code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum AffirmError {
    /// A checked subject violated the predicate.
    #[error("assertion failed: {0}")]
    Assertion(ErrorInfo),
    /// The API was misused or the registry lacks a required feature.
    #[error("usage error: {0}")]
    Usage(ErrorInfo),
}

impl AffirmError {
    /// Builds a usage error from a code and message.
    pub fn usage(code: impl Into<String>, message: impl Into<String>) -> Self {
        AffirmError::Usage(ErrorInfo::new(code, message))
    }

    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            AffirmError::Assertion(info) | AffirmError::Usage(info) => info,
        }
    }

    /// Returns the human readable message without code or context.
    pub fn message(&self) -> &str {
        &self.info().message
    }

    /// Returns whether this is an assertion failure.
    pub fn is_assertion(&self) -> bool {
        matches!(self, AffirmError::Assertion(_))
    }

    /// Returns whether this is a usage error.
    pub fn is_usage(&self) -> bool {
        matches!(self, AffirmError::Usage(_))
    }

    /// Returns the index of the failing subject for assertion failures.
    pub fn index(&self) -> Option<usize> {
        match self {
            AffirmError::Assertion(info) => info.context.get("index")?.parse().ok(),
            AffirmError::Usage(_) => None,
        }
    }
}
