//! Checks over plain values: identity, loose equality, booleans and null.
//!
//! Every function evaluates its subjects in order and stops at the first one
//! that violates the predicate. An empty subject list always passes.

use affirm_core::errors::AffirmError;
use affirm_core::Value;

use crate::catalog::Check;
use crate::failure::failure;

fn expect_each<I>(
    check: Check,
    subjects: I,
    holds: impl Fn(&Value) -> bool,
    describe: impl Fn(&Value) -> String,
) -> Result<(), AffirmError>
where
    I: IntoIterator,
    I::Item: Into<Value>,
{
    for (index, subject) in subjects.into_iter().enumerate() {
        let subject = subject.into();
        if !holds(&subject) {
            return Err(failure(check, index, describe(&subject)));
        }
    }
    Ok(())
}

/// Asserts every subject is identical to `reference` (same kind, same value).
pub fn be<R, I>(reference: R, subjects: I) -> Result<(), AffirmError>
where
    R: Into<Value>,
    I: IntoIterator,
    I::Item: Into<Value>,
{
    let reference = reference.into();
    expect_each(
        Check::Be,
        subjects,
        |subject| reference.identical(subject),
        |subject| format!("{} is not {}", reference.kind(), subject.kind()),
    )
}

/// Asserts no subject is identical to `reference`.
pub fn not_be<R, I>(reference: R, subjects: I) -> Result<(), AffirmError>
where
    R: Into<Value>,
    I: IntoIterator,
    I::Item: Into<Value>,
{
    let reference = reference.into();
    expect_each(
        Check::NotBe,
        subjects,
        |subject| !reference.identical(subject),
        |subject| format!("{} is {}", reference.kind(), subject.kind()),
    )
}

/// Asserts every subject loosely equals `reference`.
///
/// See [`Value::loosely_equals`] for the coercion rules.
pub fn equal<R, I>(reference: R, subjects: I) -> Result<(), AffirmError>
where
    R: Into<Value>,
    I: IntoIterator,
    I::Item: Into<Value>,
{
    let reference = reference.into();
    expect_each(
        Check::Equal,
        subjects,
        |subject| reference.loosely_equals(subject),
        |subject| format!("{} is not equal to {}", reference.kind(), subject.kind()),
    )
}

/// Asserts no subject loosely equals `reference`.
pub fn not_equal<R, I>(reference: R, subjects: I) -> Result<(), AffirmError>
where
    R: Into<Value>,
    I: IntoIterator,
    I::Item: Into<Value>,
{
    let reference = reference.into();
    expect_each(
        Check::NotEqual,
        subjects,
        |subject| !reference.loosely_equals(subject),
        |subject| format!("{} is equal to {}", reference.kind(), subject.kind()),
    )
}

/// Asserts every subject is exactly `true`.
pub fn be_true<I>(subjects: I) -> Result<(), AffirmError>
where
    I: IntoIterator,
    I::Item: Into<Value>,
{
    expect_each(
        Check::BeTrue,
        subjects,
        |subject| subject.as_bool() == Some(true),
        |subject| format!("{} is not true", subject.kind()),
    )
}

/// Asserts no subject is exactly `true`.
pub fn not_be_true<I>(subjects: I) -> Result<(), AffirmError>
where
    I: IntoIterator,
    I::Item: Into<Value>,
{
    expect_each(
        Check::NotBeTrue,
        subjects,
        |subject| subject.as_bool() != Some(true),
        |subject| format!("{} is true", subject.kind()),
    )
}

/// Asserts every subject is exactly `false`.
pub fn be_false<I>(subjects: I) -> Result<(), AffirmError>
where
    I: IntoIterator,
    I::Item: Into<Value>,
{
    expect_each(
        Check::BeFalse,
        subjects,
        |subject| subject.as_bool() == Some(false),
        |subject| format!("{} is not false", subject.kind()),
    )
}

/// Asserts no subject is exactly `false`.
pub fn not_be_false<I>(subjects: I) -> Result<(), AffirmError>
where
    I: IntoIterator,
    I::Item: Into<Value>,
{
    expect_each(
        Check::NotBeFalse,
        subjects,
        |subject| subject.as_bool() != Some(false),
        |subject| format!("{} is false", subject.kind()),
    )
}

/// Asserts every subject is null.
pub fn be_null<I>(subjects: I) -> Result<(), AffirmError>
where
    I: IntoIterator,
    I::Item: Into<Value>,
{
    expect_each(
        Check::BeNull,
        subjects,
        Value::is_null,
        |subject| format!("{} is not null", subject.kind()),
    )
}

/// Asserts no subject is null.
pub fn not_be_null<I>(subjects: I) -> Result<(), AffirmError>
where
    I: IntoIterator,
    I::Item: Into<Value>,
{
    expect_each(
        Check::NotBeNull,
        subjects,
        |subject| !subject.is_null(),
        |subject| format!("{} is null", subject.kind()),
    )
}
