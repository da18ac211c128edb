//! Catalog of the checks, with their stable names and error codes.

use std::fmt;

/// Every check the engine offers, positive and negated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Check {
    /// Strict identity with the reference.
    Be,
    /// Negation of [`Check::Be`].
    NotBe,
    /// Loose equality with the reference.
    Equal,
    /// Negation of [`Check::Equal`].
    NotEqual,
    /// Subject is exactly `true`.
    BeTrue,
    /// Negation of [`Check::BeTrue`].
    NotBeTrue,
    /// Subject is exactly `false`.
    BeFalse,
    /// Negation of [`Check::BeFalse`].
    NotBeFalse,
    /// Subject is null.
    BeNull,
    /// Negation of [`Check::BeNull`].
    NotBeNull,
    /// Type declares a method.
    HaveMethod,
    /// Negation of [`Check::HaveMethod`].
    NotHaveMethod,
    /// Type is, derives from, or implements another.
    BeA,
    /// Negation of [`Check::BeA`].
    NotBeA,
    /// Concrete type is registered.
    BeAClass,
    /// Negation of [`Check::BeAClass`].
    NotBeAClass,
    /// Interface is registered.
    BeAnInterface,
    /// Negation of [`Check::BeAnInterface`].
    NotBeAnInterface,
    /// Mixin is registered.
    BeATrait,
    /// Negation of [`Check::BeATrait`].
    NotBeATrait,
    /// Enumeration is registered.
    BeAnEnum,
    /// Negation of [`Check::BeAnEnum`].
    NotBeAnEnum,
    /// Type composes a mixin directly.
    HaveTrait,
    /// Negation of [`Check::HaveTrait`].
    NotHaveTrait,
    /// Invocation raises an exact failure kind.
    Throw,
    /// Negation of [`Check::Throw`].
    NotThrow,
}

impl Check {
    /// All checks, each positive form followed by its negation.
    pub const ALL: [Check; 26] = [
        Check::Be,
        Check::NotBe,
        Check::Equal,
        Check::NotEqual,
        Check::BeTrue,
        Check::NotBeTrue,
        Check::BeFalse,
        Check::NotBeFalse,
        Check::BeNull,
        Check::NotBeNull,
        Check::HaveMethod,
        Check::NotHaveMethod,
        Check::BeA,
        Check::NotBeA,
        Check::BeAClass,
        Check::NotBeAClass,
        Check::BeAnInterface,
        Check::NotBeAnInterface,
        Check::BeATrait,
        Check::NotBeATrait,
        Check::BeAnEnum,
        Check::NotBeAnEnum,
        Check::HaveTrait,
        Check::NotHaveTrait,
        Check::Throw,
        Check::NotThrow,
    ];

    /// Function name of the check.
    pub fn name(self) -> &'static str {
        match self {
            Check::Be => "be",
            Check::NotBe => "not_be",
            Check::Equal => "equal",
            Check::NotEqual => "not_equal",
            Check::BeTrue => "be_true",
            Check::NotBeTrue => "not_be_true",
            Check::BeFalse => "be_false",
            Check::NotBeFalse => "not_be_false",
            Check::BeNull => "be_null",
            Check::NotBeNull => "not_be_null",
            Check::HaveMethod => "have_method",
            Check::NotHaveMethod => "not_have_method",
            Check::BeA => "be_a",
            Check::NotBeA => "not_be_a",
            Check::BeAClass => "be_a_class",
            Check::NotBeAClass => "not_be_a_class",
            Check::BeAnInterface => "be_an_interface",
            Check::NotBeAnInterface => "not_be_an_interface",
            Check::BeATrait => "be_a_trait",
            Check::NotBeATrait => "not_be_a_trait",
            Check::BeAnEnum => "be_an_enum",
            Check::NotBeAnEnum => "not_be_an_enum",
            Check::HaveTrait => "have_trait",
            Check::NotHaveTrait => "not_have_trait",
            Check::Throw => "throw",
            Check::NotThrow => "not_throw",
        }
    }

    /// Error code carried by this check's assertion failures.
    pub fn code(self) -> String {
        format!("affirm.{}", self.name())
    }

    /// Whether this is the negated form.
    pub fn is_negated(self) -> bool {
        self.name().starts_with("not_")
    }

    /// The check with the opposite per-subject predicate.
    pub fn negation(self) -> Check {
        match self {
            Check::Be => Check::NotBe,
            Check::NotBe => Check::Be,
            Check::Equal => Check::NotEqual,
            Check::NotEqual => Check::Equal,
            Check::BeTrue => Check::NotBeTrue,
            Check::NotBeTrue => Check::BeTrue,
            Check::BeFalse => Check::NotBeFalse,
            Check::NotBeFalse => Check::BeFalse,
            Check::BeNull => Check::NotBeNull,
            Check::NotBeNull => Check::BeNull,
            Check::HaveMethod => Check::NotHaveMethod,
            Check::NotHaveMethod => Check::HaveMethod,
            Check::BeA => Check::NotBeA,
            Check::NotBeA => Check::BeA,
            Check::BeAClass => Check::NotBeAClass,
            Check::NotBeAClass => Check::BeAClass,
            Check::BeAnInterface => Check::NotBeAnInterface,
            Check::NotBeAnInterface => Check::BeAnInterface,
            Check::BeATrait => Check::NotBeATrait,
            Check::NotBeATrait => Check::BeATrait,
            Check::BeAnEnum => Check::NotBeAnEnum,
            Check::NotBeAnEnum => Check::BeAnEnum,
            Check::HaveTrait => Check::NotHaveTrait,
            Check::NotHaveTrait => Check::HaveTrait,
            Check::Throw => Check::NotThrow,
            Check::NotThrow => Check::Throw,
        }
    }

    /// Whether the check consults a type registry.
    pub fn needs_registry(self) -> bool {
        matches!(
            self,
            Check::HaveMethod
                | Check::NotHaveMethod
                | Check::BeA
                | Check::NotBeA
                | Check::BeAClass
                | Check::NotBeAClass
                | Check::BeAnInterface
                | Check::NotBeAnInterface
                | Check::BeATrait
                | Check::NotBeATrait
                | Check::BeAnEnum
                | Check::NotBeAnEnum
                | Check::HaveTrait
                | Check::NotHaveTrait
        )
    }
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
