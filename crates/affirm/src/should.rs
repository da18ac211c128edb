use std::fmt;

use affirm_core::errors::{AffirmError, ErrorInfo};
use affirm_core::Value;
use affirm_registry::{TypeRef, TypeRegistry};

use crate::catalog::Check;
use crate::failure::{failure, misuse};

fn expect_names<I>(
    check: Check,
    names: I,
    holds: impl Fn(&str) -> bool,
    describe: impl Fn(&str) -> String,
) -> Result<(), AffirmError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    for (index, name) in names.into_iter().enumerate() {
        let name = name.as_ref();
        if !holds(name) {
            return Err(failure(check, index, describe(name)));
        }
    }
    Ok(())
}

/// Introspection checks answered by a [`TypeRegistry`].
///
/// Targets given as "a type or an instance" accept any [`Value`]: strings are
/// type names, objects resolve to their concrete type, and every other kind
/// is rejected with a usage error before any subject is evaluated.
#[derive(Clone, Copy)]
pub struct Should<'r> {
    registry: &'r dyn TypeRegistry,
}

impl fmt::Debug for Should<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Should").finish_non_exhaustive()
    }
}

impl<'r> Should<'r> {
    /// Creates a checker backed by the registry.
    pub fn new(registry: &'r dyn TypeRegistry) -> Self {
        Self { registry }
    }

    /// Returns the backing registry.
    pub fn registry(&self) -> &'r dyn TypeRegistry {
        self.registry
    }

    fn resolve(&self, check: Check, target: Value) -> Result<String, AffirmError> {
        TypeRef::try_from(target)
            .map(|type_ref| type_ref.type_name().to_string())
            .map_err(|err| misuse(check, err))
    }

    fn ensure_enums(&self, check: Check) -> Result<(), AffirmError> {
        if self.registry.supports_enums() {
            return Ok(());
        }
        Err(misuse(
            check,
            AffirmError::Usage(
                ErrorInfo::new(
                    "affirm.enums_unsupported",
                    "Enumerations are not supported by this type registry",
                )
                .with_hint("enable enum support on the registry"),
            ),
        ))
    }

    /// Asserts the target's type declares every listed method.
    pub fn have_method<T, I>(&self, target: T, methods: I) -> Result<(), AffirmError>
    where
        T: Into<Value>,
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let type_name = self.resolve(Check::HaveMethod, target.into())?;
        expect_names(
            Check::HaveMethod,
            methods,
            |method| self.registry.declares_method(&type_name, method),
            |method| format!("Method '{method}' does not exist"),
        )
    }

    /// Asserts the target's type declares none of the listed methods.
    pub fn not_have_method<T, I>(&self, target: T, methods: I) -> Result<(), AffirmError>
    where
        T: Into<Value>,
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let type_name = self.resolve(Check::NotHaveMethod, target.into())?;
        expect_names(
            Check::NotHaveMethod,
            methods,
            |method| !self.registry.declares_method(&type_name, method),
            |method| format!("Method '{method}' exists"),
        )
    }

    /// Asserts the target's type is, extends, or implements every listed type.
    pub fn be_a<T, I>(&self, target: T, types: I) -> Result<(), AffirmError>
    where
        T: Into<Value>,
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let type_name = self.resolve(Check::BeA, target.into())?;
        expect_names(
            Check::BeA,
            types,
            |other| self.registry.is_subtype_of(&type_name, other),
            |other| format!("Object '{type_name}' is not an instance of '{other}'"),
        )
    }

    /// Asserts the target's type relates to none of the listed types.
    pub fn not_be_a<T, I>(&self, target: T, types: I) -> Result<(), AffirmError>
    where
        T: Into<Value>,
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let type_name = self.resolve(Check::NotBeA, target.into())?;
        expect_names(
            Check::NotBeA,
            types,
            |other| !self.registry.is_subtype_of(&type_name, other),
            |other| format!("Object '{type_name}' is an instance of '{other}'"),
        )
    }

    /// Asserts every name is a registered concrete type.
    pub fn be_a_class<I>(&self, names: I) -> Result<(), AffirmError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        expect_names(
            Check::BeAClass,
            names,
            |name| self.registry.type_exists(name),
            |name| format!("Type '{name}' does not exist"),
        )
    }

    /// Asserts no name is a registered concrete type.
    pub fn not_be_a_class<I>(&self, names: I) -> Result<(), AffirmError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        expect_names(
            Check::NotBeAClass,
            names,
            |name| !self.registry.type_exists(name),
            |name| format!("Type '{name}' exists"),
        )
    }

    /// Asserts every name is a registered interface.
    pub fn be_an_interface<I>(&self, names: I) -> Result<(), AffirmError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        expect_names(
            Check::BeAnInterface,
            names,
            |name| self.registry.interface_exists(name),
            |name| format!("Interface '{name}' does not exist"),
        )
    }

    /// Asserts no name is a registered interface.
    pub fn not_be_an_interface<I>(&self, names: I) -> Result<(), AffirmError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        expect_names(
            Check::NotBeAnInterface,
            names,
            |name| !self.registry.interface_exists(name),
            |name| format!("Interface '{name}' exists"),
        )
    }

    /// Asserts every name is a registered mixin.
    pub fn be_a_trait<I>(&self, names: I) -> Result<(), AffirmError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        expect_names(
            Check::BeATrait,
            names,
            |name| self.registry.mixin_exists(name),
            |name| format!("Trait '{name}' does not exist"),
        )
    }

    /// Asserts no name is a registered mixin.
    pub fn not_be_a_trait<I>(&self, names: I) -> Result<(), AffirmError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        expect_names(
            Check::NotBeATrait,
            names,
            |name| !self.registry.mixin_exists(name),
            |name| format!("Trait '{name}' exists"),
        )
    }

    /// Asserts every name is a registered enumeration.
    ///
    /// Fails with a usage error, whatever the names, when the registry has no
    /// enumerations.
    pub fn be_an_enum<I>(&self, names: I) -> Result<(), AffirmError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.ensure_enums(Check::BeAnEnum)?;
        expect_names(
            Check::BeAnEnum,
            names,
            |name| self.registry.enum_exists(name),
            |name| format!("Enum '{name}' does not exist"),
        )
    }

    /// Negated form of [`Should::be_an_enum`], with the same support guard.
    pub fn not_be_an_enum<I>(&self, names: I) -> Result<(), AffirmError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.ensure_enums(Check::NotBeAnEnum)?;
        expect_names(
            Check::NotBeAnEnum,
            names,
            |name| !self.registry.enum_exists(name),
            |name| format!("Enum '{name}' exists"),
        )
    }

    /// Asserts the target's type directly uses every listed mixin.
    pub fn have_trait<T, I>(&self, target: T, mixins: I) -> Result<(), AffirmError>
    where
        T: Into<Value>,
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let type_name = self.resolve(Check::HaveTrait, target.into())?;
        let composed = self.composed_mixins(Check::HaveTrait, &type_name, mixins)?;
        match composed {
            None => Ok(()),
            Some((used, mixins)) => expect_names(
                Check::HaveTrait,
                mixins,
                |mixin| used.iter().any(|name| name == mixin),
                |mixin| format!("Object '{type_name}' does not use trait '{mixin}'"),
            ),
        }
    }

    /// Asserts the target's type directly uses none of the listed mixins.
    pub fn not_have_trait<T, I>(&self, target: T, mixins: I) -> Result<(), AffirmError>
    where
        T: Into<Value>,
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let type_name = self.resolve(Check::NotHaveTrait, target.into())?;
        let composed = self.composed_mixins(Check::NotHaveTrait, &type_name, mixins)?;
        match composed {
            None => Ok(()),
            Some((used, mixins)) => expect_names(
                Check::NotHaveTrait,
                mixins,
                |mixin| !used.iter().any(|name| name == mixin),
                |mixin| format!("Object '{type_name}' uses trait '{mixin}'"),
            ),
        }
    }

    /// Looks up the type's mixins only when there is at least one subject, so an
    /// empty call passes even for unknown types.
    #[allow(clippy::type_complexity)]
    fn composed_mixins<I>(
        &self,
        check: Check,
        type_name: &str,
        mixins: I,
    ) -> Result<Option<(Vec<String>, std::iter::Peekable<I::IntoIter>)>, AffirmError>
    where
        I: IntoIterator,
    {
        let mut mixins = mixins.into_iter().peekable();
        if mixins.peek().is_none() {
            return Ok(None);
        }
        match self.registry.mixins_of(type_name) {
            Some(used) => Ok(Some((used, mixins))),
            None => Err(misuse(
                check,
                AffirmError::Usage(
                    ErrorInfo::new(
                        "affirm.unknown_type",
                        format!("Type '{type_name}' does not exist"),
                    )
                    .with_context("type", type_name),
                ),
            )),
        }
    }
}
