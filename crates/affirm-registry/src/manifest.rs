use std::collections::BTreeMap;

use affirm_core::errors::{AffirmError, ErrorInfo};
use serde::{Deserialize, Serialize};

fn manifest_error(code: &str, message: impl Into<String>, name: &str) -> AffirmError {
    AffirmError::Usage(ErrorInfo::new(code, message.into()).with_context("type", name))
}

/// Category of a registered type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeKind {
    /// Concrete, instantiable type.
    Class,
    /// Contract other types implement.
    Interface,
    /// Reusable behavior unit composed into other types.
    Trait,
    /// Enumeration type.
    Enum,
}

impl TypeKind {
    /// Lower-case label used in manifests and messages.
    pub fn label(&self) -> &'static str {
        match self {
            TypeKind::Class => "class",
            TypeKind::Interface => "interface",
            TypeKind::Trait => "trait",
            TypeKind::Enum => "enum",
        }
    }
}

/// Declaration of one type in a [`RegistryManifest`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDecl {
    /// Fully qualified type name.
    pub name: String,
    /// Category of the type.
    pub kind: TypeKind,
    /// Parent class; only classes may extend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    /// Implemented interfaces, or extended interfaces for an interface.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub interfaces: Vec<String>,
    /// Mixins composed directly into the type.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mixins: Vec<String>,
    /// Methods declared by the type itself.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub methods: Vec<String>,
}

impl TypeDecl {
    fn new(name: impl Into<String>, kind: TypeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            parent: None,
            interfaces: Vec::new(),
            mixins: Vec::new(),
            methods: Vec::new(),
        }
    }

    /// Declares a class.
    pub fn class(name: impl Into<String>) -> Self {
        Self::new(name, TypeKind::Class)
    }

    /// Declares an interface.
    pub fn interface(name: impl Into<String>) -> Self {
        Self::new(name, TypeKind::Interface)
    }

    /// Declares a mixin.
    pub fn mixin(name: impl Into<String>) -> Self {
        Self::new(name, TypeKind::Trait)
    }

    /// Declares an enumeration.
    pub fn enumeration(name: impl Into<String>) -> Self {
        Self::new(name, TypeKind::Enum)
    }

    /// Sets the parent class.
    pub fn extends(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    /// Adds implemented (or extended) interfaces.
    pub fn implements<I, S>(mut self, interfaces: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.interfaces.extend(interfaces.into_iter().map(Into::into));
        self
    }

    /// Adds directly composed mixins.
    pub fn uses<I, S>(mut self, mixins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.mixins.extend(mixins.into_iter().map(Into::into));
        self
    }

    /// Adds declared methods.
    pub fn methods<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.methods.extend(methods.into_iter().map(Into::into));
        self
    }

    fn edges(&self) -> impl Iterator<Item = &str> {
        self.parent
            .iter()
            .chain(self.interfaces.iter())
            .chain(self.mixins.iter())
            .map(String::as_str)
    }
}

/// Declarative description of a type system, loadable from TOML or JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryManifest {
    /// Whether the described runtime has enumerations.
    #[serde(default = "RegistryManifest::default_supports_enums")]
    pub supports_enums: bool,
    /// Declared types.
    #[serde(default)]
    pub types: Vec<TypeDecl>,
}

impl Default for RegistryManifest {
    fn default() -> Self {
        Self {
            supports_enums: Self::default_supports_enums(),
            types: Vec::new(),
        }
    }
}

impl RegistryManifest {
    const fn default_supports_enums() -> bool {
        true
    }

    /// Checks names, references between types, and inheritance acyclicity.
    pub fn validate(&self) -> Result<(), AffirmError> {
        let mut kinds = BTreeMap::new();
        for decl in &self.types {
            if decl.name.trim().is_empty() {
                return Err(AffirmError::usage(
                    "affirm_registry.manifest_name",
                    "type declaration missing name",
                ));
            }
            if kinds.insert(decl.name.as_str(), decl.kind).is_some() {
                return Err(manifest_error(
                    "affirm_registry.manifest_duplicate",
                    format!("type '{}' declared more than once", decl.name),
                    &decl.name,
                ));
            }
            if !self.supports_enums && decl.kind == TypeKind::Enum {
                return Err(manifest_error(
                    "affirm_registry.manifest_enum",
                    format!("enum '{}' declared but enums are not supported", decl.name),
                    &decl.name,
                ));
            }
            if decl.methods.iter().any(|method| method.trim().is_empty()) {
                return Err(manifest_error(
                    "affirm_registry.manifest_method",
                    format!("type '{}' declares a method without a name", decl.name),
                    &decl.name,
                ));
            }
        }

        for decl in &self.types {
            if let Some(parent) = &decl.parent {
                if decl.kind != TypeKind::Class {
                    return Err(manifest_error(
                        "affirm_registry.manifest_parent",
                        format!("{} '{}' cannot extend a class", decl.kind.label(), decl.name),
                        &decl.name,
                    ));
                }
                if kinds.get(parent.as_str()) != Some(&TypeKind::Class) {
                    return Err(manifest_error(
                        "affirm_registry.manifest_parent",
                        format!("parent '{parent}' of '{}' is not a registered class", decl.name),
                        &decl.name,
                    ));
                }
            }
            if decl.kind == TypeKind::Trait && !decl.interfaces.is_empty() {
                return Err(manifest_error(
                    "affirm_registry.manifest_interface",
                    format!("trait '{}' cannot implement interfaces", decl.name),
                    &decl.name,
                ));
            }
            for interface in &decl.interfaces {
                if kinds.get(interface.as_str()) != Some(&TypeKind::Interface) {
                    return Err(manifest_error(
                        "affirm_registry.manifest_interface",
                        format!(
                            "'{interface}' used by '{}' is not a registered interface",
                            decl.name
                        ),
                        &decl.name,
                    ));
                }
            }
            if decl.kind == TypeKind::Interface && !decl.mixins.is_empty() {
                return Err(manifest_error(
                    "affirm_registry.manifest_mixin",
                    format!("interface '{}' cannot use traits", decl.name),
                    &decl.name,
                ));
            }
            for mixin in &decl.mixins {
                if kinds.get(mixin.as_str()) != Some(&TypeKind::Trait) {
                    return Err(manifest_error(
                        "affirm_registry.manifest_mixin",
                        format!("'{mixin}' used by '{}' is not a registered trait", decl.name),
                        &decl.name,
                    ));
                }
            }
        }

        self.check_acyclic()
    }

    fn check_acyclic(&self) -> Result<(), AffirmError> {
        #[derive(Clone, Copy, PartialEq)]
        enum Mark {
            Visiting,
            Done,
        }

        let decls: BTreeMap<&str, &TypeDecl> = self
            .types
            .iter()
            .map(|decl| (decl.name.as_str(), decl))
            .collect();
        let mut marks: BTreeMap<&str, Mark> = BTreeMap::new();

        for root in decls.keys().copied() {
            if marks.contains_key(root) {
                continue;
            }
            // (node, expanded) pairs; a node is marked done once all its edges were visited.
            let mut stack = vec![(root, false)];
            while let Some((name, expanded)) = stack.pop() {
                if expanded {
                    marks.insert(name, Mark::Done);
                    continue;
                }
                match marks.get(name) {
                    Some(Mark::Done) => continue,
                    Some(Mark::Visiting) => {
                        return Err(manifest_error(
                            "affirm_registry.manifest_cycle",
                            format!("type '{name}' inherits from itself"),
                            name,
                        ))
                    }
                    None => {}
                }
                marks.insert(name, Mark::Visiting);
                stack.push((name, true));
                if let Some(decl) = decls.get(name) {
                    for next in decl.edges() {
                        match marks.get(next) {
                            Some(Mark::Done) => {}
                            Some(Mark::Visiting) => {
                                return Err(manifest_error(
                                    "affirm_registry.manifest_cycle",
                                    format!("type '{next}' inherits from itself"),
                                    next,
                                ))
                            }
                            None => stack.push((next, false)),
                        }
                    }
                }
            }
        }
        Ok(())
    }

    /// Renders the manifest as pretty TOML.
    pub fn to_toml(&self) -> Result<String, AffirmError> {
        toml::to_string_pretty(self).map_err(|err| {
            AffirmError::usage("affirm_registry.manifest_serialize", err.to_string())
        })
    }
}
