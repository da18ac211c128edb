use std::collections::{BTreeMap, BTreeSet};

use affirm_core::errors::AffirmError;

use crate::manifest::{RegistryManifest, TypeDecl, TypeKind};
use crate::registry::TypeRegistry;

/// Immutable in-memory [`TypeRegistry`] built from a validated manifest.
#[derive(Debug, Clone)]
pub struct StaticRegistry {
    supports_enums: bool,
    types: BTreeMap<String, TypeDecl>,
}

impl StaticRegistry {
    /// Starts an empty builder.
    pub fn builder() -> StaticRegistryBuilder {
        StaticRegistryBuilder::default()
    }

    /// Validates the manifest and indexes its declarations.
    pub fn from_manifest(manifest: &RegistryManifest) -> Result<Self, AffirmError> {
        manifest.validate()?;
        let types = manifest
            .types
            .iter()
            .map(|decl| (decl.name.clone(), decl.clone()))
            .collect();
        Ok(Self {
            supports_enums: manifest.supports_enums,
            types,
        })
    }

    /// Returns the declaration registered under the name.
    pub fn get(&self, name: &str) -> Option<&TypeDecl> {
        self.types.get(name)
    }

    /// Number of registered types.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Whether no types are registered.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Reconstructs a manifest listing the declarations in name order.
    pub fn to_manifest(&self) -> RegistryManifest {
        RegistryManifest {
            supports_enums: self.supports_enums,
            types: self.types.values().cloned().collect(),
        }
    }

    fn has_kind(&self, name: &str, kind: TypeKind) -> bool {
        self.types.get(name).is_some_and(|decl| decl.kind == kind)
    }

    /// Walks the type and everything it is composed from, depth first.
    fn any_ancestor(
        &self,
        start: &str,
        follow_mixins: bool,
        mut visit: impl FnMut(&TypeDecl) -> bool,
    ) -> bool {
        let mut seen = BTreeSet::new();
        let mut stack = vec![start];
        while let Some(name) = stack.pop() {
            if !seen.insert(name) {
                continue;
            }
            let Some(decl) = self.types.get(name) else {
                continue;
            };
            if visit(decl) {
                return true;
            }
            stack.extend(decl.parent.as_deref());
            stack.extend(decl.interfaces.iter().map(String::as_str));
            if follow_mixins {
                stack.extend(decl.mixins.iter().map(String::as_str));
            }
        }
        false
    }
}

impl TypeRegistry for StaticRegistry {
    fn type_exists(&self, name: &str) -> bool {
        self.has_kind(name, TypeKind::Class) || self.has_kind(name, TypeKind::Enum)
    }

    fn interface_exists(&self, name: &str) -> bool {
        self.has_kind(name, TypeKind::Interface)
    }

    fn mixin_exists(&self, name: &str) -> bool {
        self.has_kind(name, TypeKind::Trait)
    }

    fn enum_exists(&self, name: &str) -> bool {
        self.supports_enums && self.has_kind(name, TypeKind::Enum)
    }

    fn supports_enums(&self) -> bool {
        self.supports_enums
    }

    fn declares_method(&self, type_name: &str, method: &str) -> bool {
        self.any_ancestor(type_name, true, |decl| {
            decl.methods.iter().any(|declared| declared == method)
        })
    }

    fn mixins_of(&self, type_name: &str) -> Option<Vec<String>> {
        self.types.get(type_name).map(|decl| decl.mixins.clone())
    }

    fn is_subtype_of(&self, type_name: &str, target: &str) -> bool {
        self.any_ancestor(type_name, false, |decl| decl.name == target)
    }
}

/// Incremental construction of a [`StaticRegistry`].
#[derive(Debug, Clone, Default)]
pub struct StaticRegistryBuilder {
    manifest: RegistryManifest,
}

impl StaticRegistryBuilder {
    /// Adds a declaration.
    pub fn declare(mut self, decl: TypeDecl) -> Self {
        self.manifest.types.push(decl);
        self
    }

    /// Marks the runtime as lacking enumerations.
    pub fn without_enums(mut self) -> Self {
        self.manifest.supports_enums = false;
        self
    }

    /// Validates the collected declarations and builds the registry.
    pub fn build(self) -> Result<StaticRegistry, AffirmError> {
        StaticRegistry::from_manifest(&self.manifest)
    }
}
