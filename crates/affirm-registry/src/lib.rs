//! Type registry capability queried by the affirm introspection checks, plus a
//! declarative in-memory implementation loadable from TOML or JSON manifests.

mod loader;
mod manifest;
mod registry;
mod static_registry;
mod type_ref;

pub use loader::{
    load_registry_manifest, load_static_registry, parse_json_manifest, parse_toml_manifest,
};
pub use manifest::{RegistryManifest, TypeDecl, TypeKind};
pub use registry::TypeRegistry;
pub use static_registry::{StaticRegistry, StaticRegistryBuilder};
pub use type_ref::TypeRef;
