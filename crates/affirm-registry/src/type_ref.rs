use affirm_core::errors::{AffirmError, ErrorInfo};
use affirm_core::{Instance, Value};

/// A type given either by name or by one of its instances.
#[derive(Debug, Clone)]
pub enum TypeRef {
    /// A type name used as-is.
    Name(String),
    /// An instance whose concrete type is used.
    Instance(Instance),
}

impl TypeRef {
    /// Returns the canonical type name the reference resolves to.
    pub fn type_name(&self) -> &str {
        match self {
            TypeRef::Name(name) => name,
            TypeRef::Instance(instance) => instance.type_name(),
        }
    }
}

impl TryFrom<Value> for TypeRef {
    type Error = AffirmError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Str(name) => Ok(TypeRef::Name(name)),
            Value::Object(instance) => Ok(TypeRef::Instance(instance)),
            other => Err(AffirmError::Usage(
                ErrorInfo::new("affirm.type_ref", "Object must be a string or an object")
                    .with_context("kind", other.kind()),
            )),
        }
    }
}

impl From<&str> for TypeRef {
    fn from(name: &str) -> Self {
        TypeRef::Name(name.to_string())
    }
}

impl From<String> for TypeRef {
    fn from(name: String) -> Self {
        TypeRef::Name(name)
    }
}

impl From<Instance> for TypeRef {
    fn from(instance: Instance) -> Self {
        TypeRef::Instance(instance)
    }
}

impl From<TypeRef> for Value {
    fn from(type_ref: TypeRef) -> Self {
        match type_ref {
            TypeRef::Name(name) => Value::Str(name),
            TypeRef::Instance(instance) => Value::Object(instance),
        }
    }
}
