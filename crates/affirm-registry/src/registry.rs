/// Read-only view of a runtime's type system.
///
/// Names are matched exactly. Implementations must be safe to query from
/// several threads at once; the checks never mutate a registry.
pub trait TypeRegistry: Send + Sync {
    /// Returns whether a concrete type (class or enum) with this name is registered.
    fn type_exists(&self, name: &str) -> bool;

    /// Returns whether an interface with this name is registered.
    fn interface_exists(&self, name: &str) -> bool;

    /// Returns whether a mixin with this name is registered.
    fn mixin_exists(&self, name: &str) -> bool;

    /// Returns whether an enumeration with this name is registered.
    fn enum_exists(&self, name: &str) -> bool;

    /// Returns whether the runtime behind this registry has enumerations at all.
    fn supports_enums(&self) -> bool {
        true
    }

    /// Returns whether the type declares, inherits, or composes a method with this name.
    fn declares_method(&self, type_name: &str, method: &str) -> bool;

    /// Returns the mixins composed directly into the type, or `None` for unknown types.
    fn mixins_of(&self, type_name: &str) -> Option<Vec<String>>;

    /// Returns whether `type_name` is `target`, derives from it, or implements it.
    fn is_subtype_of(&self, type_name: &str, target: &str) -> bool;
}
