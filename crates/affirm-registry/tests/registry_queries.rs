use affirm_core::{Instance, Value};
use affirm_registry::{StaticRegistry, TypeDecl, TypeRef, TypeRegistry};

fn shop() -> StaticRegistry {
    StaticRegistry::builder()
        .declare(TypeDecl::interface("Named").methods(["name"]))
        .declare(TypeDecl::interface("Renderable").implements(["Named"]).methods(["render"]))
        .declare(TypeDecl::mixin("Timestamps").methods(["touch"]))
        .declare(TypeDecl::mixin("Loggable").uses(["Timestamps"]).methods(["log"]))
        .declare(TypeDecl::class("Base").methods(["id"]))
        .declare(
            TypeDecl::class("Widget")
                .extends("Base")
                .implements(["Renderable"])
                .uses(["Loggable"])
                .methods(["resize"]),
        )
        .declare(TypeDecl::class("Button").extends("Widget"))
        .declare(TypeDecl::enumeration("Suit").implements(["Named"]))
        .build()
        .expect("valid registry")
}

#[test]
fn existence_queries_are_kind_specific() {
    let registry = shop();
    assert!(registry.type_exists("Widget"));
    assert!(registry.type_exists("Suit"));
    assert!(!registry.type_exists("Renderable"));
    assert!(!registry.type_exists("Loggable"));
    assert!(registry.interface_exists("Renderable"));
    assert!(!registry.interface_exists("Widget"));
    assert!(registry.mixin_exists("Loggable"));
    assert!(!registry.mixin_exists("Widget"));
    assert!(registry.enum_exists("Suit"));
    assert!(!registry.enum_exists("Widget"));
    assert!(!registry.type_exists("widget"));
}

#[test]
fn methods_are_found_through_every_composition_path() {
    let registry = shop();
    for method in ["resize", "id", "render", "name", "log", "touch"] {
        assert!(registry.declares_method("Button", method), "{method}");
    }
    assert!(!registry.declares_method("Button", "explode"));
    assert!(!registry.declares_method("Unknown", "id"));
    assert!(registry.declares_method("Suit", "name"));
}

#[test]
fn mixins_are_direct_only() {
    let registry = shop();
    assert_eq!(
        registry.mixins_of("Widget"),
        Some(vec!["Loggable".to_string()])
    );
    assert_eq!(registry.mixins_of("Button"), Some(Vec::new()));
    assert_eq!(registry.mixins_of("Unknown"), None);
}

#[test]
fn subtyping_follows_parents_and_interfaces() {
    let registry = shop();
    assert!(registry.is_subtype_of("Button", "Button"));
    assert!(registry.is_subtype_of("Button", "Widget"));
    assert!(registry.is_subtype_of("Button", "Base"));
    assert!(registry.is_subtype_of("Button", "Named"));
    assert!(registry.is_subtype_of("Suit", "Named"));
    assert!(!registry.is_subtype_of("Button", "Loggable"));
    assert!(!registry.is_subtype_of("Base", "Widget"));
    assert!(!registry.is_subtype_of("Unknown", "Unknown"));
}

#[test]
fn to_manifest_rebuilds_an_equivalent_registry() {
    let registry = shop();
    let rebuilt = StaticRegistry::from_manifest(&registry.to_manifest()).expect("rebuild");
    assert_eq!(rebuilt.len(), registry.len());
    assert!(rebuilt.is_subtype_of("Button", "Named"));
    assert!(rebuilt.supports_enums());
}

#[test]
fn type_refs_resolve_names_and_instances() {
    let by_name = TypeRef::try_from(Value::from("Widget")).expect("string");
    assert_eq!(by_name.type_name(), "Widget");

    let by_instance = TypeRef::try_from(Value::from(Instance::new("Button"))).expect("object");
    assert_eq!(by_instance.type_name(), "Button");

    let err = TypeRef::try_from(Value::from(42)).expect_err("integer");
    assert!(err.is_usage());
    assert_eq!(err.info().code, "affirm.type_ref");
    assert_eq!(err.message(), "Object must be a string or an object");
    assert_eq!(err.info().context.get("kind").map(String::as_str), Some("integer"));
}
