#![allow(dead_code)]

use affirm::{StaticRegistry, TypeDecl};
use tracing_subscriber::EnvFilter;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("affirm=trace"))
        .with_test_writer()
        .try_init();
}

/// Small type system shared by the introspection tests.
pub fn fixture_registry() -> StaticRegistry {
    StaticRegistry::builder()
        .declare(TypeDecl::interface("Named").methods(["name"]))
        .declare(
            TypeDecl::interface("Renderable")
                .implements(["Named"])
                .methods(["render"]),
        )
        .declare(TypeDecl::interface("Serializable").methods(["serialize"]))
        .declare(TypeDecl::mixin("Timestamps").methods(["touch"]))
        .declare(
            TypeDecl::mixin("Loggable")
                .uses(["Timestamps"])
                .methods(["log"]),
        )
        .declare(TypeDecl::class("Base").methods(["id"]))
        .declare(
            TypeDecl::class("Widget")
                .extends("Base")
                .implements(["Renderable"])
                .uses(["Loggable"])
                .methods(["resize", "foo"]),
        )
        .declare(TypeDecl::class("Button").extends("Widget").methods(["click"]))
        .declare(TypeDecl::class("Unrelated"))
        .declare(TypeDecl::enumeration("Suit").implements(["Named"]).methods(["color"]))
        .build()
        .expect("fixture registry is valid")
}

/// Same classes, on a runtime without enumerations.
pub fn legacy_registry() -> StaticRegistry {
    StaticRegistry::builder()
        .without_enums()
        .declare(TypeDecl::class("Widget").methods(["resize"]))
        .build()
        .expect("legacy registry is valid")
}

#[derive(Debug, thiserror::Error)]
#[error("specific failure")]
pub struct SpecificErrorKind;

#[derive(Debug, thiserror::Error)]
#[error("different failure")]
pub struct DifferentKind;

#[derive(Debug, thiserror::Error)]
#[error("wrapped: {0}")]
pub struct Wrapper(#[source] pub SpecificErrorKind);
