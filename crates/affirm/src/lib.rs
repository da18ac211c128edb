//! Fail-fast assertion checks for test scripts.
//!
//! Each check takes an optional reference and any number of subjects, applies
//! one predicate to every subject in order, and returns an
//! [`AffirmError::Assertion`] naming the first subject that violated it. Calls
//! the engine cannot interpret return [`AffirmError::Usage`] instead.
//!
//! ```
//! use affirm::{be_true, equal};
//!
//! assert!(be_true([true, true]).is_ok());
//! let err = be_true([true, true, false]).unwrap_err();
//! assert_eq!(err.message(), "[2] boolean is not true");
//! assert!(equal(1, ["1", "1.0"]).is_ok());
//! ```

#![deny(missing_docs)]

pub mod catalog;
mod failure;
pub mod invocation;
mod should;
pub mod values;

pub use affirm_core::{AffirmError, ErrorInfo, Instance, Value};
pub use affirm_registry::{
    load_static_registry, RegistryManifest, StaticRegistry, TypeDecl, TypeKind, TypeRef,
    TypeRegistry,
};
pub use catalog::Check;
pub use invocation::{invocation, kind_name, not_throw, throw, Invocation, Raised, PANIC_KIND};
pub use should::Should;
pub use values::{
    be, be_false, be_null, be_true, equal, not_be, not_be_false, not_be_null, not_be_true,
    not_equal,
};
