//! Source element model for doclet XML generation.
//!
//! The upstream parser/type-resolver runs in a separate front end and
//! hands over an already-resolved hierarchy of packages, types, and
//! fields with their attached documentation comments. This crate defines
//! that hierarchy as owned, serde-derived types so the model can travel
//! as JSON and be consumed read-only by the generator.
//!
//! The main types are:
//! - [`DocModel`]: the document root, every included top-level package
//! - [`Package`]: qualified name plus enclosed type members
//! - [`TypeDecl`]: a type member with its [`TypeKind`], documentation,
//!   and enclosed fields
//! - [`Field`]: a field member with optional documentation
//! - [`DocComment`]: the full literal text of one documentation comment
//!
//! # Example
//!
//! ```rust
//! use doclet_model::{DocModel, TypeKind};
//!
//! let model = DocModel::from_json(
//!     r#"{
//!       "packages": [{
//!         "name": "com.example",
//!         "types": [{
//!           "name": "Greeter",
//!           "qualified": "com.example.Greeter",
//!           "kind": "class",
//!           "docs": " Says hello.",
//!           "fields": [{ "name": "GREETING" }]
//!         }]
//!       }]
//!     }"#,
//! )
//! .unwrap();
//!
//! assert_eq!(model.packages.len(), 1);
//! assert_eq!(model.packages[0].types[0].kind, TypeKind::Class);
//! assert!(model.packages[0].types[0].fields[0].docs.is_none());
//! ```

pub mod model;

pub use model::{DocComment, DocModel, Field, Package, TypeDecl, TypeKind};
