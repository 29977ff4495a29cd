//! Streaming XML output for the doclet element model.
//!
//! This crate turns a [`doclet_model::DocModel`] — packages, their class
//! and interface members, and their fields, with attached documentation
//! comments — into one well-formed XML document, streamed onto the
//! output sink without buffering the tree.
//!
//! The main pieces are:
//! - [`unescape`]: folds backslash escape sequences in documentation
//!   text back into literal characters
//! - [`XmlWriter`]: the incremental emitter over [`quick_xml`]
//! - [`Walker`] and [`EscapeMode`]: the model traversal and its
//!   documentation-text policy
//! - [`generate`] / [`generate_to_vec`]: the document driver
//!
//! # Example
//!
//! ```rust
//! use doclet_model::{DocModel, Package};
//! use doclet_xml::{EscapeMode, generate_to_vec};
//!
//! let model = DocModel {
//!     packages: vec![Package { name: "com.example".into(), types: Vec::new() }],
//! };
//!
//! let bytes = generate_to_vec(&model, EscapeMode::Preserve).unwrap();
//! let xml = String::from_utf8(bytes).unwrap();
//! assert_eq!(
//!     xml,
//!     r#"<?xml version="1.0" encoding="UTF-8"?><root><package name="com.example"></package></root>"#
//! );
//! ```

pub mod error;
pub mod escape;
pub mod generate;
pub mod walk;
pub mod writer;

pub use error::{Error, Result};
pub use escape::unescape;
pub use generate::{generate, generate_to_vec};
pub use walk::{EscapeMode, Walker};
pub use writer::XmlWriter;
