//! The element model types.

use std::fmt;
use std::io;

use serde::{Deserialize, Serialize};

/// The root of the element model: every included top-level package.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocModel {
    /// Top-level packages, in the order the front end included them.
    #[serde(default)]
    pub packages: Vec<Package>,
}

impl DocModel {
    /// Deserialize a model from its JSON interchange form.
    ///
    /// # Errors
    ///
    /// Returns the underlying serde error if the JSON is malformed or
    /// does not match the model shape.
    pub fn from_json(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content)
    }

    /// Deserialize a model from a reader producing JSON.
    ///
    /// # Errors
    ///
    /// Returns the underlying serde error on I/O failure or malformed
    /// JSON.
    pub fn from_reader<R: io::Read>(reader: R) -> serde_json::Result<Self> {
        serde_json::from_reader(reader)
    }
}

/// A package with its enclosed type members.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    /// Dot-separated qualified package name, e.g. `com.example.util`.
    pub name: String,
    /// Enclosed type members, in declaration order.
    #[serde(default)]
    pub types: Vec<TypeDecl>,
}

/// A type member of a package.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeDecl {
    /// Simple name, e.g. `Greeter`.
    pub name: String,
    /// Qualified name, e.g. `com.example.Greeter`.
    pub qualified: String,
    pub kind: TypeKind,
    /// Attached documentation comment, if the source had one.
    #[serde(default)]
    pub docs: Option<DocComment>,
    /// Enclosed field members, in declaration order.
    #[serde(default)]
    pub fields: Vec<Field>,
}

/// The kind of a type member.
///
/// A closed set: the generator dispatches on this tag and only `Class`
/// and `Interface` appear in output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    Class,
    Interface,
    Enum,
    Annotation,
    Record,
}

/// A field member of a type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    /// Simple name of the field.
    pub name: String,
    /// Attached documentation comment, if the source had one.
    #[serde(default)]
    pub docs: Option<DocComment>,
}

/// The full literal text of one documentation comment.
///
/// Kept as an explicit wrapper so "no documentation" (`None`) stays
/// distinguishable from an empty documentation string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocComment(pub String);

impl DocComment {
    pub fn new(text: impl Into<String>) -> Self {
        DocComment(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocComment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DocComment {
    fn from(text: &str) -> Self {
        DocComment(text.to_owned())
    }
}
