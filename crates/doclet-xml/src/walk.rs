//! Depth-first traversal of the element model.
//!
//! The walker visits packages, their class and interface members, and
//! the fields of each emitted type, driving an [`XmlWriter`] as it
//! descends. Other member kinds (enums, annotations, records) are
//! skipped without being traversed.

use std::io::Write;

use doclet_model::{DocComment, DocModel, Field, Package, TypeDecl, TypeKind};

use crate::error::Result;
use crate::escape::unescape;
use crate::writer::XmlWriter;

/// Policy for documentation text passed to the writer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EscapeMode {
    /// Write documentation text exactly as supplied (the default).
    #[default]
    Preserve,
    /// Fold backslash escape sequences into literal characters first.
    Unescape,
}

/// Walks the element model and emits it onto an [`XmlWriter`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Walker {
    escape: EscapeMode,
}

impl Walker {
    pub fn new(escape: EscapeMode) -> Self {
        Walker { escape }
    }

    /// Emit every package of `model`, in model order.
    pub fn emit<W: Write>(&self, writer: &mut XmlWriter<W>, model: &DocModel) -> Result<()> {
        for package in &model.packages {
            self.emit_package(writer, package)?;
        }
        Ok(())
    }

    fn emit_package<W: Write>(&self, writer: &mut XmlWriter<W>, package: &Package) -> Result<()> {
        writer.start_element("package")?;
        writer.write_attribute("name", &package.name)?;
        for ty in &package.types {
            self.emit_type(writer, ty)?;
        }
        writer.end_element()
    }

    fn emit_type<W: Write>(&self, writer: &mut XmlWriter<W>, ty: &TypeDecl) -> Result<()> {
        // Only classes and interfaces appear in output.
        let element = match ty.kind {
            TypeKind::Class => "class",
            TypeKind::Interface => "interface",
            _ => return Ok(()),
        };

        writer.start_element(element)?;
        writer.write_attribute("name", &ty.name)?;
        writer.write_attribute("qualified", &ty.qualified)?;
        self.emit_docs(writer, ty.docs.as_ref())?;
        for field in &ty.fields {
            self.emit_field(writer, field)?;
        }
        writer.end_element()
    }

    fn emit_field<W: Write>(&self, writer: &mut XmlWriter<W>, field: &Field) -> Result<()> {
        writer.start_element("field")?;
        writer.write_attribute("name", &field.name)?;
        self.emit_docs(writer, field.docs.as_ref())?;
        writer.end_element()
    }

    fn emit_docs<W: Write>(
        &self,
        writer: &mut XmlWriter<W>,
        docs: Option<&DocComment>,
    ) -> Result<()> {
        let Some(docs) = docs else {
            return Ok(());
        };

        writer.start_element("comment")?;
        match self.escape {
            EscapeMode::Preserve => writer.write_characters(docs.as_str())?,
            EscapeMode::Unescape => writer.write_characters(&unescape(docs.as_str()))?,
        }
        writer.end_element()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn class(name: &str, qualified: &str) -> TypeDecl {
        TypeDecl {
            name: name.into(),
            qualified: qualified.into(),
            kind: TypeKind::Class,
            docs: None,
            fields: Vec::new(),
        }
    }

    fn field(name: &str) -> Field {
        Field { name: name.into(), docs: None }
    }

    fn emit_to_string(model: &DocModel, mode: EscapeMode) -> String {
        let mut writer = XmlWriter::new(Vec::new());
        Walker::new(mode).emit(&mut writer, model).unwrap();
        String::from_utf8(writer.into_inner()).unwrap()
    }

    #[test]
    fn test_package_without_types() {
        let model = DocModel {
            packages: vec![Package { name: "com.example".into(), types: Vec::new() }],
        };
        assert_eq!(
            emit_to_string(&model, EscapeMode::Preserve),
            r#"<package name="com.example"></package>"#
        );
    }

    #[test]
    fn test_packages_emitted_in_model_order() {
        let model = DocModel {
            packages: vec![
                Package { name: "z.last".into(), types: Vec::new() },
                Package { name: "a.first".into(), types: Vec::new() },
            ],
        };
        assert_eq!(
            emit_to_string(&model, EscapeMode::Preserve),
            r#"<package name="z.last"></package><package name="a.first"></package>"#
        );
    }

    #[test]
    fn test_interface_element_name() {
        let mut ty = class("Runnable", "java.lang.Runnable");
        ty.kind = TypeKind::Interface;
        let model = DocModel {
            packages: vec![Package { name: "java.lang".into(), types: vec![ty] }],
        };
        assert_eq!(
            emit_to_string(&model, EscapeMode::Preserve),
            r#"<package name="java.lang"><interface name="Runnable" qualified="java.lang.Runnable"></interface></package>"#
        );
    }

    #[test]
    fn test_kind_filtering_skips_other_kinds() {
        let mut skipped = class("Color", "p.Color");
        skipped.kind = TypeKind::Enum;
        // Fields of a skipped type must not leak into the output.
        skipped.fields = vec![field("RED")];
        let model = DocModel {
            packages: vec![Package {
                name: "p".into(),
                types: vec![class("Kept", "p.Kept"), skipped],
            }],
        };

        let xml = emit_to_string(&model, EscapeMode::Preserve);
        assert_eq!(
            xml,
            r#"<package name="p"><class name="Kept" qualified="p.Kept"></class></package>"#
        );
    }

    #[test]
    fn test_comment_emitted_only_when_documented() {
        let mut documented = class("A", "p.A");
        documented.docs = Some(DocComment::new(" Documented."));
        let undocumented = class("B", "p.B");
        let model = DocModel {
            packages: vec![Package { name: "p".into(), types: vec![documented, undocumented] }],
        };

        let xml = emit_to_string(&model, EscapeMode::Preserve);
        assert_eq!(
            xml,
            concat!(
                r#"<package name="p">"#,
                r#"<class name="A" qualified="p.A"><comment> Documented.</comment></class>"#,
                r#"<class name="B" qualified="p.B"></class>"#,
                r#"</package>"#
            )
        );
    }

    #[test]
    fn test_empty_comment_still_emitted() {
        let mut ty = class("A", "p.A");
        ty.docs = Some(DocComment::new(""));
        let model = DocModel {
            packages: vec![Package { name: "p".into(), types: vec![ty] }],
        };
        assert_eq!(
            emit_to_string(&model, EscapeMode::Preserve),
            r#"<package name="p"><class name="A" qualified="p.A"><comment></comment></class></package>"#
        );
    }

    #[test]
    fn test_structural_fidelity() {
        // 2 packages, each 1 class with 2 fields; one field documented,
        // no class documented.
        let mut first = class("A", "p1.A");
        first.fields = vec![field("X"), field("Y")];
        let mut second = class("B", "p2.B");
        let mut documented_field = field("Z");
        documented_field.docs = Some(DocComment::new(" The Z field."));
        second.fields = vec![documented_field, field("W")];

        let model = DocModel {
            packages: vec![
                Package { name: "p1".into(), types: vec![first] },
                Package { name: "p2".into(), types: vec![second] },
            ],
        };

        let xml = emit_to_string(&model, EscapeMode::Preserve);
        assert_eq!(xml.matches("<package ").count(), 2);
        assert_eq!(xml.matches("<class ").count(), 2);
        assert_eq!(xml.matches("<field ").count(), 4);
        assert_eq!(xml.matches("<comment>").count(), 1);
    }

    #[test]
    fn test_field_docs() {
        let mut documented = field("GREETING");
        documented.docs = Some(DocComment::new(" The canned greeting."));
        let mut ty = class("Greeter", "p.Greeter");
        ty.fields = vec![documented];
        let model = DocModel {
            packages: vec![Package { name: "p".into(), types: vec![ty] }],
        };

        assert_eq!(
            emit_to_string(&model, EscapeMode::Preserve),
            concat!(
                r#"<package name="p"><class name="Greeter" qualified="p.Greeter">"#,
                r#"<field name="GREETING"><comment> The canned greeting.</comment></field>"#,
                r#"</class></package>"#
            )
        );
    }

    #[test]
    fn test_escape_mode_changes_comment_text_only() {
        let mut ty = class("A", "p.A");
        ty.docs = Some(DocComment::new(r"\uc548\ub155"));
        let model = DocModel {
            packages: vec![Package { name: "p".into(), types: vec![ty] }],
        };

        let preserved = emit_to_string(&model, EscapeMode::Preserve);
        let unescaped = emit_to_string(&model, EscapeMode::Unescape);

        assert!(preserved.contains(r"<comment>\uc548\ub155</comment>"));
        assert!(unescaped.contains("<comment>안녕</comment>"));
        // Identical outside the comment text.
        assert_eq!(
            preserved.replace(r"\uc548\ub155", ""),
            unescaped.replace("안녕", "")
        );
    }
}
