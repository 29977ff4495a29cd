//! Document driver: one generation pass over the whole model.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use doclet_model::DocModel;
use tracing::debug;

use crate::error::Result;
use crate::walk::{EscapeMode, Walker};
use crate::writer::XmlWriter;

/// Generate the XML document for `model` at `path`.
///
/// The file is created fresh, truncating any previous content. The sink
/// is released on every exit path; on failure a partially written file
/// may remain at `path` and is not removed.
///
/// # Errors
///
/// Returns the first configuration, sink, or serialization failure
/// encountered. The operation is all-or-nothing from the caller's
/// perspective.
pub fn generate(path: &Path, model: &DocModel, escape: EscapeMode) -> Result<()> {
    let file = File::create(path)?;
    let mut sink = BufWriter::new(file);
    write_document(&mut sink, model, escape)?;
    sink.flush()?;
    Ok(())
}

/// Generate the XML document into an in-memory buffer.
///
/// Same output bytes as [`generate`], without touching the filesystem.
///
/// # Errors
///
/// Returns any serialization failure; with a `Vec` sink these indicate
/// a bug rather than an environmental condition.
pub fn generate_to_vec(model: &DocModel, escape: EscapeMode) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    write_document(&mut buf, model, escape)?;
    Ok(buf)
}

fn write_document<W: Write>(sink: W, model: &DocModel, escape: EscapeMode) -> Result<()> {
    let walker = Walker::new(escape);
    let mut writer = XmlWriter::new(sink);

    debug!(packages = model.packages.len(), "generating XML document");

    writer.start_document()?;
    writer.start_element("root")?;
    walker.emit(&mut writer, model)?;
    writer.end_element()?; // root
    writer.end_document()?;
    Ok(())
}
