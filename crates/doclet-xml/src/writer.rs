//! Incremental XML emitter.
//!
//! [`XmlWriter`] wraps [`quick_xml::Writer`] with the small set of
//! primitives the walker drives: start element, attribute, character
//! content, end element. The caller is responsible for balancing start
//! and end calls; given a balanced sequence the emitted bytes are
//! well-formed, with reserved characters escaped in both attribute
//! values and text content.

use std::io::Write;

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::error::{Error, Result};

/// Streaming XML writer over an output byte sink.
///
/// Output is pure streaming: no indentation, no whitespace between
/// elements. Elements without content close as an explicit
/// `<name></name>` pair.
pub struct XmlWriter<W: Write> {
    inner: Writer<W>,
    /// Start tag opened but not yet written, still accepting attributes.
    pending: Option<BytesStart<'static>>,
    /// Names of all open elements, innermost last.
    open: Vec<String>,
}

impl<W: Write> XmlWriter<W> {
    pub fn new(sink: W) -> Self {
        XmlWriter {
            inner: Writer::new(sink),
            pending: None,
            open: Vec::new(),
        }
    }

    /// Write the XML declaration. Version and encoding are fixed at
    /// `1.0` and `UTF-8`.
    pub fn start_document(&mut self) -> Result<()> {
        self.inner
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        Ok(())
    }

    /// Open a new element. Attributes may be appended until the first
    /// child, text, or end call.
    pub fn start_element(&mut self, name: &str) -> Result<()> {
        self.flush_pending()?;
        self.pending = Some(BytesStart::new(name.to_owned()));
        self.open.push(name.to_owned());
        Ok(())
    }

    /// Append an attribute to the element opened by the most recent
    /// [`start_element`](Self::start_element) call.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidWriterState`] if the start tag has
    /// already been committed by a child, text, or end call.
    pub fn write_attribute(&mut self, name: &str, value: &str) -> Result<()> {
        match self.pending.as_mut() {
            Some(start) => {
                start.push_attribute((name, value));
                Ok(())
            }
            None => Err(Error::InvalidWriterState(
                "attribute written outside an open start tag",
            )),
        }
    }

    /// Write character content, escaping XML-reserved characters.
    pub fn write_characters(&mut self, text: &str) -> Result<()> {
        self.flush_pending()?;
        self.inner.write_event(Event::Text(BytesText::new(text)))?;
        Ok(())
    }

    /// Close the most recently opened, not-yet-closed element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidWriterState`] if no element is open.
    pub fn end_element(&mut self) -> Result<()> {
        self.flush_pending()?;
        let name = self
            .open
            .pop()
            .ok_or(Error::InvalidWriterState("end with no open element"))?;
        self.inner.write_event(Event::End(BytesEnd::new(name)))?;
        Ok(())
    }

    /// Finish the document. Balancing every start with an end is the
    /// caller's job; this only commits a dangling start tag.
    pub fn end_document(&mut self) -> Result<()> {
        self.flush_pending()
    }

    /// Release the underlying sink.
    pub fn into_inner(self) -> W {
        self.inner.into_inner()
    }

    fn flush_pending(&mut self) -> Result<()> {
        if let Some(start) = self.pending.take() {
            self.inner.write_event(Event::Start(start))?;
        }
        Ok(())
    }
}
