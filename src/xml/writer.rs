use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use std::io::Cursor;

use super::Element;
use crate::core::XeroError;

fn xml_io(e: std::io::Error) -> XeroError {
    XeroError::Xml(format!("XML write error: {e}"))
}

/// Indented XML writer over an in-memory buffer.
pub(crate) struct XmlWriter {
    writer: Writer<Cursor<Vec<u8>>>,
}

impl XmlWriter {
    /// Writer for a bare fragment (no XML declaration).
    pub fn fragment() -> Self {
        Self {
            writer: Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2),
        }
    }

    /// Writer for a standalone document, starting with the XML declaration.
    pub fn document() -> Result<Self, XeroError> {
        let mut w = Self::fragment();
        w.writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
            .map_err(xml_io)?;
        Ok(w)
    }

    pub fn into_string(self) -> Result<String, XeroError> {
        let buf = self.writer.into_inner().into_inner();
        String::from_utf8(buf).map_err(|e| XeroError::Xml(format!("XML UTF-8 error: {e}")))
    }

    pub fn start_element(&mut self, name: &str) -> Result<&mut Self, XeroError> {
        self.writer
            .write_event(Event::Start(BytesStart::new(name)))
            .map_err(xml_io)?;
        Ok(self)
    }

    pub fn end_element(&mut self, name: &str) -> Result<&mut Self, XeroError> {
        self.writer
            .write_event(Event::End(BytesEnd::new(name)))
            .map_err(xml_io)?;
        Ok(self)
    }

    pub fn text_element(&mut self, name: &str, text: &str) -> Result<&mut Self, XeroError> {
        self.start_element(name)?;
        self.writer
            .write_event(Event::Text(BytesText::new(text)))
            .map_err(xml_io)?;
        self.end_element(name)
    }

    /// Write an element tree. Leaves are written with their text; text on
    /// elements that have children is dropped.
    pub fn element(&mut self, element: &Element) -> Result<&mut Self, XeroError> {
        if element.children.is_empty() {
            return self.text_element(&element.name, &element.text);
        }
        self.start_element(&element.name)?;
        for child in &element.children {
            self.element(child)?;
        }
        self.end_element(&element.name)
    }
}
