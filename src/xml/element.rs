use quick_xml::Reader;
use quick_xml::events::Event;
use std::str::FromStr;

use super::writer::XmlWriter;
use crate::core::XeroError;

/// A parsed XML element: name, text content and child elements.
///
/// Attributes are not kept; the service's invoice documents carry all data
/// in element text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub text: String,
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Leaf element holding `text`.
    pub fn with_text(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
            children: Vec::new(),
        }
    }

    pub fn push(&mut self, child: Element) -> &mut Self {
        self.children.push(child);
        self
    }

    pub fn push_text(&mut self, name: &str, text: impl Into<String>) -> &mut Self {
        self.push(Element::with_text(name, text))
    }

    /// Push a leaf only when `text` is present.
    pub fn push_opt(&mut self, name: &str, text: Option<impl Into<String>>) -> &mut Self {
        if let Some(text) = text {
            self.push_text(name, text);
        }
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// First child with the given name.
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name == name)
    }

    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> {
        self.children.iter().filter(move |c| c.name == name)
    }

    /// Breadth-first walk over this element and all its descendants.
    pub fn descendants(&self) -> Vec<&Element> {
        let mut out = vec![self];
        let mut i = 0;
        while i < out.len() {
            let current = out[i];
            out.extend(current.children.iter());
            i += 1;
        }
        out
    }

    /// Parse a document or fragment with a single root element.
    ///
    /// Whitespace-only text between tags is dropped; any other text is kept
    /// verbatim, including its leading and trailing whitespace.
    pub fn parse(xml: &str) -> Result<Element, XeroError> {
        let mut reader = Reader::from_str(xml);
        let mut stack: Vec<Element> = Vec::new();
        let mut root: Option<Element> = None;

        loop {
            match reader.read_event() {
                Ok(Event::Start(ref e)) => {
                    stack.push(Element::new(tag_name(e.name().as_ref())?));
                }
                Ok(Event::Empty(ref e)) => {
                    let element = Element::new(tag_name(e.name().as_ref())?);
                    attach(&mut stack, &mut root, element)?;
                }
                Ok(Event::Text(ref e)) => {
                    let text = e
                        .unescape()
                        .map_err(|e| XeroError::Xml(format!("XML text error: {e}")))?;
                    if text.trim().is_empty() {
                        continue;
                    }
                    if let Some(top) = stack.last_mut() {
                        top.text.push_str(&text);
                    }
                }
                Ok(Event::CData(e)) => {
                    let raw = e.into_inner();
                    let text = std::str::from_utf8(&raw)
                        .map_err(|e| XeroError::Xml(format!("XML UTF-8 error: {e}")))?;
                    if let Some(top) = stack.last_mut() {
                        top.text.push_str(text);
                    }
                }
                Ok(Event::End(_)) => {
                    let element = stack
                        .pop()
                        .ok_or_else(|| XeroError::Xml("unexpected closing tag".into()))?;
                    attach(&mut stack, &mut root, element)?;
                }
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(XeroError::Xml(format!(
                        "XML parse error at position {}: {e}",
                        reader.buffer_position()
                    )));
                }
                _ => {}
            }
        }

        if let Some(open) = stack.last() {
            return Err(XeroError::Xml(format!("unclosed element <{}>", open.name)));
        }
        root.ok_or_else(|| XeroError::Xml("document has no root element".into()))
    }

    /// Render as an indented fragment without XML declaration.
    pub fn to_xml_string(&self) -> Result<String, XeroError> {
        let mut w = XmlWriter::fragment();
        w.element(self)?;
        w.into_string()
    }

    /// Render as a standalone document with XML declaration.
    pub fn to_document(&self) -> Result<String, XeroError> {
        let mut w = XmlWriter::document()?;
        w.element(self)?;
        w.into_string()
    }
}

impl FromStr for Element {
    type Err = XeroError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Element::parse(s)
    }
}

fn tag_name(raw: &[u8]) -> Result<String, XeroError> {
    std::str::from_utf8(raw)
        .map(str::to_string)
        .map_err(|e| XeroError::Xml(format!("invalid tag name: {e}")))
}

fn attach(
    stack: &mut [Element],
    root: &mut Option<Element>,
    element: Element,
) -> Result<(), XeroError> {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(element);
    } else if root.is_none() {
        *root = Some(element);
    } else {
        return Err(XeroError::Xml("multiple root elements".into()));
    }
    Ok(())
}
