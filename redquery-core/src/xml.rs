//! Minimal owned element tree for query-protocol response documents.
//!
//! The wire format is narrow: elements and character data, no attributes or
//! namespaces carry meaning. Responses are materialized into an [`Element`]
//! tree once, and the model types then pull fields out of it by tag name.
//! Tokenizing and entity handling stay in `quick-xml`; this module only
//! assembles its event stream into a tree.

use crate::{Error, Result};
use quick_xml::{events::Event as XmlEvent, Reader};

/// A single element of a parsed response document.
///
/// Offers the three lookups the bindings need: the tag name, the trimmed
/// character data, and children by tag name in document order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Element {
    name: String,
    text: String,
    children: Vec<Element>,
}

impl Element {
    /// Parse a document and return its root element.
    ///
    /// This is the only fallible step of response decoding; everything past
    /// it is best-effort field extraction.
    ///
    /// ```
    /// use redquery_core::Element;
    /// let root = Element::parse("<Outer><Inner>text</Inner></Outer>")?;
    /// assert_eq!(root.name(), "Outer");
    /// assert_eq!(root.child_text("Inner"), Some("text"));
    /// # Ok::<(), redquery_core::Error>(())
    /// ```
    pub fn parse(document: &str) -> Result<Element> {
        let mut reader = Reader::from_str(document);
        reader.config_mut().trim_text(true);

        let mut stack: Vec<Element> = Vec::new();
        loop {
            match reader.read_event()? {
                XmlEvent::Start(start) => {
                    stack.push(Element {
                        name: String::from_utf8_lossy(start.name().as_ref()).into_owned(),
                        ..Element::default()
                    });
                }
                XmlEvent::Empty(start) => {
                    let element = Element {
                        name: String::from_utf8_lossy(start.name().as_ref()).into_owned(),
                        ..Element::default()
                    };
                    match stack.last_mut() {
                        Some(parent) => parent.children.push(element),
                        None => return Ok(element),
                    }
                }
                XmlEvent::Text(text) => {
                    if let Some(open) = stack.last_mut() {
                        open.text.push_str(&text.unescape()?);
                    }
                }
                XmlEvent::CData(cdata) => {
                    if let Some(open) = stack.last_mut() {
                        open.text.push_str(&String::from_utf8_lossy(&cdata.into_inner()));
                    }
                }
                XmlEvent::End(_) => {
                    // quick-xml rejects unbalanced end tags before we get here
                    let element = stack.pop().ok_or(Error::EmptyDocument)?;
                    match stack.last_mut() {
                        Some(parent) => parent.children.push(element),
                        None => return Ok(element),
                    }
                }
                XmlEvent::Eof => return Err(Error::EmptyDocument),
                _ => {}
            }
        }
    }

    /// Tag name of this element.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Trimmed character data directly inside this element.
    pub fn text(&self) -> &str {
        self.text.trim()
    }

    /// First direct child with the given tag name.
    pub fn first_child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|child| child.name == name)
    }

    /// All direct children with the given tag name, in document order.
    pub fn children<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> {
        self.children.iter().filter(move |child| child.name == name)
    }

    /// Trimmed text of the first direct child with the given tag name.
    pub fn child_text(&self, name: &str) -> Option<&str> {
        self.first_child(name).map(Element::text)
    }
}
