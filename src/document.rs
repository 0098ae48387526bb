//! A small owned element tree, built from `quick-xml` events.
//!
//! Only elements and their attributes are kept. Text nodes, comments,
//! processing instructions and the doctype are dropped, since nothing
//! downstream looks at them.

use std::fs;
use std::path::Path;
use std::str;

use log::trace;
use quick_xml::events::{BytesStart, Event};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Error;

/// A node in the parsed document tree.
#[derive(Debug, PartialEq, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Element {
    /// The tag name as written in the document, including a namespace
    /// prefix if there is one (e.g. `svg:path`).
    pub name: String,

    /// Attributes in document order, with entities already unescaped.
    pub attributes: Vec<(String, String)>,

    /// Child elements in document order.
    pub children: Vec<Element>,
}

impl Element {
    /// Create an element without attributes or children.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Return the value of the attribute `key`, if present.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    fn from_tag(tag: &BytesStart) -> Result<Self, Error> {
        let name = decode(tag.name())?;
        let mut element = Self::new(name);
        for attr in tag.attributes() {
            let attr = attr.map_err(|e| {
                Error::SvgParse(format!("Invalid attribute on <{}>: {}", element.name, e))
            })?;
            let key = decode(attr.key)?;
            let value = attr.unescaped_value().map_err(|e| {
                Error::SvgParse(format!(
                    "Could not unescape attribute {} on <{}>: {}",
                    key, element.name, e
                ))
            })?;
            element.attributes.push((key, decode(&value)?));
        }
        Ok(element)
    }
}

fn decode(bytes: &[u8]) -> Result<String, Error> {
    str::from_utf8(bytes)
        .map(str::to_string)
        .map_err(|e| Error::SvgParse(format!("Invalid UTF-8 in document: {}", e)))
}

/// Hang a completed element onto its parent, or make it the root.
fn attach(open: &mut Vec<Element>, root: &mut Option<Element>, element: Element) -> Result<(), Error> {
    if let Some(parent) = open.last_mut() {
        parent.children.push(element);
        Ok(())
    } else if root.is_none() {
        *root = Some(element);
        Ok(())
    } else {
        Err(Error::SvgParse(format!(
            "Found second root element <{}>",
            element.name
        )))
    }
}

/// Parse an SVG string into its root element.
pub fn parse_document(svg: &str) -> Result<Element, Error> {
    trace!("parse_document");

    let mut reader = quick_xml::Reader::from_str(svg);
    reader.trim_text(true);

    let mut open: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;
    let mut buf = Vec::new();
    loop {
        match reader.read_event(&mut buf) {
            Ok(Event::Start(ref e)) => {
                let element = Element::from_tag(e)?;
                trace!("parse_document: Open <{}>", element.name);
                open.push(element);
            }
            Ok(Event::Empty(ref e)) => {
                let element = Element::from_tag(e)?;
                trace!("parse_document: Empty <{}>", element.name);
                attach(&mut open, &mut root, element)?;
            }
            Ok(Event::End(_)) => {
                let element = open.pop().ok_or_else(|| {
                    Error::SvgParse(format!(
                        "Unexpected end tag at position {}",
                        reader.buffer_position()
                    ))
                })?;
                trace!("parse_document: Close <{}>", element.name);
                attach(&mut open, &mut root, element)?;
            }
            Ok(Event::Eof) => {
                trace!("parse_document: EOF");
                break;
            }
            Ok(_) => {}
            Err(e) => {
                return Err(Error::SvgParse(format!(
                    "Error when parsing XML at position {}: {}",
                    reader.buffer_position(),
                    e
                )))
            }
        }

        buf.clear();
    }

    if let Some(unclosed) = open.last() {
        return Err(Error::SvgParse(format!(
            "Element <{}> is never closed",
            unclosed.name
        )));
    }
    root.ok_or_else(|| Error::SvgParse("Document has no root element".into()))
}

/// Read the file at `path` and parse it into its root element.
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Element, Error> {
    trace!("parse_file: {}", path.as_ref().display());
    let svg = fs::read_to_string(path)?;
    parse_document(&svg)
}
