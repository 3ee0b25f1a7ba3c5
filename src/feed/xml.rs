use quick_xml::escape::{unescape, EscapeError};
use quick_xml::events::Event;
use quick_xml::Reader;
use std::str::Utf8Error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("{0}")]
    Xml(#[from] quick_xml::Error),
    #[error("unexpected end tag </{0}>")]
    UnexpectedEnd(String),
    #[error("unclosed element <{0}>")]
    Unclosed(String),
    #[error("element <{0}> after the root element")]
    TrailingElement(String),
    #[error("document has no root element")]
    NoRoot,
}

#[derive(Debug, Error)]
pub enum TextError {
    #[error("invalid UTF-8: {0}")]
    Utf8(#[from] Utf8Error),
    #[error("{0}")]
    Escape(#[from] EscapeError),
}

// Text is kept raw until someone asks for it, so a bad entity in one element
// only spoils that element.
#[derive(Debug, Clone, PartialEq)]
enum Chunk {
    Text(Vec<u8>),
    CData(Vec<u8>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    name: String,
    content: Vec<Chunk>,
    children: Vec<Element>,
}

impl Element {
    fn new(name: &[u8]) -> Self {
        Element {
            name: String::from_utf8_lossy(name).into_owned(),
            content: Vec::new(),
            children: Vec::new(),
        }
    }

    /// First direct child with the given qualified name.
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|child| child.name == name)
    }

    /// Every element below this one with the given name, in document order.
    pub fn descendants<'a>(&'a self, name: &'a str) -> Descendants<'a> {
        Descendants {
            name,
            stack: self.children.iter().rev().collect(),
        }
    }

    /// The element's own text with entities resolved. CDATA is taken verbatim.
    pub fn text(&self) -> Result<String, TextError> {
        let mut text = String::new();
        for chunk in &self.content {
            match chunk {
                Chunk::Text(raw) => text.push_str(&unescape(std::str::from_utf8(raw)?)?),
                Chunk::CData(raw) => text.push_str(std::str::from_utf8(raw)?),
            }
        }
        Ok(text)
    }
}

pub struct Descendants<'a> {
    name: &'a str,
    stack: Vec<&'a Element>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<&'a Element> {
        while let Some(element) = self.stack.pop() {
            self.stack.extend(element.children.iter().rev());
            if element.name == self.name {
                return Some(element);
            }
        }
        None
    }
}

fn attach(
    element: Element,
    stack: &mut Vec<Element>,
    root: &mut Option<Element>,
) -> Result<(), ParseError> {
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None if root.is_some() => return Err(ParseError::TrailingElement(element.name)),
        None => *root = Some(element),
    }
    Ok(())
}

pub fn parse(bytes: &[u8]) -> Result<Element, ParseError> {
    let mut reader = Reader::from_reader(bytes);

    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => {
                if stack.is_empty() && root.is_some() {
                    return Err(ParseError::TrailingElement(
                        String::from_utf8_lossy(e.name().as_ref()).into_owned(),
                    ));
                }
                stack.push(Element::new(e.name().as_ref()));
            }
            Event::Empty(e) => attach(Element::new(e.name().as_ref()), &mut stack, &mut root)?,
            Event::End(e) => match stack.pop() {
                Some(element) => attach(element, &mut stack, &mut root)?,
                None => {
                    return Err(ParseError::UnexpectedEnd(
                        String::from_utf8_lossy(e.name().as_ref()).into_owned(),
                    ))
                }
            },
            // Indentation between tags is dropped, field text is kept as written.
            Event::Text(e) if e.iter().all(u8::is_ascii_whitespace) => {}
            Event::Text(e) => {
                if let Some(element) = stack.last_mut() {
                    element.content.push(Chunk::Text(e.into_inner().into_owned()));
                }
            }
            Event::CData(e) => {
                if let Some(element) = stack.last_mut() {
                    element.content.push(Chunk::CData(e.into_inner().into_owned()));
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    if let Some(open) = stack.pop() {
        return Err(ParseError::Unclosed(open.name));
    }

    root.ok_or(ParseError::NoRoot)
}
