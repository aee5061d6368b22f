use anyhow::{bail, Context, Result};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

/// Minimal element tree for the build document: name, attributes,
/// direct children, and accumulated text content. The schema is shallow
/// enough that a full DOM crate would be overkill.
#[derive(Debug, Default)]
pub struct Element {
    pub name: String,
    attrs: Vec<(String, String)>,
    pub children: Vec<Element>,
    pub text: String,
}

impl Element {
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// First direct child with the given tag name.
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name == name)
    }

    /// All direct children with the given tag name, in document order.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> {
        self.children.iter().filter(move |c| c.name == name)
    }
}

/// Parse an XML document into its root element.
pub fn parse(xml: &str) -> Result<Element> {
    let mut reader = Reader::from_str(xml);
    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        match reader.read_event()? {
            Event::Start(e) => stack.push(open_element(&e)?),
            Event::Empty(e) => {
                let el = open_element(&e)?;
                close_element(&mut stack, &mut root, el);
            }
            Event::End(_) => {
                // The reader validates tag balance, so the stack is
                // never empty here for well-formed input.
                let el = stack.pop().context("unbalanced closing tag")?;
                close_element(&mut stack, &mut root, el);
            }
            Event::Text(e) => {
                if let Some(open) = stack.last_mut() {
                    open.text.push_str(&e.unescape()?);
                }
            }
            Event::CData(e) => {
                if let Some(open) = stack.last_mut() {
                    let bytes = e.into_inner().into_owned();
                    open.text
                        .push_str(std::str::from_utf8(&bytes).context("CDATA is not UTF-8")?);
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        bail!("unexpected end of document inside <{}>", open.name);
    }
    root.context("document has no root element")
}

fn open_element(e: &BytesStart) -> Result<Element> {
    let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
    let mut attrs = Vec::new();
    for attr in e.attributes() {
        let attr = attr?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr.unescape_value()?.into_owned();
        attrs.push((key, value));
    }
    Ok(Element {
        name,
        attrs,
        children: Vec::new(),
        text: String::new(),
    })
}

fn close_element(stack: &mut Vec<Element>, root: &mut Option<Element>, el: Element) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(el),
        None => {
            if root.is_none() {
                *root = Some(el);
            }
        }
    }
}
