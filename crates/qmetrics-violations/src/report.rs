//! PMD XML report reading.
//!
//! Only the shape the extractor needs is kept: every `violation` that is a
//! direct child of a `file` element, with its attributes and text. `file`
//! elements may sit at any depth and elements are matched by local name, so
//! the report's default namespace does not matter.

use std::io::BufRead;

use anyhow::{Result, bail};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

/// One `violation` element as it appears in the report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawViolation {
    /// `name` attribute of the enclosing `file` element.
    pub file: String,
    /// `rule` attribute, empty when absent.
    pub rule: String,
    /// Unescaped, trimmed message text.
    pub text: String,
    /// Every attribute in document order.
    pub attributes: Vec<(String, String)>,
}

impl RawViolation {
    /// Value of the attribute named exactly `name`.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

enum Frame {
    File(String),
    Violation,
    Other,
}

/// Read every violation from a PMD XML report.
///
/// Malformed XML is an error; unknown elements and attributes are ignored.
pub fn parse_report<R: BufRead>(input: R) -> Result<Vec<RawViolation>> {
    let mut reader = Reader::from_reader(input);
    let mut buf = Vec::new();
    let mut stack: Vec<Frame> = Vec::new();
    let mut current: Option<RawViolation> = None;
    let mut out = Vec::new();
    let mut saw_root = false;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                saw_root = true;
                match e.local_name().as_ref() {
                    b"file" => {
                        let name = attribute(&e, b"name")?.unwrap_or_default();
                        stack.push(Frame::File(name));
                    }
                    b"violation" if current.is_none() => match stack.last() {
                        Some(Frame::File(file)) => {
                            current = Some(read_violation(&e, file)?);
                            stack.push(Frame::Violation);
                        }
                        _ => stack.push(Frame::Other),
                    },
                    _ => stack.push(Frame::Other),
                }
            }
            Ok(Event::Empty(e)) => {
                saw_root = true;
                if e.local_name().as_ref() == b"violation" {
                    if let Some(Frame::File(file)) = stack.last() {
                        out.push(read_violation(&e, file)?);
                    }
                }
            }
            Ok(Event::End(_)) => {
                if let Some(Frame::Violation) = stack.pop() {
                    if let Some(mut violation) = current.take() {
                        violation.text = violation.text.trim().to_string();
                        out.push(violation);
                    }
                }
            }
            Ok(Event::Text(t)) => {
                if let Some(violation) = open_violation(&stack, &mut current) {
                    violation.text.push_str(&t.unescape()?);
                }
            }
            Ok(Event::CData(c)) => {
                if let Some(violation) = open_violation(&stack, &mut current) {
                    violation.text.push_str(&String::from_utf8_lossy(&c.into_inner()));
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => bail!("malformed XML at byte {}: {e}", reader.buffer_position()),
            _ => {}
        }
        buf.clear();
    }

    if !saw_root {
        bail!("report contains no root element");
    }
    if !stack.is_empty() {
        bail!("report ends inside an unclosed element");
    }
    Ok(out)
}

/// The violation whose text is being collected, if the cursor is directly
/// inside it.
fn open_violation<'a>(
    stack: &[Frame],
    current: &'a mut Option<RawViolation>,
) -> Option<&'a mut RawViolation> {
    match stack.last() {
        Some(Frame::Violation) => current.as_mut(),
        _ => None,
    }
}

fn read_violation(e: &BytesStart<'_>, file: &str) -> Result<RawViolation> {
    let mut attributes = Vec::new();
    for attr in e.attributes() {
        let attr = attr?;
        let key = String::from_utf8_lossy(attr.key.local_name().as_ref()).into_owned();
        let value = attr.unescape_value()?.into_owned();
        attributes.push((key, value));
    }
    let rule = attributes
        .iter()
        .find(|(key, _)| key == "rule")
        .map(|(_, value)| value.clone())
        .unwrap_or_default();
    Ok(RawViolation {
        file: file.to_string(),
        rule,
        text: String::new(),
        attributes,
    })
}

fn attribute(e: &BytesStart<'_>, name: &[u8]) -> Result<Option<String>> {
    for attr in e.attributes() {
        let attr = attr?;
        if attr.key.local_name().as_ref() == name {
            return Ok(Some(attr.unescape_value()?.into_owned()));
        }
    }
    Ok(None)
}
