//! Token model: one lexical unit of markup carrying its exact source text.

use crate::attributes::{self, Attribute};
use crate::scanner::is_whitespace;

/// One lexical unit of markup.
///
/// Every variant stores exactly the source slice it was lexed from, with no
/// parsed sub-structure cached, so re-emitting `raw()` for each token in
/// order reproduces the input byte-for-byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// Character data between markup
    Text(&'a str),
    /// CDATA section: `<![CDATA[...]]>`
    Cdata(&'a str),
    /// Comment: `<!--...-->`
    Comment(&'a str),
    /// Declaration: `<!...>`, DOCTYPE included
    Directive(&'a str),
    /// Processing instruction: `<?...?>`
    ProcessingInstruction(&'a str),
    /// Element start tag: `<name ...>`
    StartElement(&'a str),
    /// Element end tag: `</name>`
    EndElement(&'a str),
    /// Self-closing tag: `<name .../>`
    EmptyElement(&'a str),
}

impl<'a> Token<'a> {
    /// Exact source text of this token.
    pub fn raw(&self) -> &'a str {
        match *self {
            Token::Text(raw)
            | Token::Cdata(raw)
            | Token::Comment(raw)
            | Token::Directive(raw)
            | Token::ProcessingInstruction(raw)
            | Token::StartElement(raw)
            | Token::EndElement(raw)
            | Token::EmptyElement(raw) => raw,
        }
    }

    /// Element name of a start, empty or end tag; `None` for other tokens.
    ///
    /// A truncated end tag shorter than `</x` yields an empty name rather
    /// than failing.
    pub fn name(&self) -> Option<&'a str> {
        match *self {
            Token::StartElement(raw) | Token::EmptyElement(raw) => Some(start_name(raw)),
            Token::EndElement(raw) => Some(end_name(raw)),
            _ => None,
        }
    }

    /// Attributes of a start or empty-element tag, in source order with
    /// duplicate keys preserved; `None` for tokens that cannot carry any.
    ///
    /// The tag text is re-scanned on every call, so results are repeatable
    /// and independent of the tokenizer.
    pub fn attributes(&self) -> Option<Vec<Attribute<'a>>> {
        self.interior().map(attributes::scan)
    }

    /// Content of the first attribute whose name matches `name`
    /// case-insensitively, on a start or empty-element tag.
    pub fn attribute(&self, name: &str) -> Option<&'a str> {
        attributes::find(self.interior()?, name)
    }

    /// Tag text with the delimiters stripped: `<` and `>` for a start tag,
    /// `<` and `/>` for an empty-element tag.
    fn interior(&self) -> Option<&'a str> {
        match *self {
            Token::StartElement(raw) => Some(trim_last_char(strip_open(raw))),
            Token::EmptyElement(raw) => Some(trim_last_char(trim_last_char(strip_open(raw)))),
            _ => None,
        }
    }
}

/// Drop the opening `<`.
fn strip_open(raw: &str) -> &str {
    &raw[1..]
}

/// Name of a start or empty tag: after the `<`, up to the first whitespace,
/// `>` or `/`, or the whole remainder.
fn start_name(raw: &str) -> &str {
    let rest = strip_open(raw);
    match rest
        .as_bytes()
        .iter()
        .position(|&b| is_whitespace(b) || b == b'>' || b == b'/')
    {
        Some(i) => &rest[..i],
        None => rest,
    }
}

/// Name of an end tag: between `</` and the closing `>`.
fn end_name(raw: &str) -> &str {
    if raw.len() < 3 {
        return "";
    }
    trim_last_char(&raw[2..])
}

/// Drop the final character. Truncated tags can end mid-way through a
/// multi-byte sequence, so this backs up to a char boundary instead of
/// assuming a one-byte delimiter.
fn trim_last_char(s: &str) -> &str {
    let mut end = s.len().saturating_sub(1);
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_element_name() {
        assert_eq!(Token::StartElement("<doc>").name(), Some("doc"));
        assert_eq!(Token::StartElement("<svg xmlns=\"x\">").name(), Some("svg"));
        assert_eq!(Token::StartElement("<elem").name(), Some("elem"));
    }

    #[test]
    fn test_empty_element_name() {
        assert_eq!(Token::EmptyElement("<br/>").name(), Some("br"));
        assert_eq!(Token::EmptyElement("<circle r=\"5\"/>").name(), Some("circle"));
    }

    #[test]
    fn test_end_element_name() {
        assert_eq!(Token::EndElement("</doc>").name(), Some("doc"));
        assert_eq!(Token::EndElement("</>").name(), Some(""));
        assert_eq!(Token::EndElement("</").name(), Some(""));
    }

    #[test]
    fn test_text_has_no_name() {
        assert_eq!(Token::Text("hello").name(), None);
        assert_eq!(Token::Comment("<!-- x -->").name(), None);
    }

    #[test]
    fn test_attribute_capability() {
        let start = Token::StartElement("<a title=\"hello world\">");
        assert_eq!(start.attribute("title"), Some("hello world"));

        let empty = Token::EmptyElement("<circle r=\"5\"/>");
        assert_eq!(empty.attribute("r"), Some("5"));

        assert_eq!(Token::EndElement("</a>").attribute("title"), None);
        assert_eq!(Token::Text("title=\"x\"").attribute("title"), None);
    }

    #[test]
    fn test_attributes_repeatable() {
        let tok = Token::StartElement("<a one=\"1\" two='2' three>");
        let first = tok.attributes().unwrap();
        let second = tok.attributes().unwrap();
        assert_eq!(first, second);
        assert_eq!(first.len(), 3);
    }
}
