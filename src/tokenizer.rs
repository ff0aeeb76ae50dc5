//! Main token scanner: pull-style lexing over a markup buffer.

use crate::scanner::Scanner;
use crate::token::Token;

/// Pull tokenizer over a buffer of XML-like markup.
///
/// Produces tokens in document order until the input is exhausted. There is
/// no failure mode: malformed markup is passed through rather than
/// rejected. An unterminated comment, CDATA section, processing instruction
/// or end tag degrades to plain text up to the next `<`, and a stray `<`
/// inside a tag truncates the tag and is re-lexed. The cursor advances on
/// every token, so any input of `n` bytes yields at most `n` tokens.
pub struct Tokenizer<'a> {
    scanner: Scanner<'a>,
}

impl<'a> Tokenizer<'a> {
    /// Create a tokenizer borrowing the given input.
    pub fn new(input: &'a str) -> Self {
        Tokenizer {
            scanner: Scanner::new(input),
        }
    }

    /// Current byte offset into the input.
    pub fn position(&self) -> usize {
        self.scanner.position()
    }

    /// Get the next token, or `None` once the input is exhausted.
    pub fn next_token(&mut self) -> Option<Token<'a>> {
        if self.scanner.is_eof() {
            return None;
        }

        // Anything shorter than the smallest closed markup construct, or
        // not starting with '<', is text up to the next '<'.
        if !self.scanner.has_remaining(4) || self.scanner.peek_at(0) != Some(b'<') {
            return Some(self.next_text());
        }

        let token = match self.scanner.peek_at(1) {
            Some(b'?') => match self.scanner.shift_marker("?>") {
                Some(raw) => Token::ProcessingInstruction(raw),
                None => self.next_text(),
            },
            Some(b'!') => self.next_bang(),
            Some(b'/') => match self.scanner.shift_marker(">") {
                Some(raw) => Token::EndElement(raw),
                None => self.next_text(),
            },
            _ => self.next_element(),
        };
        Some(token)
    }

    /// Universal fallback: text up to the next `<` or to end of input.
    fn next_text(&mut self) -> Token<'a> {
        Token::Text(self.scanner.shift_until(b'<'))
    }

    /// Lex a construct opening with `<!`.
    fn next_bang(&mut self) -> Token<'a> {
        if self.scanner.starts_with("<!--") {
            return match self.scanner.shift_marker("-->") {
                Some(raw) => Token::Comment(raw),
                None => self.next_text(),
            };
        }
        if self.scanner.starts_with("<![CDATA[") {
            return match self.scanner.shift_marker("]]>") {
                Some(raw) => Token::Cdata(raw),
                None => self.next_text(),
            };
        }
        self.next_directive()
    }

    /// Lex a `<!...>` directive.
    ///
    /// A DOCTYPE with an internal subset additionally consumes through one
    /// `]` and the following `>`. Nested subset brackets are not balanced.
    fn next_directive(&mut self) -> Token<'a> {
        let start = self.scanner.position();
        let raw = match self.scanner.shift_marker(">") {
            Some(raw) => raw,
            None => return self.next_text(),
        };

        if raw.starts_with("<!DOCTYPE") && raw.contains('[') {
            if self.scanner.shift_marker("]").is_none() {
                self.scanner.shift_until(b'<');
            }
            if self.scanner.shift_marker(">").is_none() {
                self.scanner.shift_until(b'<');
            }
            return Token::Directive(self.scanner.slice(start, self.scanner.position()));
        }

        Token::Directive(raw)
    }

    /// Lex a start or empty-element tag via the tag-boundary scan.
    fn next_element(&mut self) -> Token<'a> {
        let raw = self.scanner.shift_element();
        let bytes = raw.as_bytes();
        if bytes.len() >= 3 && bytes[bytes.len() - 2] == b'/' {
            Token::EmptyElement(raw)
        } else {
            Token::StartElement(raw)
        }
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}
