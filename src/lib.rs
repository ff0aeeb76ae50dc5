//! Lenient streaming tokenizer for XML-like markup
//!
//! Splits a document (XML, SVG, loose HTML-ish) into raw lexical tokens:
//! tags, text, comments, CDATA sections, directives and processing
//! instructions. No tree is built, well-formedness is not validated, and
//! namespaces and entities are left untouched. Tokens borrow from the input,
//! and concatenating their raw text reproduces it byte-for-byte, malformed
//! markup included: there is no input that makes the tokenizer fail.
//!
//! Attribute extraction is lazy: start and empty-element tokens re-scan
//! their own slice on demand.
//!
//! ```
//! use laxml::{Token, Tokenizer};
//!
//! let mut tokens = Tokenizer::new(r#"<circle r="5"/><p>hi</p>"#);
//!
//! let circle = tokens.next_token().unwrap();
//! assert!(matches!(circle, Token::EmptyElement(_)));
//! assert_eq!(circle.name(), Some("circle"));
//! assert_eq!(circle.attribute("r"), Some("5"));
//!
//! let rest: Vec<_> = tokens.map(|t| t.raw()).collect();
//! assert_eq!(rest, ["<p>", "hi", "</p>"]);
//! ```

mod attributes;
mod scanner;
mod token;
mod tokenizer;

pub use attributes::Attribute;
pub use token::Token;
pub use tokenizer::Tokenizer;
