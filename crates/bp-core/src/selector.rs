//! Simple CSS selector parsing
//!
//! Filter-list probes are built from single-element selectors such as
//! `div#ad_box.sponsor[href^="https://ads."]`. The parser turns one of those
//! into a tag plus a list of attribute predicates, which is enough both to
//! synthesize an element the selector matches and to evaluate the selector
//! against an element in the in-memory host.

use std::collections::BTreeMap;

use serde::Serialize;

/// Error type for selector parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectorError {
    #[error("Empty selector")]
    Empty,
    #[error("Unexpected complex selector '{selector}': found '{found}' outside of brackets")]
    Combinator { selector: String, found: char },
    #[error("Unexpected syntax '{selector}' at byte {position}")]
    UnexpectedSyntax { selector: String, position: usize },
    #[error("Selector '{selector}' has a duplicating attribute '{attribute}'")]
    DuplicateAttribute { selector: String, attribute: String },
}

/// Attribute comparison operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttrOperator {
    /// `[attr]`
    Exists,
    /// `[attr=value]`, also `#id`
    Equals,
    /// `[attr^=value]`
    Prefix,
    /// `[attr*=value]`
    Substring,
    /// `[attr$=value]`
    Suffix,
    /// `[attr~=value]`, also `.class`
    Word,
    /// `[attr|=value]`
    DashPrefix,
}

/// One attribute requirement of a selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributePredicate {
    /// Lowercased attribute name
    pub name: String,
    pub operator: AttrOperator,
    /// Required value, empty for `Exists`
    pub value: String,
    /// Trailing ` i` flag
    pub case_insensitive: bool,
}

impl AttributePredicate {
    fn new(name: &str, operator: AttrOperator, value: &str) -> Self {
        Self {
            name: name.to_ascii_lowercase(),
            operator,
            value: value.to_string(),
            case_insensitive: false,
        }
    }

    /// Check an attribute value (or its absence) against this predicate.
    pub fn matches(&self, actual: Option<&str>) -> bool {
        let Some(actual) = actual else {
            return false;
        };

        if self.case_insensitive {
            let actual = actual.to_lowercase();
            let expected = self.value.to_lowercase();
            compare(self.operator, &actual, &expected)
        } else {
            compare(self.operator, actual, &self.value)
        }
    }
}

fn compare(operator: AttrOperator, actual: &str, expected: &str) -> bool {
    match operator {
        AttrOperator::Exists => true,
        AttrOperator::Equals => actual == expected,
        AttrOperator::Prefix => !expected.is_empty() && actual.starts_with(expected),
        AttrOperator::Substring => !expected.is_empty() && actual.contains(expected),
        AttrOperator::Suffix => !expected.is_empty() && actual.ends_with(expected),
        AttrOperator::Word => {
            !expected.is_empty()
                && !expected.contains(char::is_whitespace)
                && actual.split_ascii_whitespace().any(|word| word == expected)
        }
        AttrOperator::DashPrefix => {
            actual == expected
                || (actual.len() > expected.len()
                    && actual.starts_with(expected)
                    && actual.as_bytes()[expected.len()] == b'-')
        }
    }
}

/// A selector decomposed into tag and attribute predicates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedSelector {
    /// Tag name as written, `None` when the selector has no type part
    pub tag: Option<String>,
    /// Predicates in source order
    pub predicates: Vec<AttributePredicate>,
}

impl ParsedSelector {
    /// Required values grouped by attribute name.
    ///
    /// `class` may hold several values; every other name holds exactly one
    /// after a successful parse.
    pub fn attributes(&self) -> BTreeMap<&str, Vec<&str>> {
        let mut attributes: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
        for predicate in &self.predicates {
            attributes
                .entry(predicate.name.as_str())
                .or_default()
                .push(predicate.value.as_str());
        }
        attributes
    }

    /// Evaluate the selector against an element.
    pub fn matches(&self, tag: &str, attributes: &[(String, String)]) -> bool {
        if let Some(expected) = &self.tag {
            if !expected.eq_ignore_ascii_case(tag) {
                return false;
            }
        }

        self.predicates.iter().all(|predicate| {
            let actual = attributes
                .iter()
                .find(|(name, _)| name.eq_ignore_ascii_case(&predicate.name))
                .map(|(_, value)| value.as_str());
            predicate.matches(actual)
        })
    }
}

/// Minimal element description that a selector matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ElementSpec {
    pub tag: String,
    pub attributes: Vec<(String, String)>,
}

impl ElementSpec {
    /// Synthesize the element for a parsed selector.
    ///
    /// Class names are joined with a space. Every other attribute takes its
    /// first required value, which the parser guarantees is the only one.
    pub fn from_selector(parsed: &ParsedSelector) -> Self {
        let tag = parsed.tag.clone().unwrap_or_else(|| "div".to_string());
        let attributes = parsed
            .attributes()
            .into_iter()
            .map(|(name, values)| {
                let value = if name == "class" {
                    values.join(" ")
                } else {
                    values.first().copied().unwrap_or_default().to_string()
                };
                (name.to_string(), value)
            })
            .collect();

        Self { tag, attributes }
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(attr, _)| attr == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Parse and validate a single-element selector.
pub fn parse_selector(selector: &str) -> Result<ParsedSelector, SelectorError> {
    let text = selector.trim();
    if text.is_empty() {
        return Err(SelectorError::Empty);
    }

    let mut cursor = Cursor { text, bytes: text.as_bytes(), pos: 0 };
    let tag = cursor.take_tag();
    let mut predicates = Vec::new();

    while let Some(byte) = cursor.peek() {
        match byte {
            b'.' => {
                cursor.pos += 1;
                let name = cursor.take_ident().ok_or_else(|| cursor.syntax_error())?;
                predicates.push(AttributePredicate::new("class", AttrOperator::Word, name));
            }
            b'#' => {
                cursor.pos += 1;
                let name = cursor.take_ident().ok_or_else(|| cursor.syntax_error())?;
                predicates.push(AttributePredicate::new("id", AttrOperator::Equals, name));
            }
            b'[' => predicates.push(cursor.take_attribute()?),
            b' ' | b'\t' | b'\n' | b'\r' | b'>' | b'+' | b'~' | b',' => {
                return Err(SelectorError::Combinator {
                    selector: text.to_string(),
                    found: byte as char,
                });
            }
            _ => return Err(cursor.syntax_error()),
        }
    }

    if tag.is_none() && predicates.is_empty() {
        return Err(cursor.syntax_error());
    }

    for (index, predicate) in predicates.iter().enumerate() {
        if predicate.name == "class" {
            continue;
        }
        if predicates[..index].iter().any(|earlier| earlier.name == predicate.name) {
            return Err(SelectorError::DuplicateAttribute {
                selector: text.to_string(),
                attribute: predicate.name.clone(),
            });
        }
    }

    Ok(ParsedSelector { tag: tag.map(str::to_string), predicates })
}

struct Cursor<'a> {
    text: &'a str,
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn syntax_error(&self) -> SelectorError {
        SelectorError::UnexpectedSyntax {
            selector: self.text.to_string(),
            position: self.pos,
        }
    }

    fn take_while(&mut self, accept: impl Fn(u8) -> bool) -> &'a str {
        let start = self.pos;
        while self.peek().is_some_and(&accept) {
            self.pos += 1;
        }
        &self.text[start..self.pos]
    }

    fn take_tag(&mut self) -> Option<&'a str> {
        if !self.peek().is_some_and(|b| b.is_ascii_alphabetic()) {
            return None;
        }
        Some(self.take_while(|b| b.is_ascii_alphanumeric() || b == b'-'))
    }

    fn take_ident(&mut self) -> Option<&'a str> {
        let ident = self.take_while(is_ident_byte);
        (!ident.is_empty()).then_some(ident)
    }

    fn skip_whitespace(&mut self) {
        self.take_while(|b| b.is_ascii_whitespace());
    }

    fn expect(&mut self, byte: u8) -> Result<(), SelectorError> {
        if self.peek() == Some(byte) {
            self.pos += 1;
            Ok(())
        } else {
            Err(self.syntax_error())
        }
    }

    /// `[name]`, `[name<op>value]` or `[name<op>value i]`
    fn take_attribute(&mut self) -> Result<AttributePredicate, SelectorError> {
        self.expect(b'[')?;
        self.skip_whitespace();
        let name = self.take_ident().ok_or_else(|| self.syntax_error())?;
        self.skip_whitespace();

        if self.peek() == Some(b']') {
            self.pos += 1;
            return Ok(AttributePredicate::new(name, AttrOperator::Exists, ""));
        }

        let operator = match self.peek() {
            Some(b'=') => AttrOperator::Equals,
            Some(b'^') => AttrOperator::Prefix,
            Some(b'*') => AttrOperator::Substring,
            Some(b'$') => AttrOperator::Suffix,
            Some(b'~') => AttrOperator::Word,
            Some(b'|') => AttrOperator::DashPrefix,
            _ => return Err(self.syntax_error()),
        };
        if operator != AttrOperator::Equals {
            self.pos += 1;
        }
        self.expect(b'=')?;
        self.skip_whitespace();

        let value = match self.peek() {
            Some(quote @ (b'"' | b'\'')) => {
                self.pos += 1;
                let value = self.take_while(|b| b != quote);
                self.expect(quote)?;
                value
            }
            _ => self.take_ident().ok_or_else(|| self.syntax_error())?,
        };

        let mut predicate = AttributePredicate::new(name, operator, value);

        let before_flag = self.pos;
        self.skip_whitespace();
        match self.peek() {
            Some(b'i' | b'I') if self.pos > before_flag => {
                predicate.case_insensitive = true;
                self.pos += 1;
                self.skip_whitespace();
            }
            Some(b's' | b'S') if self.pos > before_flag => {
                self.pos += 1;
                self.skip_whitespace();
            }
            _ => {}
        }

        self.expect(b']')?;
        Ok(predicate)
    }
}

fn is_ident_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'-' || byte == b'_' || byte >= 0x80
}
