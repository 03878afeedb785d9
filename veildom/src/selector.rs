//! A small CSS selector matcher.
//!
//! Supports comma-separated lists of compound selectors made of a tag (or
//! `*`), `#id`, `.class`, `[attr]` and `[attr=value]` parts. Combinators are
//! not supported.

use crate::element::Element;
use crate::error::DomError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    alternatives: Vec<Compound>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Compound {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attrs: Vec<AttrMatch>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct AttrMatch {
    name: String,
    value: Option<String>,
}

impl Selector {
    pub fn parse(input: &str) -> Result<Self, DomError> {
        let invalid = |reason: &str| DomError::InvalidSelector {
            selector: input.to_string(),
            reason: reason.to_string(),
        };

        let mut alternatives = Vec::new();
        for part in input.split(',') {
            let part = part.trim();
            if part.is_empty() {
                return Err(invalid("empty selector"));
            }
            if part.contains(char::is_whitespace) {
                return Err(invalid("combinators are not supported"));
            }
            alternatives.push(parse_compound(part).map_err(|reason| invalid(&reason))?);
        }

        Ok(Self { alternatives })
    }

    pub fn matches(&self, element: &Element) -> bool {
        self.alternatives.iter().any(|c| c.matches(element))
    }

    /// First descendant of `root` (in tree order) that matches.
    pub fn query<'a>(&self, root: &'a Element) -> Option<&'a Element> {
        root.children.iter().find_map(|child| self.query_inclusive(child))
    }

    fn query_inclusive<'a>(&self, element: &'a Element) -> Option<&'a Element> {
        if self.matches(element) {
            return Some(element);
        }
        element
            .children
            .iter()
            .find_map(|child| self.query_inclusive(child))
    }

    /// All matching descendants of `root`, in tree order.
    pub fn query_all<'a>(&self, root: &'a Element) -> Vec<&'a Element> {
        let mut result = Vec::new();
        for child in &root.children {
            self.query_all_recursive(child, &mut result);
        }
        result
    }

    fn query_all_recursive<'a>(&self, element: &'a Element, result: &mut Vec<&'a Element>) {
        if self.matches(element) {
            result.push(element);
        }
        for child in &element.children {
            self.query_all_recursive(child, result);
        }
    }
}

impl Compound {
    fn matches(&self, element: &Element) -> bool {
        if self.tag.as_ref().is_some_and(|tag| *tag != element.tag) {
            return false;
        }
        if self.id.as_ref().is_some_and(|id| *id != element.id) {
            return false;
        }
        if !self.classes.iter().all(|c| element.has_class(c)) {
            return false;
        }
        self.attrs.iter().all(|a| match (&a.value, element.get_attr(&a.name)) {
            (None, found) => found.is_some(),
            (Some(expected), Some(found)) => expected == found,
            (Some(_), None) => false,
        })
    }
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

fn take_ident(chars: &[char], pos: &mut usize) -> Result<String, String> {
    let start = *pos;
    while *pos < chars.len() && is_ident_char(chars[*pos]) {
        *pos += 1;
    }
    if *pos == start {
        return Err(format!("expected identifier at offset {start}"));
    }
    Ok(chars[start..*pos].iter().collect())
}

fn parse_compound(input: &str) -> Result<Compound, String> {
    let chars: Vec<char> = input.chars().collect();
    let mut pos = 0;
    let mut compound = Compound::default();

    if chars[0] == '*' {
        pos = 1;
    } else if is_ident_char(chars[0]) {
        compound.tag = Some(take_ident(&chars, &mut pos)?);
    }

    while pos < chars.len() {
        match chars[pos] {
            '#' => {
                pos += 1;
                compound.id = Some(take_ident(&chars, &mut pos)?);
            }
            '.' => {
                pos += 1;
                compound.classes.push(take_ident(&chars, &mut pos)?);
            }
            '[' => {
                pos += 1;
                compound.attrs.push(parse_attr(&chars, &mut pos)?);
            }
            other => return Err(format!("unexpected '{other}' at offset {pos}")),
        }
    }

    Ok(compound)
}

fn parse_attr(chars: &[char], pos: &mut usize) -> Result<AttrMatch, String> {
    let name = take_ident(chars, pos)?;
    let value = if chars.get(*pos) == Some(&'=') {
        *pos += 1;
        Some(parse_attr_value(chars, pos)?)
    } else {
        None
    };

    if chars.get(*pos) != Some(&']') {
        return Err("unterminated attribute selector".to_string());
    }
    *pos += 1;

    Ok(AttrMatch { name, value })
}

fn parse_attr_value(chars: &[char], pos: &mut usize) -> Result<String, String> {
    match chars.get(*pos) {
        Some(&quote) if quote == '"' || quote == '\'' => {
            let start = *pos + 1;
            let end = chars[start..]
                .iter()
                .position(|&c| c == quote)
                .map(|offset| start + offset)
                .ok_or_else(|| "unterminated quoted value".to_string())?;
            *pos = end + 1;
            Ok(chars[start..end].iter().collect())
        }
        _ => take_ident(chars, pos),
    }
}
