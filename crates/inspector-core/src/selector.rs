//! Exclusion selectors.
//!
//! A small CSS subset, enough to describe which page regions the inspector
//! must ignore: comma-separated groups of compound selectors (`tag`, `*`,
//! `#id`, `.class`, `[attr]`, `[attr=value]`) joined by descendant
//! (whitespace) or child (`>`) combinators.

use std::fmt;
use std::str::FromStr;

use inspector_protocols::{ElementHandle, SelectorError};

#[derive(Debug, Clone, PartialEq, Eq)]
enum AttrCondition {
    Exists(String),
    Equals(String, String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct CompoundSelector {
    tag: Option<String>,
    universal: bool,
    id: Option<String>,
    classes: Vec<String>,
    attrs: Vec<AttrCondition>,
}

impl CompoundSelector {
    fn matches<E: ElementHandle>(&self, element: &E) -> bool {
        if let Some(ref tag) = self.tag {
            if !element.tag_name().eq_ignore_ascii_case(tag) {
                return false;
            }
        }
        if let Some(ref id) = self.id {
            if element.id() != *id {
                return false;
            }
        }
        if !self.classes.is_empty() {
            let classes = element.class_list();
            if !self.classes.iter().all(|c| classes.contains(c)) {
                return false;
            }
        }
        self.attrs.iter().all(|cond| match cond {
            AttrCondition::Exists(name) => element.has_attribute(name),
            AttrCondition::Equals(name, value) => {
                element.attribute(name).as_deref() == Some(value.as_str())
            }
        })
    }

    fn is_empty(&self) -> bool {
        self.tag.is_none()
            && !self.universal
            && self.id.is_none()
            && self.classes.is_empty()
            && self.attrs.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Combinator {
    Descendant,
    Child,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct SelectorPart {
    compound: CompoundSelector,
    // Relation to the part on the left.
    combinator: Option<Combinator>,
}

/// A parsed exclusion selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    source: String,
    groups: Vec<Vec<SelectorPart>>,
}

impl Selector {
    pub fn parse(selector: &str) -> Result<Self, SelectorError> {
        let source = selector.trim();
        if source.is_empty() {
            return Err(SelectorError::Empty);
        }

        let groups = split_groups(source)?
            .iter()
            .map(|group| parse_chain(group))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            source: source.to_string(),
            groups,
        })
    }

    /// The selector text as written.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Whether `element` itself matches any group.
    pub fn matches<E: ElementHandle>(&self, element: &E) -> bool {
        self.groups.iter().any(|parts| matches_parts(parts, element))
    }

    /// Whether `element` or one of its ancestors matches (DOM `closest`).
    pub fn matches_self_or_ancestor<E: ElementHandle>(&self, element: &E) -> bool {
        element
            .ancestors_inclusive()
            .iter()
            .any(|candidate| self.matches(candidate))
    }
}

impl FromStr for Selector {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

fn matches_parts<E: ElementHandle>(parts: &[SelectorPart], element: &E) -> bool {
    let Some((last, rest)) = parts.split_last() else {
        return true;
    };
    if !last.compound.matches(element) {
        return false;
    }
    if rest.is_empty() {
        return true;
    }

    match last.combinator {
        Some(Combinator::Child) => element
            .parent()
            .is_some_and(|parent| matches_parts(rest, &parent)),
        _ => {
            let mut current = element.parent();
            while let Some(ancestor) = current {
                if matches_parts(rest, &ancestor) {
                    return true;
                }
                current = ancestor.parent();
            }
            false
        }
    }
}

/// Splits on top-level commas, keeping brackets and quotes intact.
fn split_groups(selector: &str) -> Result<Vec<String>, SelectorError> {
    let mut groups = Vec::new();
    let mut current = String::new();
    let mut depth = 0usize;
    let mut quote: Option<char> = None;

    for ch in selector.chars() {
        if let Some(q) = quote {
            current.push(ch);
            if ch == q {
                quote = None;
            }
            continue;
        }
        match ch {
            '"' | '\'' if depth > 0 => {
                quote = Some(ch);
                current.push(ch);
            }
            '[' => {
                depth += 1;
                current.push(ch);
            }
            ']' => {
                if depth == 0 {
                    return Err(SelectorError::unsupported(selector, "unbalanced ']'"));
                }
                depth -= 1;
                current.push(ch);
            }
            ',' if depth == 0 => {
                groups.push(std::mem::take(&mut current));
            }
            _ => current.push(ch),
        }
    }

    if depth > 0 || quote.is_some() {
        return Err(SelectorError::unsupported(selector, "unterminated attribute selector"));
    }
    groups.push(current);

    if groups.iter().any(|g| g.trim().is_empty()) {
        return Err(SelectorError::unsupported(selector, "empty selector group"));
    }
    Ok(groups)
}

fn tokenize_chain(group: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut depth = 0usize;
    let mut quote: Option<char> = None;

    let flush = |tokens: &mut Vec<String>, current: &mut String| {
        if !current.is_empty() {
            tokens.push(std::mem::take(current));
        }
    };

    for ch in group.chars() {
        if let Some(q) = quote {
            current.push(ch);
            if ch == q {
                quote = None;
            }
            continue;
        }
        match ch {
            '"' | '\'' if depth > 0 => {
                quote = Some(ch);
                current.push(ch);
            }
            '[' => {
                depth += 1;
                current.push(ch);
            }
            ']' => {
                depth = depth.saturating_sub(1);
                current.push(ch);
            }
            '>' if depth == 0 => {
                flush(&mut tokens, &mut current);
                tokens.push(">".to_string());
            }
            c if depth == 0 && c.is_whitespace() => flush(&mut tokens, &mut current),
            _ => current.push(ch),
        }
    }
    flush(&mut tokens, &mut current);
    tokens
}

fn parse_chain(group: &str) -> Result<Vec<SelectorPart>, SelectorError> {
    let group = group.trim();
    let mut parts: Vec<SelectorPart> = Vec::new();
    let mut pending: Option<Combinator> = None;

    for token in tokenize_chain(group) {
        if token == ">" {
            if pending.is_some() || parts.is_empty() {
                return Err(SelectorError::unsupported(group, "dangling '>' combinator"));
            }
            pending = Some(Combinator::Child);
            continue;
        }

        let compound = parse_compound(&token)?;
        let combinator = if parts.is_empty() {
            None
        } else {
            Some(pending.take().unwrap_or(Combinator::Descendant))
        };
        parts.push(SelectorPart {
            compound,
            combinator,
        });
    }

    if parts.is_empty() || pending.is_some() {
        return Err(SelectorError::unsupported(group, "incomplete selector"));
    }
    Ok(parts)
}

fn is_ident_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '-' || ch == '_' || !ch.is_ascii()
}

fn parse_ident(chars: &[char], start: usize) -> Option<(String, usize)> {
    let mut end = start;
    while end < chars.len() && is_ident_char(chars[end]) {
        end += 1;
    }
    (end > start).then(|| (chars[start..end].iter().collect(), end))
}

fn parse_compound(token: &str) -> Result<CompoundSelector, SelectorError> {
    let chars: Vec<char> = token.chars().collect();
    let mut compound = CompoundSelector::default();
    let mut i = 0usize;

    while i < chars.len() {
        match chars[i] {
            '*' => {
                if i != 0 {
                    return Err(SelectorError::unsupported(token, "'*' must come first"));
                }
                compound.universal = true;
                i += 1;
            }
            '#' => {
                let (id, next) = parse_ident(&chars, i + 1)
                    .ok_or_else(|| SelectorError::unsupported(token, "expected an id after '#'"))?;
                if compound.id.replace(id).is_some() {
                    return Err(SelectorError::unsupported(token, "more than one id"));
                }
                i = next;
            }
            '.' => {
                let (class, next) = parse_ident(&chars, i + 1).ok_or_else(|| {
                    SelectorError::unsupported(token, "expected a class name after '.'")
                })?;
                compound.classes.push(class);
                i = next;
            }
            '[' => {
                let (cond, next) = parse_attr(token, &chars, i)?;
                compound.attrs.push(cond);
                i = next;
            }
            ':' => {
                return Err(SelectorError::unsupported(
                    token,
                    "pseudo-classes are not supported",
                ));
            }
            _ => {
                if i != 0 {
                    return Err(SelectorError::unsupported(
                        token,
                        format!("unexpected character '{}'", chars[i]),
                    ));
                }
                let (tag, next) = parse_ident(&chars, i).ok_or_else(|| {
                    SelectorError::unsupported(token, format!("unexpected character '{}'", chars[i]))
                })?;
                compound.tag = Some(tag);
                i = next;
            }
        }
    }

    if compound.is_empty() {
        return Err(SelectorError::unsupported(token, "empty compound selector"));
    }
    Ok(compound)
}

/// Parses `[name]` or `[name=value]` starting at the `[` at `start`.
fn parse_attr(
    token: &str,
    chars: &[char],
    start: usize,
) -> Result<(AttrCondition, usize), SelectorError> {
    let mut end = start + 1;
    let mut quote: Option<char> = None;
    while end < chars.len() {
        let ch = chars[end];
        match quote {
            Some(q) if ch == q => quote = None,
            Some(_) => {}
            None if ch == '"' || ch == '\'' => quote = Some(ch),
            None if ch == ']' => break,
            None => {}
        }
        end += 1;
    }
    if end >= chars.len() {
        return Err(SelectorError::unsupported(token, "unterminated attribute selector"));
    }

    let body: String = chars[start + 1..end].iter().collect();
    let next = end + 1;

    let Some((name, value)) = body.split_once('=') else {
        let name = body.trim();
        if name.is_empty() || !name.chars().all(is_ident_char) {
            return Err(SelectorError::unsupported(token, "invalid attribute name"));
        }
        return Ok((AttrCondition::Exists(name.to_string()), next));
    };

    let name = name.trim();
    if name.ends_with(['~', '|', '^', '$', '*']) {
        return Err(SelectorError::unsupported(
            token,
            "only [attr] and [attr=value] are supported",
        ));
    }
    if name.is_empty() || !name.chars().all(is_ident_char) {
        return Err(SelectorError::unsupported(token, "invalid attribute name"));
    }

    let value = value.trim();
    let value = match value.chars().next() {
        Some(q @ ('"' | '\'')) => {
            if value.len() < 2 || !value.ends_with(q) {
                return Err(SelectorError::unsupported(token, "unterminated quoted value"));
            }
            &value[1..value.len() - 1]
        }
        _ => value,
    };

    Ok((AttrCondition::Equals(name.to_string(), value.to_string()), next))
}

#[cfg(test)]
#[path = "selector_tests.rs"]
mod tests;
